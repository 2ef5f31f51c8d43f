#![no_std]

multiversx_sc::imports!();

pub mod voting_coin_proxy;

/// Fungible token whose balances back vote weight in the voting contract.
///
/// The whole supply is minted to the deployer at init and only moves
/// through plain transfers afterwards.
#[multiversx_sc::contract]
pub trait VotingCoin {
    #[init]
    fn init(&self, initial_supply: BigUint) {
        let caller = self.blockchain().get_caller();
        self.balances(&caller).set(&initial_supply);
        self.supply().set(&initial_supply);

        self.transfer_event(&ManagedAddress::zero(), &caller, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, "Transfer amount must be positive");

        let balance = self.balances(&caller).get();
        require!(amount <= balance, "Insufficient balance");

        self.balances(&caller).update(|b| *b -= &amount);
        self.balances(&to).update(|b| *b += &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> BigUint {
        self.balances(&holder).get()
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.supply().get()
    }

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[storage_mapper("balances")]
    fn balances(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("supply")]
    fn supply(&self) -> SingleValueMapper<BigUint>;
}
