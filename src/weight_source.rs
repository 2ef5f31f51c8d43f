multiversx_sc::imports!();

use voting_coin::voting_coin_proxy;

/// Vote weight backed by a fungible token contract.
///
/// Only two questions are ever asked of the token: how much a voter holds,
/// and how much exists in total. Both are plain sync calls to its views.
#[multiversx_sc::module]
pub trait WeightSourceModule {
    fn verified_weight(&self, voter: &ManagedAddress) -> BigUint {
        let token = self.weight_source_address().get();
        self.tx()
            .to(&token)
            .typed(voting_coin_proxy::VotingCoinProxy)
            .balance_of(voter.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn total_weight(&self) -> BigUint {
        let token = self.weight_source_address().get();
        self.tx()
            .to(&token)
            .typed(voting_coin_proxy::VotingCoinProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call()
    }

    #[storage_mapper("weightSourceAddress")]
    fn weight_source_address(&self) -> SingleValueMapper<ManagedAddress>;
}
