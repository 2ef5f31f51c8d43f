use multiversx_sc_scenario::imports::*;

use voting_coin::voting_coin_proxy::VotingCoinProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const HOLDER: TestAddress = TestAddress::new("holder");
const COIN_ADDRESS: TestSCAddress = TestSCAddress::new("voting-coin");
const COIN_CODE: MxscPath = MxscPath::new("output/voting-coin.mxsc.json");

fn deploy(initial_supply: u64) -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(COIN_CODE, voting_coin::ContractBuilder);
    world.account(OWNER).nonce(1);
    world.account(HOLDER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(VotingCoinProxy)
        .init(initial_supply)
        .code(COIN_CODE)
        .new_address(COIN_ADDRESS)
        .run();
    world
}

fn check_balance(world: &mut ScenarioWorld, holder: TestAddress, expected: u64) {
    world
        .query()
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .balance_of(holder)
        .returns(ExpectValue(expected))
        .run();
}

#[test]
fn supply_is_minted_to_deployer() {
    let mut world = deploy(100);

    check_balance(&mut world, OWNER, 100);
    check_balance(&mut world, HOLDER, 0);
    world
        .query()
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .total_supply()
        .returns(ExpectValue(100u64))
        .run();
}

#[test]
fn transfer_moves_balance() {
    let mut world = deploy(100);

    world
        .tx()
        .from(OWNER)
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .transfer(HOLDER, 30u64)
        .run();

    check_balance(&mut world, OWNER, 70);
    check_balance(&mut world, HOLDER, 30);
    world
        .query()
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .total_supply()
        .returns(ExpectValue(100u64))
        .run();
}

#[test]
fn transfer_rejects_overdraft() {
    let mut world = deploy(100);

    world
        .tx()
        .from(HOLDER)
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .transfer(OWNER, 1u64)
        .returns(ExpectError(4, "Insufficient balance"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COIN_ADDRESS)
        .typed(VotingCoinProxy)
        .transfer(HOLDER, 0u64)
        .returns(ExpectError(4, "Transfer amount must be positive"))
        .run();

    check_balance(&mut world, OWNER, 100);
}
