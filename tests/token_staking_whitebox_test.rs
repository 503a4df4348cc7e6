// Whitebox tests reach past the endpoints into the ledger and the
// operation lock. Everything else is covered by the blackbox suite.

use multiversx_sc_scenario::{
    api::DebugApi, imports::*, multiversx_sc::contract_base::ContractBase,
};

use token_staking::{
    errors::{ERR_INSUFFICIENT_CUSTODY, ERR_OPERATION_IN_PROGRESS},
    guard::ReentrancyGuardModule,
    ledger::StakeLedgerModule,
    staking_proxy::TokenStakingProxy,
};

const CODE_PATH: MxscPath = MxscPath::new("output/token-staking.mxsc.json");

const STAKING_ADDRESS: TestSCAddress = TestSCAddress::new("token-staking");
const OWNER: TestAddress = TestAddress::new("owner");

const STAKE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("STAKE-123456");
const STAKE_TOKEN_ID: &str = "STAKE-123456";

type StakingContract = token_staking::ContractObj<DebugApi>;

fn deployed_world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, token_staking::ContractBuilder);

    world
        .account(OWNER)
        .nonce(1)
        .esdt_balance(STAKE_TOKEN, 1_000u64);
    world
        .tx()
        .from(OWNER)
        .typed(TokenStakingProxy)
        .init(
            TokenIdentifier::<StaticApi>::from(STAKE_TOKEN_ID),
            OptionalValue::<token_staking::types::TimeUnit>::None,
        )
        .code(CODE_PATH)
        .new_address(STAKING_ADDRESS)
        .run();

    world
}

fn stake(world: &mut ScenarioWorld, amount: u64) {
    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .stake(amount, ManagedBuffer::<StaticApi>::new())
        .single_esdt(&TokenIdentifier::from(STAKE_TOKEN_ID), 0, &BigUint::from(amount))
        .run();
}

#[test]
fn contract_object_builds() {
    let _: fn() -> StakingContract = token_staking::contract_obj;
}

#[test]
fn ledger_transitions_at_explicit_times() {
    let mut world = deployed_world();

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            let alice = ManagedAddress::from([7u8; 32]);
            let bob = ManagedAddress::from([9u8; 32]);

            let total = sc.record_stake(&alice, &BigUint::from(100u64), 5);
            assert_eq!(total, BigUint::from(100u64));

            // same time: overwritten in place
            let total = sc.record_stake(&alice, &BigUint::from(20u64), 5);
            assert_eq!(total, BigUint::from(120u64));
            assert_eq!(sc.get_checkpoint_count(&alice), 1);

            sc.record_stake(&bob, &BigUint::from(30u64), 6);
            let total = sc.record_unstake(&alice, &BigUint::from(70u64), 9);
            assert_eq!(total, BigUint::from(50u64));

            assert_eq!(sc.get_checkpoint_count(&alice), 2);
            assert_eq!(sc.total_staked_for(&alice), BigUint::from(50u64));
            assert_eq!(sc.total_staked_for(&bob), BigUint::from(30u64));
            assert_eq!(sc.total_staked(), BigUint::from(80u64));

            assert_eq!(sc.total_staked_for_at(&alice, 4), BigUint::zero());
            assert_eq!(sc.total_staked_for_at(&alice, 8), BigUint::from(120u64));
            assert_eq!(sc.total_staked_at(5), BigUint::from(120u64));
            assert_eq!(sc.total_staked_at(6), BigUint::from(150u64));
            assert_eq!(sc.total_staked_at(9), BigUint::from(80u64));
            assert_eq!(sc.last_staked_for(&alice), 9);
            assert_eq!(sc.last_staked_for(&ManagedAddress::from([1u8; 32])), 0);

            assert_eq!(sc.stakers().len(), 2);
            assert!(sc.stakers().contains(&alice));
            assert!(sc.stakers().contains(&bob));
        });
}

#[test]
fn operation_lock_blocks_nested_staking() {
    let mut world = deployed_world();

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            sc.operation_in_progress().set(true);
        });

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .stake(10u64, ManagedBuffer::<StaticApi>::new())
        .single_esdt(&TokenIdentifier::from(STAKE_TOKEN_ID), 0, &BigUint::from(10u64))
        .returns(ExpectError(4, ERR_OPERATION_IN_PROGRESS))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            sc.exit_operation();
        });

    stake(&mut world, 10);

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            assert!(!sc.operation_in_progress().get());
            assert_eq!(sc.total_staked(), BigUint::from(10u64));
        });
}

#[test]
fn failed_release_rolls_back_unstake() {
    let mut world = deployed_world();

    // ledger credit with no tokens behind it
    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            let caller = sc.blockchain().get_caller();
            sc.record_stake(&caller, &BigUint::from(50u64), 0);
        });

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .unstake(50u64, ManagedBuffer::<StaticApi>::new())
        .returns(ExpectError(4, ERR_INSUFFICIENT_CUSTODY))
        .run();

    world
        .query()
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .total_staked_for(OWNER)
        .returns(ExpectValue(50u64))
        .run();
    world
        .query()
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .total_staked()
        .returns(ExpectValue(50u64))
        .run();
    world
        .query()
        .to(STAKING_ADDRESS)
        .typed(TokenStakingProxy)
        .get_checkpoint_count(OWNER)
        .returns(ExpectValue(1u64))
        .run();
    world
        .check_account(OWNER)
        .esdt_balance(STAKE_TOKEN, 1_000u64);

    world
        .tx()
        .from(OWNER)
        .to(STAKING_ADDRESS)
        .whitebox(token_staking::contract_obj, |sc| {
            assert!(!sc.operation_in_progress().get());
        });
}
