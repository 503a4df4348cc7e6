#![no_std]

multiversx_sc::imports!();

pub mod checkpoints;
pub mod errors;
pub mod guard;
pub mod ledger;
pub mod staking_proxy;
pub mod token_gateway;
pub mod types;

use errors::{ERR_INVALID_TOKEN, ERR_ZERO_AMOUNT};
use types::TimeUnit;

// ============================================================
// Contract
// ============================================================

/// Custodial staking of a single ESDT with a checkpointed history of every
/// account's stake and of the pool total.
#[multiversx_sc::contract]
pub trait TokenStaking:
    ledger::StakeLedgerModule
    + token_gateway::TokenGatewayModule
    + guard::ReentrancyGuardModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token: TokenIdentifier, opt_time_unit: OptionalValue<TimeUnit>) {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        let time_unit = opt_time_unit.into_option().unwrap_or(TimeUnit::Blocks);
        self.staked_token().set(&token);
        self.time_unit().set(time_unit);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stake / stakeFor
    // Tokens are taken into custody before the ledger is credited.
    // ========================================================

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self, amount: BigUint, data: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.stake_from(&caller, &caller, amount, data);
    }

    #[payable("*")]
    #[endpoint(stakeFor)]
    fn stake_for(&self, account: ManagedAddress, amount: BigUint, data: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.stake_from(&caller, &account, amount, data);
    }

    // ========================================================
    // ENDPOINT: unstake
    // The ledger is debited before tokens leave custody. A failed
    // release reverts the debit with the rest of the transaction.
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self, amount: BigUint, data: ManagedBuffer) {
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        let caller = self.blockchain().get_caller();

        self.enter_operation();
        let total = self.record_unstake(&caller, &amount, self.current_time());
        self.release(&caller, &amount);
        self.exit_operation();

        self.unstaked_event(&caller, &amount, &total, &data);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn stake_from(
        &self,
        payer: &ManagedAddress,
        beneficiary: &ManagedAddress,
        amount: BigUint,
        data: ManagedBuffer,
    ) {
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.enter_operation();
        self.pull_into(payer, &amount);
        let total = self.record_stake(beneficiary, &amount, self.current_time());
        self.exit_operation();

        self.staked_event(beneficiary, &amount, &total, &data);
    }

    fn current_time(&self) -> u64 {
        match self.time_unit().get() {
            TimeUnit::Blocks => self.blockchain().get_block_nonce(),
            TimeUnit::Seconds => self.blockchain().get_block_timestamp(),
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTimeUnit)]
    fn get_time_unit(&self) -> TimeUnit {
        self.time_unit().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("staked")]
    fn staked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total: &BigUint,
        data: &ManagedBuffer,
    );

    #[event("unstaked")]
    fn unstaked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total: &BigUint,
        data: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("timeUnit")]
    fn time_unit(&self) -> SingleValueMapper<TimeUnit>;
}
