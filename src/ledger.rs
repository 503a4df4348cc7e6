multiversx_sc::imports!();

use crate::{
    checkpoints::{Checkpoint, CheckpointLog},
    errors::{ERR_INSUFFICIENT_STAKE, ERR_INVALID_TIME, ERR_ZERO_AMOUNT},
    types::LedgerUpdate,
};

/// Per-account and pool-wide staked balances with full history.
///
/// The pool log moves in lockstep with the account logs: after every commit
/// its newest value equals the sum of every account's newest value.
#[multiversx_sc::module]
pub trait StakeLedgerModule {
    // ========================================================
    // TRANSITIONS
    // ========================================================

    fn record_stake(&self, account: &ManagedAddress, amount: &BigUint, time: u64) -> BigUint {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);

        let update = LedgerUpdate {
            account: account.clone(),
            account_total: self.account_log(account).last_value() + amount,
            global_total: self.total_log().last_value() + amount,
        };
        self.commit_update(&update, time);

        update.account_total
    }

    fn record_unstake(&self, account: &ManagedAddress, amount: &BigUint, time: u64) -> BigUint {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);

        let staked = self.account_log(account).last_value();
        require!(staked >= *amount, ERR_INSUFFICIENT_STAKE);

        let update = LedgerUpdate {
            account: account.clone(),
            account_total: staked - amount,
            global_total: self.total_log().last_value() - amount,
        };
        self.commit_update(&update, time);

        update.account_total
    }

    /// Writes both logs, or neither: time acceptance is checked on the
    /// account and pool logs before the first write.
    fn commit_update(&self, update: &LedgerUpdate<Self::Api>, time: u64) {
        let mut account_log = self.account_log(&update.account);
        let mut total_log = self.total_log();
        require!(
            account_log.accepts(time) && total_log.accepts(time),
            ERR_INVALID_TIME
        );

        if account_log.is_empty() {
            self.stakers().insert(update.account.clone());
        }

        if let Err(err) = account_log.insert_or_update(time, update.account_total.clone()) {
            sc_panic!(err.message());
        }
        if let Err(err) = total_log.insert_or_update(time, update.global_total.clone()) {
            sc_panic!(err.message());
        }
    }

    fn account_log(&self, account: &ManagedAddress) -> CheckpointLog<Self::Api> {
        CheckpointLog::new(self.account_checkpoints(account))
    }

    fn total_log(&self) -> CheckpointLog<Self::Api> {
        CheckpointLog::new(self.total_checkpoints())
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(supportsHistory)]
    fn supports_history(&self) -> bool {
        true
    }

    #[view(totalStaked)]
    fn total_staked(&self) -> BigUint {
        self.total_log().last_value()
    }

    #[view(totalStakedFor)]
    fn total_staked_for(&self, account: &ManagedAddress) -> BigUint {
        self.account_log(account).last_value()
    }

    #[view(totalStakedForAt)]
    fn total_staked_for_at(&self, account: &ManagedAddress, time: u64) -> BigUint {
        self.account_log(account).value_at(time)
    }

    #[view(totalStakedAt)]
    fn total_staked_at(&self, time: u64) -> BigUint {
        self.total_log().value_at(time)
    }

    /// Time of the account's newest checkpoint, 0 if it never staked.
    #[view(lastStakedFor)]
    fn last_staked_for(&self, account: &ManagedAddress) -> u64 {
        self.account_log(account).last_time().unwrap_or(0)
    }

    #[view(getCheckpointCount)]
    fn get_checkpoint_count(&self, account: &ManagedAddress) -> u64 {
        self.account_log(account).len() as u64
    }

    #[view(getStakeHistory)]
    fn get_stake_history(
        &self,
        account: &ManagedAddress,
    ) -> MultiValueEncoded<Checkpoint<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for checkpoint in self.account_checkpoints(account).iter() {
            result.push(checkpoint);
        }
        result
    }

    #[view(getStakers)]
    fn get_stakers(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let stakers = self.stakers();
        let total = stakers.len() as u64;
        let start = core::cmp::min(from, total);
        let end = core::cmp::min(start.saturating_add(count), total);

        // mapper indexes are 1-based
        for index in start + 1..=end {
            result.push(stakers.get_by_index(index as usize));
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("accountCheckpoints")]
    fn account_checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;

    #[storage_mapper("totalCheckpoints")]
    fn total_checkpoints(&self) -> VecMapper<Checkpoint<Self::Api>>;

    /// Every account that ever staked. Never pruned, history outlives stake.
    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
