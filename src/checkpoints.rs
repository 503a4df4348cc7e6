multiversx_sc::derive_imports!();

use multiversx_sc::{
    api::{ManagedTypeApi, StorageMapperApi},
    storage::mappers::VecMapper,
    types::BigUint,
};

use crate::errors::ERR_INVALID_TIME;

// ============================================================
// Checkpoint — one (time, value) entry of a history log
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub time: u64,
    pub value: BigUint<M>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckpointError {
    /// Write attempted at a time earlier than the newest entry.
    InvalidTime,
}

impl CheckpointError {
    pub fn message(&self) -> &'static str {
        match self {
            CheckpointError::InvalidTime => ERR_INVALID_TIME,
        }
    }
}

// ============================================================
// CheckpointLog — append-only, time-ordered value history
// ============================================================

/// History of a single staked balance, backed by a `VecMapper`.
///
/// Entries are ordered by non-decreasing time and never removed. A write at
/// the time of the newest entry replaces that entry's value, so there is at
/// most one entry per time unit.
pub struct CheckpointLog<SA>
where
    SA: StorageMapperApi,
{
    entries: VecMapper<SA, Checkpoint<SA>>,
}

impl<SA> CheckpointLog<SA>
where
    SA: StorageMapperApi,
{
    pub fn new(entries: VecMapper<SA, Checkpoint<SA>>) -> Self {
        CheckpointLog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<Checkpoint<SA>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.get(self.entries.len()))
    }

    pub fn last_time(&self) -> Option<u64> {
        self.last().map(|checkpoint| checkpoint.time)
    }

    pub fn last_value(&self) -> BigUint<SA> {
        self.last()
            .map_or_else(BigUint::zero, |checkpoint| checkpoint.value)
    }

    /// True if `insert_or_update` would accept a write at `time`.
    pub fn accepts(&self, time: u64) -> bool {
        self.last_time().map_or(true, |last| time >= last)
    }

    pub fn insert_or_update(&mut self, time: u64, value: BigUint<SA>) -> Result<(), CheckpointError> {
        let len = self.entries.len();
        if len > 0 {
            let mut newest = self.entries.get(len);
            if time < newest.time {
                return Err(CheckpointError::InvalidTime);
            }
            if time == newest.time {
                newest.value = value;
                self.entries.set(len, &newest);
                return Ok(());
            }
        }

        self.entries.push(&Checkpoint { time, value });
        Ok(())
    }

    /// Value of the latest entry at or before `time`, zero if there is none.
    pub fn value_at(&self, time: u64) -> BigUint<SA> {
        match latest_index_at(self.entries.len(), time, |index| self.entries.get(index).time) {
            Some(index) => self.entries.get(index).value,
            None => BigUint::zero(),
        }
    }
}

/// Binary search over 1-based positions `1..=len` whose times are
/// non-decreasing. Returns the greatest position with `time_of(pos) <= time`.
pub fn latest_index_at<F>(len: usize, time: u64, time_of: F) -> Option<usize>
where
    F: Fn(usize) -> u64,
{
    if len == 0 || time < time_of(1) {
        return None;
    }
    if time >= time_of(len) {
        return Some(len);
    }

    // time_of(low) <= time < time_of(high)
    let mut low = 1usize;
    let mut high = len;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if time_of(mid) <= time {
            low = mid;
        } else {
            high = mid;
        }
    }
    Some(low)
}
