multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Time Unit — clock used to stamp checkpoints
// ============================================================

/// Selects the time source for checkpoints. Fixed at deployment.
///
/// Encoded as `0` for blocks and `1` for seconds.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeUnit {
    /// Block nonce.
    Blocks,
    /// Block timestamp, in seconds.
    Seconds,
}

// ============================================================
// Ledger Update — staged result of a stake/unstake transition
// ============================================================

/// New totals computed for one account and the pool, not yet written.
#[derive(Clone, Debug)]
pub struct LedgerUpdate<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub account_total: BigUint<M>,
    pub global_total: BigUint<M>,
}
