// ============================================================
// Error messages surfaced as user errors by require!/sc_panic!
// ============================================================

pub const ERR_INVALID_TOKEN: &str = "Invalid staking token identifier";

pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";

// ── Token transfers ──

pub const ERR_PAYER_NOT_CALLER: &str = "Token transfer failed: tokens can only be pulled from the caller";
pub const ERR_WRONG_PAYMENT_TOKEN: &str = "Token transfer failed: payment is not the staking token";
pub const ERR_PAYMENT_AMOUNT_MISMATCH: &str = "Token transfer failed: payment does not match amount";
pub const ERR_INSUFFICIENT_CUSTODY: &str = "Token transfer failed: insufficient custody balance";

// ── Ledger ──

pub const ERR_INSUFFICIENT_STAKE: &str = "Insufficient staked amount";
pub const ERR_INVALID_TIME: &str = "Checkpoint time precedes latest entry";

pub const ERR_OPERATION_IN_PROGRESS: &str = "Staking operation already in progress";
