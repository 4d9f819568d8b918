//! Configuration constants for the ballot contract

// ===== Storage Lifetime (in ledgers, ~5s per ledger) =====

/// One day worth of ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is bumped once its TTL drops below one week
pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is bumped to thirty days
pub const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

/// Whitelist and proposal entries are bumped once below one week
pub const PERSISTENT_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Whitelist and proposal entries are bumped to thirty days
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

// ===== Input Limits =====

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;
