//! Error codes for the ballot contract
//!
//! Codes are stable: clients match on the numeric value carried by the
//! contract error, so new variants are only ever appended.
//!
//! - 1-7: Workflow, whitelist and ledger errors
//! - 8-19: Lifecycle and input errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BallotError {
    // ===== Workflow, whitelist and ledger errors (1-7) =====
    /// Caller lacks the role the operation requires
    Unauthorized = 1,

    /// Identity is already on the whitelist
    DuplicateEntry = 2,

    /// Position or proposal id is beyond the current collection size
    OutOfRange = 3,

    /// Voter already cast a vote in this epoch
    AlreadyVoted = 4,

    /// Proposal description is empty or whitespace only
    EmptyDescription = 5,

    /// Tally requested while no proposal is registered
    EmptyLedger = 6,

    /// Operation is not legal in the current workflow phase
    IllegalPhase = 7,

    // ===== Lifecycle and input errors (8-19) =====
    /// Contract has no administrator yet
    NotInitialized = 8,

    /// Administrator was already set
    AlreadyInitialized = 9,

    /// Proposal description exceeds `MAX_DESCRIPTION_LEN` bytes
    DescriptionTooLong = 10,
}
