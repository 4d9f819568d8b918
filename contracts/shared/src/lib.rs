#![no_std]
//! # Shared Ballot Library
//!
//! Error codes, configuration constants and input validation helpers used by
//! the ballot contract.
//!
//! ## Modules
//!
//! - `errors` - The `BallotError` enum returned by every contract entry point
//! - `constants` - Storage lifetime and input size limits
//! - `validation` - Reusable validation helper functions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::BallotError;
//! use shared::validation::validate_description;
//! use shared::constants::MAX_DESCRIPTION_LEN;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::BallotError;
pub use validation::validate_description;
