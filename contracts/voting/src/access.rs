use shared::BallotError;
use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::Voter;

pub fn administrator(env: &Env) -> Result<Address, BallotError> {
    storage::get_admin(env)
}

pub fn require_administrator(env: &Env, caller: &Address) -> Result<(), BallotError> {
    if *caller != administrator(env)? {
        return Err(BallotError::Unauthorized);
    }
    Ok(())
}

/// Resolve the caller's whitelist entry. Whether it already voted is left to
/// the vote path.
pub fn require_whitelisted(env: &Env, caller: &Address) -> Result<Voter, BallotError> {
    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => Err(BallotError::Unauthorized),
    }
}
