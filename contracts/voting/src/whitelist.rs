use shared::BallotError;
use soroban_sdk::{Address, Env};

use crate::access;
use crate::events::{VoterRegistered, WhitelistReset};
use crate::storage;
use crate::types::{Voter, WorkflowStatus};
use crate::workflow;

pub fn add(env: &Env, caller: &Address, address: &Address) -> Result<(), BallotError> {
    access::require_administrator(env, caller)?;
    workflow::require_phase(env, WorkflowStatus::RegisteringVoters)?;
    if storage::get_voter(env, address).is_some() {
        return Err(BallotError::DuplicateEntry);
    }

    let index = storage::get_voter_count(env);
    storage::set_voter_at(env, index, address);
    storage::set_voter(
        env,
        &Voter {
            address: address.clone(),
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        },
    );
    storage::set_voter_count(env, index + 1);

    VoterRegistered {
        voter: address.clone(),
    }
    .publish(env);

    Ok(())
}

pub fn by_position(env: &Env, index: u32) -> Result<Address, BallotError> {
    if index >= storage::get_voter_count(env) {
        return Err(BallotError::OutOfRange);
    }
    storage::get_voter_at(env, index).ok_or(BallotError::OutOfRange)
}

pub fn is_registered(env: &Env, address: &Address) -> bool {
    storage::get_voter(env, address).map_or(false, |voter| voter.is_registered)
}

pub fn len(env: &Env) -> u32 {
    storage::get_voter_count(env)
}

/// Consume the voter's ballot. Only the vote path calls this.
pub fn mark_voted(env: &Env, address: &Address, proposal_id: u32) -> Result<(), BallotError> {
    let mut voter = access::require_whitelisted(env, address)?;
    if voter.has_voted {
        return Err(BallotError::AlreadyVoted);
    }
    voter.has_voted = true;
    voter.voted_proposal_id = proposal_id;
    storage::set_voter(env, &voter);
    Ok(())
}

/// Drop every entry by opening a new epoch. Allowed in any phase; returns how
/// many entries were cleared.
pub fn reset(env: &Env, caller: &Address) -> Result<u32, BallotError> {
    access::require_administrator(env, caller)?;

    let count = storage::get_voter_count(env);
    storage::start_whitelist_epoch(env);

    WhitelistReset { cleared: count }.publish(env);

    Ok(count)
}
