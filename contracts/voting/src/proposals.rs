use shared::{validate_description, BallotError};
use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::events::{ProposalRegistered, ProposalsReset};
use crate::storage;
use crate::tally;
use crate::types::Proposal;

/// Append a proposal for a whitelisted caller. The phase is checked by the
/// workflow before this runs.
pub fn register(env: &Env, caller: &Address, description: String) -> Result<u32, BallotError> {
    access::require_whitelisted(env, caller)?;
    validate_description(&description)?;

    let proposal_id = storage::get_proposal_count(env);
    storage::set_proposal(
        env,
        proposal_id,
        &Proposal {
            description,
            vote_count: 0,
        },
    );
    storage::set_proposal_count(env, proposal_id + 1);

    ProposalRegistered { proposal_id }.publish(env);

    Ok(proposal_id)
}

pub fn by_id(env: &Env, proposal_id: u32) -> Result<Proposal, BallotError> {
    if proposal_id >= storage::get_proposal_count(env) {
        return Err(BallotError::OutOfRange);
    }
    storage::get_proposal(env, proposal_id).ok_or(BallotError::OutOfRange)
}

pub fn len(env: &Env) -> u32 {
    storage::get_proposal_count(env)
}

pub fn increment_vote(env: &Env, proposal_id: u32) -> Result<u32, BallotError> {
    let mut proposal = by_id(env, proposal_id)?;
    proposal.vote_count += 1;
    storage::set_proposal(env, proposal_id, &proposal);
    tally::record_vote(env, proposal_id, proposal.vote_count);
    Ok(proposal.vote_count)
}

pub fn reset(env: &Env, caller: &Address) -> Result<u32, BallotError> {
    access::require_administrator(env, caller)?;

    let count = storage::get_proposal_count(env);
    storage::start_proposal_epoch(env);

    ProposalsReset { cleared: count }.publish(env);

    Ok(count)
}
