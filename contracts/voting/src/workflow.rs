//! Ballot phase state machine and the operations gated on it.
//!
//! Mutating paths read and check everything first and write last, so a
//! guard failure never leaves a partial update behind.

use shared::BallotError;
use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::events::{PhaseChanged, VoteCast};
use crate::proposals;
use crate::storage;
use crate::types::WorkflowStatus;
use crate::whitelist;

pub fn current_phase(env: &Env) -> Result<WorkflowStatus, BallotError> {
    storage::get_status(env)
}

pub fn require_phase(env: &Env, expected: WorkflowStatus) -> Result<(), BallotError> {
    if current_phase(env)? != expected {
        return Err(BallotError::IllegalPhase);
    }
    Ok(())
}

/// Move to the next phase. Wrapping back to `RegisteringVoters` starts a new
/// cycle but leaves the whitelist and proposals for the administrator to
/// reset.
pub fn advance(env: &Env, caller: &Address) -> Result<WorkflowStatus, BallotError> {
    access::require_administrator(env, caller)?;

    let previous = current_phase(env)?;
    let current = previous.next();
    storage::set_status(env, current);

    PhaseChanged { previous, current }.publish(env);

    Ok(current)
}

pub fn register_proposal(
    env: &Env,
    caller: &Address,
    description: String,
) -> Result<u32, BallotError> {
    require_phase(env, WorkflowStatus::ProposalsRegistrationStarted)?;
    proposals::register(env, caller, description)
}

pub fn cast_vote(env: &Env, caller: &Address, proposal_id: u32) -> Result<(), BallotError> {
    require_phase(env, WorkflowStatus::VotingSessionStarted)?;
    let voter = access::require_whitelisted(env, caller)?;
    if voter.has_voted {
        return Err(BallotError::AlreadyVoted);
    }
    proposals::by_id(env, proposal_id)?;

    // Guards above cover both writes below.
    proposals::increment_vote(env, proposal_id)?;
    whitelist::mark_voted(env, caller, proposal_id)?;

    VoteCast {
        voter: caller.clone(),
        proposal_id,
    }
    .publish(env);

    Ok(())
}
