use shared::BallotError;
use soroban_sdk::Env;

use crate::proposals;
use crate::storage;
use crate::types::{Leader, Proposal};

/// Keep the running leader current after `proposal_id` reached `vote_count`.
///
/// Counts only grow within an epoch, so the leader changes only when the
/// voted proposal overtakes it, or ties it with a lower id.
pub fn record_vote(env: &Env, proposal_id: u32, vote_count: u32) {
    let leads = match storage::get_leader(env) {
        None => true,
        Some(leader) => {
            vote_count > leader.vote_count
                || (vote_count == leader.vote_count && proposal_id < leader.proposal_id)
        }
    };
    if leads {
        storage::set_leader(
            env,
            &Leader {
                proposal_id,
                vote_count,
            },
        );
    }
}

/// Id of the proposal with the most votes. Ties go to the lowest id, and
/// with no votes at all the first proposal leads.
///
/// Callable in any phase; before `VotesTallied` it reflects the votes cast so
/// far.
pub fn winning_proposal_id(env: &Env) -> Result<u32, BallotError> {
    if proposals::len(env) == 0 {
        return Err(BallotError::EmptyLedger);
    }
    Ok(storage::get_leader(env).map_or(0, |leader| leader.proposal_id))
}

pub fn winning_proposal(env: &Env) -> Result<Proposal, BallotError> {
    proposals::by_id(env, winning_proposal_id(env)?)
}
