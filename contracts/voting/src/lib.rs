#![no_std]
//! Single-organizer ballot.
//!
//! An administrator walks the ballot through six phases, registers the voter
//! whitelist, and whitelisted voters submit proposals and cast one vote each.
//! The proposal with the most votes wins; ties go to the lowest id.

mod access;
mod events;
mod proposals;
mod storage;
mod tally;
mod types;
mod whitelist;
mod workflow;

pub use events::{
    PhaseChanged, ProposalRegistered, ProposalsReset, VoteCast, VoterRegistered, WhitelistReset,
};
pub use shared::BallotError;
pub use types::{DataKey, Leader, Proposal, Voter, WorkflowStatus};

use soroban_sdk::{contract, contractimpl, Address, Env, String};

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Set the administrator and open voter registration. Can only be called
    /// once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), BallotError> {
        if storage::has_admin(&env) {
            return Err(BallotError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        Ok(())
    }

    pub fn administrator(env: Env) -> Result<Address, BallotError> {
        access::administrator(&env)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Move to the next phase and return it. Administrator only.
    pub fn advance(env: Env, caller: Address) -> Result<WorkflowStatus, BallotError> {
        caller.require_auth();
        workflow::advance(&env, &caller)
    }

    pub fn current_phase(env: Env) -> Result<WorkflowStatus, BallotError> {
        workflow::current_phase(&env)
    }

    // ── Whitelist ────────────────────────────────────────────────────────────

    /// Whitelist `voter`. Administrator only, during `RegisteringVoters`.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), BallotError> {
        caller.require_auth();
        whitelist::add(&env, &caller, &voter)
    }

    /// Identity registered at `index`, in registration order.
    pub fn voter_at(env: Env, index: u32) -> Result<Address, BallotError> {
        whitelist::by_position(&env, index)
    }

    pub fn is_registered(env: Env, voter: Address) -> bool {
        whitelist::is_registered(&env, &voter)
    }

    pub fn get_voter(env: Env, voter: Address) -> Option<Voter> {
        storage::get_voter(&env, &voter)
    }

    pub fn voter_count(env: Env) -> u32 {
        whitelist::len(&env)
    }

    /// Clear the whitelist. Administrator only, in any phase.
    pub fn reset_whitelist(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        whitelist::reset(&env, &caller)?;
        Ok(())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Register a proposal and return its id. Whitelisted voters only, during
    /// `ProposalsRegistrationStarted`.
    pub fn register_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, BallotError> {
        caller.require_auth();
        workflow::register_proposal(&env, &caller, description)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, BallotError> {
        proposals::by_id(&env, proposal_id)
    }

    pub fn proposal_count(env: Env) -> u32 {
        proposals::len(&env)
    }

    /// Clear every proposal and its votes. Administrator only, in any phase.
    pub fn reset_proposals(env: Env, caller: Address) -> Result<(), BallotError> {
        caller.require_auth();
        proposals::reset(&env, &caller)?;
        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single vote. Whitelisted voters only, during
    /// `VotingSessionStarted`.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), BallotError> {
        caller.require_auth();
        workflow::cast_vote(&env, &caller, proposal_id)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    pub fn winning_proposal_id(env: Env) -> Result<u32, BallotError> {
        tally::winning_proposal_id(&env)
    }

    pub fn winning_proposal(env: Env) -> Result<Proposal, BallotError> {
        tally::winning_proposal(&env)
    }
}
