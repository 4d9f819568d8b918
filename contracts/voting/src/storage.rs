use shared::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO,
    PERSISTENT_TTL_THRESHOLD,
};
use shared::BallotError;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Leader, Proposal, Voter, WorkflowStatus};

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

fn get_counter(env: &Env, key: &DataKey) -> u32 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn set_counter(env: &Env, key: &DataKey, value: u32) {
    env.storage().instance().set(key, &value);
    bump_instance(env);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> Result<WorkflowStatus, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

// ── Whitelist ────────────────────────────────────────────────────────────────
// Entries of earlier epochs are never read again and expire with their TTL.

fn whitelist_epoch(env: &Env) -> u32 {
    get_counter(env, &DataKey::WhitelistEpoch)
}

pub fn get_voter_count(env: &Env) -> u32 {
    get_counter(env, &DataKey::VoterCount)
}

pub fn set_voter_count(env: &Env, count: u32) {
    set_counter(env, &DataKey::VoterCount, count);
}

pub fn get_voter_at(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::VoterAt(whitelist_epoch(env), index))
}

pub fn set_voter_at(env: &Env, index: u32, voter: &Address) {
    let key = DataKey::VoterAt(whitelist_epoch(env), index);
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);
}

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(whitelist_epoch(env), address.clone()))
}

pub fn set_voter(env: &Env, voter: &Voter) {
    let key = DataKey::Voter(whitelist_epoch(env), voter.address.clone());
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);
}

/// Start an empty whitelist. Touches instance storage only.
pub fn start_whitelist_epoch(env: &Env) {
    set_counter(env, &DataKey::WhitelistEpoch, whitelist_epoch(env) + 1);
    set_voter_count(env, 0);
}

// ── Proposals ────────────────────────────────────────────────────────────────

fn proposal_epoch(env: &Env) -> u32 {
    get_counter(env, &DataKey::ProposalEpoch)
}

pub fn get_proposal_count(env: &Env) -> u32 {
    get_counter(env, &DataKey::ProposalCount)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    set_counter(env, &DataKey::ProposalCount, count);
}

pub fn get_proposal(env: &Env, id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_epoch(env), id))
}

pub fn set_proposal(env: &Env, id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_epoch(env), id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn get_leader(env: &Env) -> Option<Leader> {
    env.storage().instance().get(&DataKey::Leader)
}

pub fn set_leader(env: &Env, leader: &Leader) {
    env.storage().instance().set(&DataKey::Leader, leader);
    bump_instance(env);
}

/// Start an empty ledger with no leader. Touches instance storage only.
pub fn start_proposal_epoch(env: &Env) {
    set_counter(env, &DataKey::ProposalEpoch, proposal_epoch(env) + 1);
    set_proposal_count(env, 0);
    env.storage().instance().remove(&DataKey::Leader);
}
