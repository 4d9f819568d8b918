//! Notifications published after a state change commits.
//!
//! Every event carries its snake_case struct name as the first topic.

use soroban_sdk::{contractevent, Address};

use crate::types::WorkflowStatus;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    pub voter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseChanged {
    pub previous: WorkflowStatus,
    pub current: WorkflowStatus,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegistered {
    pub proposal_id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub voter: Address,
    pub proposal_id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistReset {
    pub cleared: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalsReset {
    pub cleared: u32,
}
