use soroban_sdk::{contracttype, Address, String};

/// Phases of the ballot, in the only order the administrator may walk them.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The unique successor in the cycle; `VotesTallied` wraps around.
    pub fn next(self) -> Self {
        match self {
            WorkflowStatus::RegisteringVoters => WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowStatus::ProposalsRegistrationStarted => {
                WorkflowStatus::ProposalsRegistrationEnded
            }
            WorkflowStatus::ProposalsRegistrationEnded => WorkflowStatus::VotingSessionStarted,
            WorkflowStatus::VotingSessionStarted => WorkflowStatus::VotingSessionEnded,
            WorkflowStatus::VotingSessionEnded => WorkflowStatus::VotesTallied,
            WorkflowStatus::VotesTallied => WorkflowStatus::RegisteringVoters,
        }
    }
}

/// A whitelist entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub address: Address,
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Proposal currently holding the most votes, lowest id on a tie
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leader {
    pub proposal_id: u32,
    pub vote_count: u32,
}

/// Storage keys. Whitelist and proposal entries are keyed by their
/// collection's epoch so a reset only has to move the epoch forward.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Admin,
    Status,
    WhitelistEpoch,
    VoterCount,
    ProposalEpoch,
    ProposalCount,
    Leader,
    // Persistent storage: (epoch, registration order) -> identity
    VoterAt(u32, u32),
    Voter(u32, Address),
    Proposal(u32, u32),
}
