//! Mission requirements, results and team vote rounds

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::NameSet;

/// How each player voted on a proposed team, in the order the votes were reported
pub type PlayerVotes = IndexMap<String, bool>;

/// Team size and failure threshold for one mission slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequirement {
    pub people_on_mission: usize,
    pub failures_required_to_fail: usize,
}

impl MissionRequirement {
    pub fn new(people_on_mission: usize, failures_required_to_fail: usize) -> Self {
        Self {
            people_on_mission,
            failures_required_to_fail,
        }
    }
}

/// Outcome of a completed mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResult {
    pub success: bool,
    pub failure_count: usize,
}

/// One recorded team vote round: the proposed team and its tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamVote {
    pub team: NameSet,
    pub approved: bool,
    pub player_votes: PlayerVotes,
}

/// All vote rounds recorded against a single mission slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamVotes {
    pub votes: Vec<TeamVote>,
}

impl TeamVotes {
    /// Number of rounds recorded so far
    pub fn rounds(&self) -> usize {
        self.votes.len()
    }

    /// Rounds that ended with the team rejected
    pub fn rejections(&self) -> usize {
        self.votes.iter().filter(|v| !v.approved).count()
    }
}
