//! Player action endpoints (Player → Server)
//!
//! Every in-game action is a POST under `/actions`. Only member selection
//! carries a body; the rest are empty posts. The acting player is identified
//! by the session cookie.

use serde::{Deserialize, Serialize};

pub const ACTIONS_PREFIX: &str = "/actions";

/// Body for the member selection endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBody {
    pub member: String,
}

/// An in-game action and the endpoint it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    StartGame,
    LeaderSelectsMember { member: String },
    LeaderDeselectsMember { member: String },
    LeaderConfirmsTeam,
    ApproveTeam,
    RejectTeam,
    SucceedMission,
    FailMission,
}

impl PlayerAction {
    /// Absolute path of the endpoint, e.g. `/actions/start-game`
    pub fn path(&self) -> String {
        let name = match self {
            PlayerAction::StartGame => "start-game",
            PlayerAction::LeaderSelectsMember { .. } => "leader-selects-member",
            PlayerAction::LeaderDeselectsMember { .. } => "leader-deselects-member",
            PlayerAction::LeaderConfirmsTeam => "leader-confirms-team",
            PlayerAction::ApproveTeam => "approve-team",
            PlayerAction::RejectTeam => "reject-team",
            PlayerAction::SucceedMission => "succeed-mission",
            PlayerAction::FailMission => "fail-mission",
        };
        format!("{}/{}", ACTIONS_PREFIX, name)
    }

    /// Request body, if the endpoint takes one
    pub fn body(&self) -> Option<MemberBody> {
        match self {
            PlayerAction::LeaderSelectsMember { member }
            | PlayerAction::LeaderDeselectsMember { member } => Some(MemberBody {
                member: member.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_kebab_case_under_actions() {
        assert_eq!(PlayerAction::StartGame.path(), "/actions/start-game");
        assert_eq!(PlayerAction::FailMission.path(), "/actions/fail-mission");
        assert_eq!(
            PlayerAction::LeaderConfirmsTeam.path(),
            "/actions/leader-confirms-team"
        );
    }

    #[test]
    fn only_member_selection_has_a_body() {
        let select = PlayerAction::LeaderSelectsMember {
            member: "bob".to_string(),
        };
        assert_eq!(
            serde_json::to_value(select.body()).expect("serialize"),
            serde_json::json!({"member": "bob"})
        );
        assert_eq!(PlayerAction::ApproveTeam.body(), None);
    }
}
