//! Commands: user intents

/// Something the user asked for. Server-bound commands are turned into HTTP
/// requests; the rest only touch local presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParty { name: String },
    JoinParty { code: String, name: String },
    StartGame,
    LeaderSelectsMember { member: String },
    LeaderDeselectsMember { member: String },
    LeaderConfirmsTeam,
    ApproveTeam,
    RejectTeam,
    SucceedMission,
    FailMission,
    ViewIdentity,
    ViewMissionDetails { mission: usize },
    CloseDialog,
}
