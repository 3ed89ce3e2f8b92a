//! Events: facts the client learns

use bombcanary_domain::{Allegiance, MissionRequirement, NameSet, PlayerVotes};

/// Something that happened, either on the server or as the result of a
/// completed request
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The client finished mounting and may open the event stream
    AppLoaded,
    PartyCreated {
        code: String,
    },
    JoinPartySucceeded {
        code: String,
    },
    ServerConnectionClosed,
    ServerConnectionErrorOccured,
    /// The server is about to resend the party history to `player`
    EventsReplayStarted {
        player: String,
    },
    EventsReplayEnded,
    PlayerConnected {
        name: String,
    },
    PlayerDisconnected {
        name: String,
    },
    PlayerJoined {
        name: String,
    },
    GameStarted {
        requirements: Vec<MissionRequirement>,
    },
    /// Empty unless the receiving player is a spy
    SpiesRevealed {
        spies: NameSet,
    },
    LeaderStartedToSelectMembers {
        leader: String,
    },
    LeaderSelectedMember {
        member: String,
    },
    LeaderDeselectedMember {
        member: String,
    },
    LeaderConfirmedTeam,
    /// `approved` is only known for the receiving player's own vote
    PlayerVotedOnTeam {
        player: String,
        approved: Option<bool>,
    },
    AllPlayerVotedOnTeam {
        approved: bool,
        player_votes: PlayerVotes,
    },
    MissionStarted,
    /// `success` is only known for the receiving player's own card
    PlayerWorkedOnMission {
        player: String,
        success: Option<bool>,
    },
    MissionCompleted {
        success: bool,
        failure_count: usize,
    },
    GameEnded {
        winner: Allegiance,
        spies: NameSet,
    },
}
