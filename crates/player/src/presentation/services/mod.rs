//! Component services, one per UI component

pub mod app;
pub mod game;
pub mod missions;
pub mod page;
pub mod phases;

pub use app::{AppService, LobbyService};
pub use game::{
    DialogService, EndGameService, EndGameValues, GameService, GameValues, IdentityService,
    IdentityValues, LastMissionResultService, LastMissionResultValues,
};
pub use missions::{
    MissionDetailsService, MissionDetailsValues, MissionTrackerService, MissionTrackerValues,
};
pub use page::{PageService, PageValues, PartyRoomService, PartyRoomValues, MIN_PLAYERS_TO_START};
pub use phases::{
    MissionConductingService, MissionConductingValues, TeamSelectionService, TeamSelectionValues,
    TeamVoteService, TeamVoteValues,
};
