//! Store-backed values brokers
//!
//! Each broker borrows one [`StoreValues`] snapshot and answers a single
//! component's values trait. The app broker hands out the page brokers and
//! the game broker hands out one broker per game component.

use bombcanary_domain::{
    Allegiance, Dialog, GamePhase, MissionRequirement, MissionResult, MissionTimeline, NameSet,
    Page, TeamVotes,
};

use crate::presentation::services::{
    EndGameValues, GameValues, IdentityValues, LastMissionResultValues, MissionConductingValues,
    MissionDetailsValues, MissionTrackerValues, PageValues, PartyRoomValues, TeamSelectionValues,
    TeamVoteValues,
};
use crate::store::StoreValues;

macro_rules! broker {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            values: &'a StoreValues,
        }

        impl<'a> $name<'a> {
            pub fn new(values: &'a StoreValues) -> Self {
                Self { values }
            }
        }
    };
}

broker!(
    /// Root broker; decides the page
    AppValuesBroker
);
broker!(PartyRoomValuesBroker);
broker!(
    /// Game room broker; decides the phase and the open dialog
    GameValuesBroker
);
broker!(IdentityValuesBroker);
broker!(MissionTrackerValuesBroker);
broker!(TeamSelectionValuesBroker);
broker!(TeamVoteValuesBroker);
broker!(MissionConductingValuesBroker);
broker!(LastMissionResultValuesBroker);
broker!(EndGameValuesBroker);

/// Details of the mission slot picked in `mission_details_shown`
#[derive(Debug, Clone, Copy)]
pub struct MissionDetailsValuesBroker<'a> {
    values: &'a StoreValues,
    mission: usize,
}

impl<'a> MissionDetailsValuesBroker<'a> {
    pub fn new(values: &'a StoreValues) -> Self {
        Self {
            values,
            mission: values.mission_details_shown,
        }
    }

    fn result(&self) -> Option<&'a MissionResult> {
        self.values.mission_results.get(self.mission)
    }
}

impl<'a> AppValuesBroker<'a> {
    pub fn party_room(&self) -> PartyRoomValuesBroker<'a> {
        PartyRoomValuesBroker::new(self.values)
    }

    pub fn game(&self) -> GameValuesBroker<'a> {
        GameValuesBroker::new(self.values)
    }
}

impl PageValues for AppValuesBroker<'_> {
    fn page_to_show(&self) -> Page {
        self.values.page_to_show
    }
}

impl PartyRoomValues for PartyRoomValuesBroker<'_> {
    fn party_code(&self) -> &str {
        &self.values.party_code
    }

    fn players(&self) -> &[String] {
        &self.values.players
    }

    fn has_player_joined(&self) -> bool {
        self.values.players.contains(&self.values.player)
    }
}

impl<'a> GameValuesBroker<'a> {
    pub fn identity(&self) -> IdentityValuesBroker<'a> {
        IdentityValuesBroker::new(self.values)
    }

    pub fn mission_tracker(&self) -> MissionTrackerValuesBroker<'a> {
        MissionTrackerValuesBroker::new(self.values)
    }

    pub fn team_selection(&self) -> TeamSelectionValuesBroker<'a> {
        TeamSelectionValuesBroker::new(self.values)
    }

    pub fn team_vote(&self) -> TeamVoteValuesBroker<'a> {
        TeamVoteValuesBroker::new(self.values)
    }

    pub fn mission_conducting(&self) -> MissionConductingValuesBroker<'a> {
        MissionConductingValuesBroker::new(self.values)
    }

    pub fn mission_details(&self) -> MissionDetailsValuesBroker<'a> {
        MissionDetailsValuesBroker::new(self.values)
    }

    pub fn last_mission_result(&self) -> LastMissionResultValuesBroker<'a> {
        LastMissionResultValuesBroker::new(self.values)
    }

    pub fn end_game(&self) -> EndGameValuesBroker<'a> {
        EndGameValuesBroker::new(self.values)
    }
}

impl GameValues for GameValuesBroker<'_> {
    fn current_game_phase(&self) -> GamePhase {
        self.values.current_game_phase
    }

    fn dialog_shown(&self) -> Option<Dialog> {
        self.values.dialog_shown
    }
}

impl IdentityValues for IdentityValuesBroker<'_> {
    fn player(&self) -> &str {
        &self.values.player
    }

    fn revealed_spies(&self) -> &NameSet {
        &self.values.revealed_spies
    }
}

impl MissionTrackerValues for MissionTrackerValuesBroker<'_> {
    fn mission_requirements(&self) -> &[MissionRequirement] {
        &self.values.mission_requirements
    }

    fn mission_results(&self) -> &[MissionResult] {
        &self.values.mission_results
    }
}

impl TeamSelectionValues for TeamSelectionValuesBroker<'_> {
    fn current_team(&self) -> &NameSet {
        &self.values.current_team
    }

    fn player(&self) -> &str {
        &self.values.player
    }

    fn leader(&self) -> &str {
        &self.values.leader
    }

    fn current_team_vote_nb(&self) -> usize {
        self.values.current_team_vote_nb()
    }

    fn players(&self) -> &[String] {
        &self.values.players
    }

    fn people_required_on_mission(&self) -> Option<usize> {
        self.values
            .current_mission_requirement()
            .map(|r| r.people_on_mission)
    }
}

impl TeamVoteValues for TeamVoteValuesBroker<'_> {
    fn player(&self) -> &str {
        &self.values.player
    }

    fn players(&self) -> &[String] {
        &self.values.players
    }

    fn current_team(&self) -> &NameSet {
        &self.values.current_team
    }

    fn people_that_voted_on_team(&self) -> &NameSet {
        &self.values.people_that_voted_on_team
    }

    fn player_vote(&self) -> Option<bool> {
        self.values.player_vote
    }
}

impl MissionConductingValues for MissionConductingValuesBroker<'_> {
    fn player(&self) -> &str {
        &self.values.player
    }

    fn current_team(&self) -> &NameSet {
        &self.values.current_team
    }

    fn people_that_worked_on_mission(&self) -> &NameSet {
        &self.values.people_that_worked_on_mission
    }

    fn player_mission_success(&self) -> Option<bool> {
        self.values.player_mission_success
    }
}

impl MissionDetailsValues for MissionDetailsValuesBroker<'_> {
    fn mission(&self) -> usize {
        self.mission
    }

    fn mission_timeline(&self) -> MissionTimeline {
        MissionTimeline::of(self.mission, self.values.current_mission())
    }

    fn team_votes(&self) -> Option<&TeamVotes> {
        self.values.team_vote_results.get(self.mission)
    }

    fn mission_requirement(&self) -> Option<&MissionRequirement> {
        self.values.mission_requirements.get(self.mission)
    }

    fn mission_result(&self) -> Option<bool> {
        self.result().map(|r| r.success)
    }

    fn failure_count(&self) -> Option<usize> {
        self.result().map(|r| r.failure_count)
    }
}

impl LastMissionResultValues for LastMissionResultValuesBroker<'_> {
    fn success(&self) -> Option<bool> {
        self.values.mission_results.last().map(|r| r.success)
    }
}

impl EndGameValues for EndGameValuesBroker<'_> {
    fn player(&self) -> &str {
        &self.values.player
    }

    fn winner(&self) -> Option<Allegiance> {
        self.values.winner
    }

    fn spies(&self) -> &NameSet {
        &self.values.revealed_spies
    }
}
