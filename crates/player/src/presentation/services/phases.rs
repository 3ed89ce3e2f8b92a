//! Round phase services: team selection, team vote, mission conducting

use bombcanary_domain::NameSet;

use crate::infrastructure::messaging::Dispatcher;
use crate::messages::Command;
use crate::presentation::join_names;

pub trait TeamSelectionValues {
    fn current_team(&self) -> &NameSet;
    fn player(&self) -> &str;
    fn leader(&self) -> &str;
    fn current_team_vote_nb(&self) -> usize;
    fn players(&self) -> &[String];
    /// `None` before the game has started
    fn people_required_on_mission(&self) -> Option<usize>;
}

pub struct TeamSelectionService<'a> {
    values: &'a dyn TeamSelectionValues,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> TeamSelectionService<'a> {
    pub fn new(values: &'a dyn TeamSelectionValues, dispatcher: &'a dyn Dispatcher) -> Self {
        Self { values, dispatcher }
    }

    pub fn is_given_player_in_team(&self, player: &str) -> bool {
        self.values.current_team().contains(player)
    }

    pub fn is_player_the_leader(&self) -> bool {
        self.values.player() == self.values.leader()
    }

    pub fn leader(&self) -> &str {
        self.values.leader()
    }

    pub fn current_team_vote_nb(&self) -> usize {
        self.values.current_team_vote_nb()
    }

    pub fn players(&self) -> &[String] {
        self.values.players()
    }

    pub fn people_required_on_mission(&self) -> usize {
        self.values.people_required_on_mission().unwrap_or(0)
    }

    /// Members can always be dropped; others only while there is room.
    pub fn is_given_player_selectable_for_team(&self, player: &str) -> bool {
        self.is_given_player_in_team(player)
            || self.values.current_team().len() < self.people_required_on_mission()
    }

    pub fn can_confirm_team(&self) -> bool {
        self.values
            .people_required_on_mission()
            .is_some_and(|required| self.values.current_team().len() == required)
    }

    pub fn toggle_player_selection(&self, player: &str) {
        let member = player.to_string();
        let command = if self.is_given_player_in_team(player) {
            Command::LeaderDeselectsMember { member }
        } else {
            Command::LeaderSelectsMember { member }
        };
        self.dispatcher.dispatch(command.into());
    }

    pub fn confirm_team(&self) {
        self.dispatcher.dispatch(Command::LeaderConfirmsTeam.into());
    }
}

pub trait TeamVoteValues {
    fn player(&self) -> &str;
    fn players(&self) -> &[String];
    fn current_team(&self) -> &NameSet;
    fn people_that_voted_on_team(&self) -> &NameSet;
    fn player_vote(&self) -> Option<bool>;
}

pub struct TeamVoteService<'a> {
    values: &'a dyn TeamVoteValues,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> TeamVoteService<'a> {
    pub fn new(values: &'a dyn TeamVoteValues, dispatcher: &'a dyn Dispatcher) -> Self {
        Self { values, dispatcher }
    }

    pub fn current_team_as_string(&self) -> String {
        join_names(self.values.current_team())
    }

    pub fn has_given_player_voted(&self, player: &str) -> bool {
        self.values.people_that_voted_on_team().contains(player)
    }

    pub fn has_current_player_voted(&self) -> bool {
        self.has_given_player_voted(self.values.player())
    }

    pub fn player_vote(&self) -> Option<bool> {
        self.values.player_vote()
    }

    pub fn players(&self) -> &[String] {
        self.values.players()
    }

    pub fn approve_team(&self) {
        self.dispatcher.dispatch(Command::ApproveTeam.into());
    }

    pub fn reject_team(&self) {
        self.dispatcher.dispatch(Command::RejectTeam.into());
    }
}

pub trait MissionConductingValues {
    fn player(&self) -> &str;
    fn current_team(&self) -> &NameSet;
    fn people_that_worked_on_mission(&self) -> &NameSet;
    fn player_mission_success(&self) -> Option<bool>;
}

pub struct MissionConductingService<'a> {
    values: &'a dyn MissionConductingValues,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> MissionConductingService<'a> {
    pub fn new(values: &'a dyn MissionConductingValues, dispatcher: &'a dyn Dispatcher) -> Self {
        Self { values, dispatcher }
    }

    pub fn current_team(&self) -> Vec<String> {
        self.values.current_team().iter().cloned().collect()
    }

    pub fn current_team_as_string(&self) -> String {
        join_names(self.values.current_team())
    }

    pub fn has_given_player_worked_on_mission(&self, player: &str) -> bool {
        self.values.people_that_worked_on_mission().contains(player)
    }

    pub fn is_player_in_current_mission(&self) -> bool {
        self.values.current_team().contains(self.values.player())
    }

    pub fn has_player_worked_on_mission(&self) -> bool {
        self.has_given_player_worked_on_mission(self.values.player())
    }

    pub fn player_mission_success(&self) -> Option<bool> {
        self.values.player_mission_success()
    }

    pub fn succeed_mission(&self) {
        self.dispatcher.dispatch(Command::SucceedMission.into());
    }

    pub fn fail_mission(&self) {
        self.dispatcher.dispatch(Command::FailMission.into());
    }
}
