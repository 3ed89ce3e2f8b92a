//! The view model folded from domain events
//!
//! Every fact the client learns lands here through one of the mutators below.
//! `current_mission` and `current_team_vote_nb` are derived and only change
//! through [`StoreValues::recompute`].

use bombcanary_domain::{
    Allegiance, Dialog, GamePhase, MissionRequirement, MissionResult, NameSet, Page, PlayerVotes,
    TeamVote, TeamVotes,
};
use serde::Serialize;

/// Full client view model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreValues {
    pub page_to_show: Page,
    pub party_code: String,
    pub player: String,
    pub leader: String,
    pub players: Vec<String>,
    pub mission_requirements: Vec<MissionRequirement>,
    pub current_game_phase: GamePhase,
    pub current_team: NameSet,
    pub people_that_voted_on_team: NameSet,
    pub player_vote: Option<bool>,
    pub team_vote_results: Vec<TeamVotes>,
    pub people_that_worked_on_mission: NameSet,
    pub player_mission_success: Option<bool>,
    pub mission_results: Vec<MissionResult>,
    pub dialog_shown: Option<Dialog>,
    pub mission_details_shown: usize,
    pub revealed_spies: NameSet,
    pub winner: Option<Allegiance>,

    current_mission: usize,
    current_team_vote_nb: usize,
}

impl Default for StoreValues {
    fn default() -> Self {
        let mut values = Self {
            page_to_show: Page::Loading,
            party_code: String::new(),
            player: String::new(),
            leader: String::new(),
            players: Vec::new(),
            mission_requirements: Vec::new(),
            current_game_phase: GamePhase::TeamSelection,
            current_team: NameSet::new(),
            people_that_voted_on_team: NameSet::new(),
            player_vote: None,
            team_vote_results: Vec::new(),
            people_that_worked_on_mission: NameSet::new(),
            player_mission_success: None,
            mission_results: Vec::new(),
            dialog_shown: None,
            mission_details_shown: 0,
            revealed_spies: NameSet::new(),
            winner: None,
            current_mission: 0,
            current_team_vote_nb: 0,
        };
        values.recompute();
        values
    }
}

impl StoreValues {
    /// Zero-based index of the mission being played; equals the number of
    /// completed missions
    pub fn current_mission(&self) -> usize {
        self.current_mission
    }

    /// 1-based ordinal of the team vote round for the current mission
    pub fn current_team_vote_nb(&self) -> usize {
        self.current_team_vote_nb
    }

    /// Vote rounds recorded for the current mission slot
    pub fn current_team_votes(&self) -> Option<&TeamVotes> {
        self.team_vote_results.get(self.current_mission)
    }

    /// Requirement of the current mission slot, once the game has started
    pub fn current_mission_requirement(&self) -> Option<&MissionRequirement> {
        self.mission_requirements.get(self.current_mission)
    }

    /// Recompute every derived field from the primitive ones.
    pub(crate) fn recompute(&mut self) {
        self.current_mission = self.mission_results.len();
        self.current_team_vote_nb = self
            .team_vote_results
            .get(self.current_mission)
            .map_or(0, TeamVotes::rounds)
            + 1;
    }

    pub(crate) fn define_player(&mut self, name: &str) {
        self.player = name.to_string();
    }

    pub(crate) fn join_player(&mut self, name: &str) {
        if !self.players.iter().any(|p| p == name) {
            self.players.push(name.to_string());
        }
    }

    pub(crate) fn set_mission_requirements(&mut self, requirements: Vec<MissionRequirement>) {
        self.team_vote_results
            .resize_with(requirements.len(), TeamVotes::default);
        self.mission_requirements = requirements;
    }

    /// Phase transition that also clears every per-round tracking field.
    pub(crate) fn start_team_selection(&mut self) {
        self.current_game_phase = GamePhase::TeamSelection;
        self.current_team.clear();
        self.people_that_voted_on_team.clear();
        self.player_vote = None;
        self.people_that_worked_on_mission.clear();
        self.player_mission_success = None;
    }

    pub(crate) fn assign_leader(&mut self, leader: &str) {
        self.leader = leader.to_string();
    }

    pub(crate) fn select_player(&mut self, name: &str) {
        self.current_team.insert(name.to_string());
    }

    pub(crate) fn deselect_player(&mut self, name: &str) {
        self.current_team.shift_remove(name);
    }

    pub(crate) fn start_team_vote(&mut self) {
        self.current_game_phase = GamePhase::TeamVote;
    }

    pub(crate) fn make_player_vote(&mut self, name: &str, approved: Option<bool>) {
        self.people_that_voted_on_team.insert(name.to_string());
        if name == self.player {
            self.player_vote = approved;
        }
    }

    pub(crate) fn save_team_vote_result(&mut self, approved: bool, player_votes: PlayerVotes) {
        let slot = self.current_mission;
        if self.team_vote_results.len() <= slot {
            self.team_vote_results
                .resize_with(slot + 1, TeamVotes::default);
        }
        let round = TeamVote {
            team: self.current_team.clone(),
            approved,
            player_votes,
        };
        self.team_vote_results[slot].votes.push(round);
    }

    pub(crate) fn start_mission(&mut self) {
        self.current_game_phase = GamePhase::Mission;
    }

    pub(crate) fn make_player_work_on_mission(&mut self, name: &str, success: Option<bool>) {
        self.people_that_worked_on_mission.insert(name.to_string());
        if name == self.player {
            self.player_mission_success = success;
        }
    }

    pub(crate) fn save_mission_result(&mut self, success: bool, failure_count: usize) {
        self.mission_results.push(MissionResult {
            success,
            failure_count,
        });
    }

    pub(crate) fn show_lobby(&mut self) {
        self.page_to_show = Page::Lobby;
    }

    pub(crate) fn show_party_room(&mut self, code: Option<String>) {
        self.page_to_show = Page::PartyRoom;
        if let Some(code) = code {
            self.party_code = code;
        }
    }

    pub(crate) fn show_game_room(&mut self) {
        self.page_to_show = Page::Game;
    }

    pub(crate) fn show_identity(&mut self) {
        self.dialog_shown = Some(Dialog::Identity);
    }

    pub(crate) fn show_mission_details(&mut self, mission: usize) {
        self.dialog_shown = Some(Dialog::MissionDetails);
        self.mission_details_shown = mission;
    }

    pub(crate) fn show_last_mission_result(&mut self) {
        self.dialog_shown = Some(Dialog::LastMissionResult);
    }

    pub(crate) fn close_dialog(&mut self) {
        self.dialog_shown = None;
    }

    pub(crate) fn remember_spies(&mut self, spies: NameSet) {
        self.revealed_spies = spies;
    }

    pub(crate) fn end_game(&mut self, winner: Allegiance) {
        self.current_game_phase = GamePhase::GameEnded;
        self.winner = Some(winner);
    }
}
