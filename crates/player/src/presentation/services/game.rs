//! Game screen services: phase and dialog predicates, identity, results

use bombcanary_domain::{Allegiance, Dialog, GamePhase, NameSet};

use crate::infrastructure::messaging::Dispatcher;
use crate::messages::Command;
use crate::presentation::join_names;

pub trait GameValues {
    fn current_game_phase(&self) -> GamePhase;
    fn dialog_shown(&self) -> Option<Dialog>;
}

pub struct GameService<'a> {
    values: &'a dyn GameValues,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> GameService<'a> {
    pub fn new(values: &'a dyn GameValues, dispatcher: &'a dyn Dispatcher) -> Self {
        Self { values, dispatcher }
    }

    fn is_phase(&self, phase: GamePhase) -> bool {
        self.values.current_game_phase() == phase
    }

    pub fn is_team_selection_phase(&self) -> bool {
        self.is_phase(GamePhase::TeamSelection)
    }

    pub fn is_team_vote_phase(&self) -> bool {
        self.is_phase(GamePhase::TeamVote)
    }

    pub fn is_mission_conducting_phase(&self) -> bool {
        self.is_phase(GamePhase::Mission)
    }

    pub fn is_game_ended(&self) -> bool {
        self.is_phase(GamePhase::GameEnded)
    }

    pub fn is_dialog_shown_identity(&self) -> bool {
        self.values.dialog_shown() == Some(Dialog::Identity)
    }

    pub fn is_dialog_shown_mission_details(&self) -> bool {
        self.values.dialog_shown() == Some(Dialog::MissionDetails)
    }

    pub fn is_dialog_shown_last_mission_result(&self) -> bool {
        self.values.dialog_shown() == Some(Dialog::LastMissionResult)
    }

    pub fn view_identity(&self) {
        self.dispatcher.dispatch(Command::ViewIdentity.into());
    }

    pub fn view_mission_details(&self, mission: usize) {
        self.dispatcher
            .dispatch(Command::ViewMissionDetails { mission }.into());
    }
}

pub struct DialogService<'a> {
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> DialogService<'a> {
    pub fn new(dispatcher: &'a dyn Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn close_dialog(&self) {
        self.dispatcher.dispatch(Command::CloseDialog.into());
    }
}

pub trait IdentityValues {
    fn player(&self) -> &str;
    fn revealed_spies(&self) -> &NameSet;
}

pub struct IdentityService<'a> {
    values: &'a dyn IdentityValues,
}

impl<'a> IdentityService<'a> {
    pub fn new(values: &'a dyn IdentityValues) -> Self {
        Self { values }
    }

    pub fn is_player_a_spy(&self) -> bool {
        self.values.revealed_spies().contains(self.values.player())
    }

    /// The player's fellow spies, comma separated
    pub fn other_spies(&self) -> String {
        let player = self.values.player();
        self.values
            .revealed_spies()
            .iter()
            .filter(|spy| spy.as_str() != player)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub trait LastMissionResultValues {
    /// `None` until a mission has completed
    fn success(&self) -> Option<bool>;
}

pub struct LastMissionResultService<'a> {
    values: &'a dyn LastMissionResultValues,
}

impl<'a> LastMissionResultService<'a> {
    pub fn new(values: &'a dyn LastMissionResultValues) -> Self {
        Self { values }
    }

    pub fn success(&self) -> bool {
        self.values.success().unwrap_or(false)
    }
}

pub trait EndGameValues {
    fn player(&self) -> &str;
    fn winner(&self) -> Option<Allegiance>;
    fn spies(&self) -> &NameSet;
}

pub struct EndGameService<'a> {
    values: &'a dyn EndGameValues,
}

impl<'a> EndGameService<'a> {
    pub fn new(values: &'a dyn EndGameValues) -> Self {
        Self { values }
    }

    pub fn spies_as_string(&self) -> String {
        join_names(self.values.spies())
    }

    pub fn spies_have_won(&self) -> bool {
        self.values.winner() == Some(Allegiance::Spies)
    }

    pub fn player_has_won(&self) -> bool {
        self.values.winner() == Some(self.player_allegiance())
    }

    fn player_allegiance(&self) -> Allegiance {
        if self.values.spies().contains(self.values.player()) {
            Allegiance::Spies
        } else {
            Allegiance::Resistance
        }
    }
}
