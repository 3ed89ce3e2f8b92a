//! Game consumer: folds the round-by-round game events into the store

use std::rc::Rc;

use bombcanary_domain::{Allegiance, MissionRequirement, NameSet, PlayerVotes};

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Event, Message};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GameStore {
    fn set_mission_requirements(&self, requirements: Vec<MissionRequirement>);
    fn start_team_selection(&self);
    fn assign_leader(&self, leader: &str);
    fn select_player(&self, name: &str);
    fn deselect_player(&self, name: &str);
    fn start_team_vote(&self);
    fn make_player_vote(&self, name: &str, approved: Option<bool>);
    fn save_team_vote_result(&self, approved: bool, player_votes: PlayerVotes);
    fn start_mission(&self);
    fn make_player_work_on_mission(&self, name: &str, success: Option<bool>);
    fn save_mission_result(&self, success: bool, failure_count: usize);
    fn show_last_mission_result(&self);
    fn remember_spies(&self, spies: NameSet);
    fn end_game(&self, winner: Allegiance);
}

pub struct GameConsumer {
    store: Rc<dyn GameStore>,
}

impl GameConsumer {
    pub fn new(store: Rc<dyn GameStore>) -> Self {
        Self { store }
    }
}

impl Consumer for GameConsumer {
    fn consume(&self, message: &Message) {
        let Message::Event(event) = message else {
            return;
        };
        match event {
            Event::GameStarted { requirements } => {
                self.store.set_mission_requirements(requirements.clone())
            }
            Event::LeaderStartedToSelectMembers { leader } => {
                self.store.start_team_selection();
                self.store.assign_leader(leader);
            }
            Event::LeaderSelectedMember { member } => self.store.select_player(member),
            Event::LeaderDeselectedMember { member } => self.store.deselect_player(member),
            Event::LeaderConfirmedTeam => self.store.start_team_vote(),
            Event::PlayerVotedOnTeam { player, approved } => {
                self.store.make_player_vote(player, *approved)
            }
            Event::AllPlayerVotedOnTeam {
                approved,
                player_votes,
            } => self
                .store
                .save_team_vote_result(*approved, player_votes.clone()),
            Event::MissionStarted => self.store.start_mission(),
            Event::PlayerWorkedOnMission { player, success } => {
                self.store.make_player_work_on_mission(player, *success)
            }
            Event::MissionCompleted {
                success,
                failure_count,
            } => {
                self.store.save_mission_result(*success, *failure_count);
                self.store.show_last_mission_result();
            }
            Event::SpiesRevealed { spies } => self.store.remember_spies(spies.clone()),
            Event::GameEnded { winner, spies } => {
                self.store.remember_spies(spies.clone());
                self.store.end_game(*winner);
            }
            _ => {}
        }
    }
}
