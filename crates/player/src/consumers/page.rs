//! Page consumer: which screen and which dialog are up

use std::rc::Rc;

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Command, Event, Message};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RoomStore {
    fn show_lobby(&self);
    /// `None` keeps the party code already known
    fn show_party_room(&self, code: Option<String>);
    fn show_game_room(&self);
    fn show_identity(&self);
    fn show_mission_details(&self, mission: usize);
    fn close_dialog(&self);
}

pub struct PageConsumer {
    store: Rc<dyn RoomStore>,
}

impl PageConsumer {
    pub fn new(store: Rc<dyn RoomStore>) -> Self {
        Self { store }
    }
}

impl Consumer for PageConsumer {
    fn consume(&self, message: &Message) {
        match message {
            Message::Event(Event::ServerConnectionClosed) => self.store.show_lobby(),
            Message::Event(
                Event::PartyCreated { code } | Event::JoinPartySucceeded { code },
            ) => self.store.show_party_room(Some(code.clone())),
            Message::Event(Event::EventsReplayStarted { .. }) => {
                self.store.show_party_room(None)
            }
            // Entering the game always opens the identity reveal first.
            Message::Event(Event::SpiesRevealed { .. }) => {
                self.store.show_game_room();
                self.store.show_identity();
            }
            Message::Command(Command::ViewIdentity) => self.store.show_identity(),
            Message::Command(Command::ViewMissionDetails { mission }) => {
                self.store.show_mission_details(*mission)
            }
            Message::Command(Command::CloseDialog) => self.store.close_dialog(),
            _ => {}
        }
    }
}
