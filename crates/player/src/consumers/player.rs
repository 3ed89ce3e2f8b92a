//! Player consumer: who this client is and who joined the party

use std::rc::Rc;

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Event, Message};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlayerStore {
    fn define_player(&self, name: &str);
    fn join_player(&self, name: &str);
}

pub struct PlayerConsumer {
    store: Rc<dyn PlayerStore>,
}

impl PlayerConsumer {
    pub fn new(store: Rc<dyn PlayerStore>) -> Self {
        Self { store }
    }
}

impl Consumer for PlayerConsumer {
    fn consume(&self, message: &Message) {
        match message {
            Message::Event(Event::PlayerJoined { name }) => self.store.join_player(name),
            Message::Event(Event::EventsReplayStarted { player }) => {
                self.store.define_player(player)
            }
            _ => {}
        }
    }
}
