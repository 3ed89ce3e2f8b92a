//! Reset consumer: a closed connection discards all party and game state

use std::rc::Rc;

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Event, Message};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Resetter {
    fn reset(&self);
}

pub struct ResetConsumer {
    resetter: Rc<dyn Resetter>,
}

impl ResetConsumer {
    pub fn new(resetter: Rc<dyn Resetter>) -> Self {
        Self { resetter }
    }
}

impl Consumer for ResetConsumer {
    fn consume(&self, message: &Message) {
        if let Message::Event(Event::ServerConnectionClosed) = message {
            self.resetter.reset();
        }
    }
}
