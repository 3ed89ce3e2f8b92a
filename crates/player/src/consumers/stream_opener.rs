//! Opens the server event stream once the client may receive events

use std::rc::Rc;

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Event, Message};
use crate::ports::outbound::StreamOpener;

pub struct StreamOpenerConsumer {
    opener: Rc<dyn StreamOpener>,
}

impl StreamOpenerConsumer {
    pub fn new(opener: Rc<dyn StreamOpener>) -> Self {
        Self { opener }
    }
}

impl Consumer for StreamOpenerConsumer {
    fn consume(&self, message: &Message) {
        if let Message::Event(
            Event::AppLoaded | Event::PartyCreated { .. } | Event::JoinPartySucceeded { .. },
        ) = message
        {
            self.opener.open();
        }
    }
}
