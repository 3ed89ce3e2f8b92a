//! Replay consumer: brackets the server's history resend
//!
//! Any sign that the connection went away also ends the replay, so the store
//! is never left buffering.

use std::rc::Rc;

use crate::infrastructure::messaging::Consumer;
use crate::messages::{Event, Message};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ReplayStore {
    fn start_replay(&self);
    fn end_replay(&self);
}

pub struct ReplayConsumer {
    store: Rc<dyn ReplayStore>,
}

impl ReplayConsumer {
    pub fn new(store: Rc<dyn ReplayStore>) -> Self {
        Self { store }
    }
}

impl Consumer for ReplayConsumer {
    fn consume(&self, message: &Message) {
        match message {
            Message::Event(Event::EventsReplayStarted { .. }) => self.store.start_replay(),
            Message::Event(
                Event::EventsReplayEnded
                | Event::ServerConnectionClosed
                | Event::ServerConnectionErrorOccured,
            ) => self.store.end_replay(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumer_expecting_end(times: usize) -> ReplayConsumer {
        let mut store = MockReplayStore::new();
        store.expect_end_replay().times(times).return_const(());
        store.expect_start_replay().never();
        ReplayConsumer::new(Rc::new(store))
    }

    #[test]
    fn replay_started_starts_replay() {
        let mut store = MockReplayStore::new();
        store.expect_start_replay().times(1).return_const(());
        store.expect_end_replay().never();
        let consumer = ReplayConsumer::new(Rc::new(store));

        consumer.consume(
            &Event::EventsReplayStarted {
                player: "p1".to_string(),
            }
            .into(),
        );
    }

    #[test]
    fn replay_ended_ends_replay() {
        consumer_expecting_end(1).consume(&Event::EventsReplayEnded.into());
    }

    #[test]
    fn connection_closed_ends_replay() {
        consumer_expecting_end(1).consume(&Event::ServerConnectionClosed.into());
    }

    #[test]
    fn connection_error_ends_replay() {
        consumer_expecting_end(1).consume(&Event::ServerConnectionErrorOccured.into());
    }

    #[test]
    fn other_events_do_nothing() {
        consumer_expecting_end(0).consume(&Event::MissionStarted.into());
    }
}
