//! Stream handler: turns what the websocket reports into bus events

use std::rc::Rc;

use crate::infrastructure::message_translator::decode_frame;
use crate::infrastructure::messaging::Dispatcher;
use crate::messages::Event;

/// What the stream task reports back to the single-threaded side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSignal {
    Frame(String),
    Error(String),
    Closed,
}

pub struct StreamHandler {
    dispatcher: Rc<dyn Dispatcher>,
}

impl StreamHandler {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn handle(&self, signal: StreamSignal) {
        match signal {
            StreamSignal::Frame(text) => self.on_event(&text),
            StreamSignal::Error(reason) => {
                tracing::warn!(reason = %reason, "Event stream errored");
                self.on_error();
            }
            StreamSignal::Closed => {
                tracing::info!("Event stream closed");
                self.on_close();
            }
        }
    }

    /// Malformed frames are logged and dropped.
    pub fn on_event(&self, text: &str) {
        match decode_frame(text) {
            Ok(Some(event)) => self.dispatcher.dispatch(event.into()),
            Ok(None) => tracing::trace!(frame = %text, "Ignoring frame"),
            Err(e) => tracing::warn!(error = %e, frame = %text, "Dropping server frame"),
        }
    }

    pub fn on_close(&self) {
        self.dispatcher.dispatch(Event::ServerConnectionClosed.into());
    }

    pub fn on_error(&self) {
        self.dispatcher.dispatch(Event::ServerConnectionErrorOccured.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::messaging::MockDispatcher;
    use crate::messages::Message;

    fn handler_expecting(expected: Message) -> StreamHandler {
        let mut dispatcher = MockDispatcher::new();
        dispatcher
            .expect_dispatch()
            .withf(move |m| *m == expected)
            .times(1)
            .return_const(());
        StreamHandler::new(Rc::new(dispatcher))
    }

    #[test]
    fn frame_is_translated_and_dispatched() {
        let handler = handler_expecting(
            Event::PlayerJoined {
                name: "bob".to_string(),
            }
            .into(),
        );
        handler.handle(StreamSignal::Frame(
            r#"{"PlayerJoined":{"Name":"bob"}}"#.to_string(),
        ));
    }

    #[test]
    fn close_dispatches_connection_closed() {
        handler_expecting(Event::ServerConnectionClosed.into()).handle(StreamSignal::Closed);
    }

    #[test]
    fn error_dispatches_connection_error() {
        handler_expecting(Event::ServerConnectionErrorOccured.into())
            .handle(StreamSignal::Error("reset by peer".to_string()));
    }

    #[test]
    fn malformed_and_ignored_frames_dispatch_nothing() {
        let mut dispatcher = MockDispatcher::new();
        dispatcher.expect_dispatch().never();
        let handler = StreamHandler::new(Rc::new(dispatcher));

        handler.on_event("{");
        handler.on_event(r#"{"GameEnded":{"Winner":"spy","Spies":7}}"#);
        handler.on_event(r#"{"PartyCreated":{"Code":"abc"}}"#);
    }
}
