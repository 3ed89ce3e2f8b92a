use crate::infrastructure::messaging::Consumer;
use crate::messages::Message;

/// Logs every message crossing the bus at debug level.
#[derive(Default)]
pub struct MessageLogConsumer;

impl Consumer for MessageLogConsumer {
    fn consume(&self, message: &Message) {
        match message {
            Message::Event(event) => tracing::debug!(?event, "event"),
            Message::Command(command) => tracing::debug!(?command, "command"),
        }
    }
}
