//! Messages exchanged over the in-process bus
//!
//! Two families share the bus:
//! - [`Event`]: facts, decoded from the server stream or produced when an
//!   outbound request succeeds
//! - [`Command`]: user intents dispatched by component services
//!
//! Equality is structural so tests can compare whole messages.

pub mod commands;
pub mod events;

pub use commands::Command;
pub use events::Event;

/// Anything that can travel over the [`MessageBus`](crate::infrastructure::messaging::MessageBus)
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Event(Event),
    Command(Command),
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Event(event)
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Message::Command(command)
    }
}
