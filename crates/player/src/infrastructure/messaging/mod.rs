//! In-process messaging
//!
//! - `MessageBus`: synchronous fan-out of [`Message`](crate::messages::Message)s
//!   to every subscribed [`Consumer`]
//! - `Dispatcher`: the sending half, as seen by services and stream handlers

pub mod message_bus;

pub use message_bus::{Consumer, Dispatcher, MessageBus};

#[cfg(any(test, feature = "testing"))]
pub use message_bus::MockDispatcher;
