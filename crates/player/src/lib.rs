//! # Bomb Canary Player
//!
//! Client core for the Bomb Canary party game: a single-threaded message bus,
//! the store that folds server events into a view model (with replay
//! buffering), the consumers that connect the two, and read-only value
//! brokers with the component services a front end drives.
//!
//! The infrastructure layer adapts the server: event stream frames become
//! [`messages::Event`]s and server-bound [`messages::Command`]s become HTTP
//! requests. The `bombcanary-player` binary wires it all to a terminal.

pub mod config;
pub mod consumers;
pub mod infrastructure;
pub mod messages;
pub mod ports;
pub mod presentation;
pub mod runner;
pub mod store;
pub mod terminal;
pub mod wiring;

pub use infrastructure::messaging::{Consumer, Dispatcher, MessageBus};
pub use messages::{Command, Event, Message};
pub use store::{Store, StoreValues, Subscription};
pub use wiring::ClientCore;
