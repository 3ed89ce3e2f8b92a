//! Server event stream over websocket
//!
//! - `client`: tokio-tungstenite connection, forwards signals tagged by connection
//! - `handler`: decodes signals into bus events

mod client;
mod handler;

pub use client::{ChannelStreamOpener, EventStreamClient, SignalSender, StreamError, StreamReport};
pub use handler::{StreamHandler, StreamSignal};
