//! HTTP side of the client: the reqwest adapter and the outbound request queue

pub mod client;
pub mod requests;

pub use client::HttpClient;
pub use requests::{execute, run_outbound, OutboundReceiver, OutboundRequest, OutboundSender};
