//! Bomb Canary wire formats
//!
//! Types exchanged with the game server:
//! - `ServerEvent`: JSON frames streamed over the `/events` websocket
//! - `PlayerAction`: the `/actions/*` endpoints and their bodies
//! - party REST bodies (`/party/create`, `/party/join`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and indexmap
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Field names follow the server** - PascalCase on the stream, camelCase on REST

pub mod actions;
pub mod messages;
pub mod party;

pub use actions::{MemberBody, PlayerAction, ACTIONS_PREFIX};
pub use messages::{parse_server_event, MissionRequirementData, ServerEvent};
pub use party::{
    CreatePartyRequest, CreatePartyResponse, JoinPartyRequest, CREATE_PARTY_PATH, JOIN_PARTY_PATH,
};
