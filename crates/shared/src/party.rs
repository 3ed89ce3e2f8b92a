//! Party REST bodies
//!
//! Creating or joining a party sets the `session` cookie that later
//! authenticates the event stream and the action endpoints.

use serde::{Deserialize, Serialize};

pub const CREATE_PARTY_PATH: &str = "/party/create";
pub const JOIN_PARTY_PATH: &str = "/party/join";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePartyRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePartyResponse {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPartyRequest {
    pub code: String,
    pub name: String,
}
