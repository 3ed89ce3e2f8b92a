//! Event stream frames (Server → Player)
//!
//! The server writes one JSON object per websocket text frame. The object has a
//! single key naming the event, and the body uses PascalCase field names:
//!
//! ```json
//! {"PlayerJoined": {"Name": "bob"}}
//! {"LeaderConfirmedSelection": {}}
//! {"PlayerVotedOnTeam": {"Player": "bob"}}
//! ```
//!
//! Optional fields are omitted by the server rather than sent as `null`, so
//! every optional field carries `#[serde(default)]`. Lists and maps the server
//! leaves unset arrive as `null` and decode as empty.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Team size and failure threshold as sent in `GameStarted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MissionRequirementData {
    pub nb_people_on_mission: usize,
    pub nb_failures_required_to_fail: usize,
}

/// Events streamed from the server to one player
///
/// During a replay the server first sends `EventsReplayStarted`, then the whole
/// history of the party, then `EventsReplayEnded`; live events follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all_fields = "PascalCase")]
pub enum ServerEvent {
    PartyCreated {
        code: String,
    },
    PlayerConnected {
        name: String,
    },
    PlayerDisconnected {
        name: String,
    },
    PlayerJoined {
        name: String,
    },
    GameStarted {
        #[serde(default, deserialize_with = "null_as_default")]
        mission_requirements: Vec<MissionRequirementData>,
    },
    /// Only spies receive the names; everyone else gets an empty body
    SpiesRevealed {
        #[serde(
            default,
            deserialize_with = "null_as_default",
            skip_serializing_if = "IndexMap::is_empty"
        )]
        spies: IndexMap<String, serde_json::Value>,
    },
    LeaderStartedToSelectMembers {
        leader: String,
    },
    LeaderSelectedMember {
        selected_member: String,
    },
    LeaderDeselectedMember {
        deselected_member: String,
    },
    LeaderConfirmedSelection {},
    /// `approved` is only present for the receiving player's own vote
    PlayerVotedOnTeam {
        player: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        approved: Option<bool>,
    },
    AllPlayerVotedOnTeam {
        approved: bool,
        #[serde(default)]
        vote_failures: u32,
        #[serde(default, deserialize_with = "null_as_default")]
        player_votes: IndexMap<String, bool>,
    },
    MissionStarted {},
    /// `success` is only present for the receiving player's own card
    PlayerWorkedOnMission {
        player: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        success: Option<bool>,
    },
    MissionCompleted {
        success: bool,
        nb_fails: usize,
    },
    GameEnded {
        winner: String,
        #[serde(default, deserialize_with = "null_as_default")]
        spies: Vec<String>,
    },
    EventsReplayStarted {
        player: String,
    },
    EventsReplayEnded {},
}

impl ServerEvent {
    /// Wire name of the event, as used for the frame's single key
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::PartyCreated { .. } => "PartyCreated",
            ServerEvent::PlayerConnected { .. } => "PlayerConnected",
            ServerEvent::PlayerDisconnected { .. } => "PlayerDisconnected",
            ServerEvent::PlayerJoined { .. } => "PlayerJoined",
            ServerEvent::GameStarted { .. } => "GameStarted",
            ServerEvent::SpiesRevealed { .. } => "SpiesRevealed",
            ServerEvent::LeaderStartedToSelectMembers { .. } => "LeaderStartedToSelectMembers",
            ServerEvent::LeaderSelectedMember { .. } => "LeaderSelectedMember",
            ServerEvent::LeaderDeselectedMember { .. } => "LeaderDeselectedMember",
            ServerEvent::LeaderConfirmedSelection {} => "LeaderConfirmedSelection",
            ServerEvent::PlayerVotedOnTeam { .. } => "PlayerVotedOnTeam",
            ServerEvent::AllPlayerVotedOnTeam { .. } => "AllPlayerVotedOnTeam",
            ServerEvent::MissionStarted {} => "MissionStarted",
            ServerEvent::PlayerWorkedOnMission { .. } => "PlayerWorkedOnMission",
            ServerEvent::MissionCompleted { .. } => "MissionCompleted",
            ServerEvent::GameEnded { .. } => "GameEnded",
            ServerEvent::EventsReplayStarted { .. } => "EventsReplayStarted",
            ServerEvent::EventsReplayEnded {} => "EventsReplayEnded",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode one text frame from the event stream.
pub fn parse_server_event(text: &str) -> Result<ServerEvent, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frame_with_pascal_case_body() {
        let event = parse_server_event(r#"{"LeaderSelectedMember":{"SelectedMember":"bob"}}"#)
            .expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::LeaderSelectedMember {
                selected_member: "bob".to_string()
            }
        );
    }

    #[test]
    fn parses_empty_bodies() {
        let event = parse_server_event(r#"{"LeaderConfirmedSelection":{}}"#).expect("valid frame");
        assert_eq!(event, ServerEvent::LeaderConfirmedSelection {});

        let event = parse_server_event(r#"{"EventsReplayEnded":{}}"#).expect("valid frame");
        assert_eq!(event, ServerEvent::EventsReplayEnded {});
    }

    #[test]
    fn omitted_optionals_default() {
        let event =
            parse_server_event(r#"{"PlayerVotedOnTeam":{"Player":"bob"}}"#).expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::PlayerVotedOnTeam {
                player: "bob".to_string(),
                approved: None
            }
        );

        let event = parse_server_event(r#"{"SpiesRevealed":{}}"#).expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::SpiesRevealed {
                spies: IndexMap::new()
            }
        );
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let event = parse_server_event(r#"{"GameEnded":{"Winner":"spy","Spies":null}}"#)
            .expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::GameEnded {
                winner: "spy".to_string(),
                spies: Vec::new()
            }
        );

        let event = parse_server_event(r#"{"SpiesRevealed":{"Spies":null}}"#).expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::SpiesRevealed {
                spies: IndexMap::new()
            }
        );

        let event = parse_server_event(
            r#"{"AllPlayerVotedOnTeam":{"Approved":true,"VoteFailures":0,"PlayerVotes":null}}"#,
        )
        .expect("valid frame");
        assert_eq!(
            event,
            ServerEvent::AllPlayerVotedOnTeam {
                approved: true,
                vote_failures: 0,
                player_votes: IndexMap::new()
            }
        );
    }

    #[test]
    fn parses_game_started_requirements() {
        let text = r#"{"GameStarted":{"MissionRequirements":[
            {"NbPeopleOnMission":2,"NbFailuresRequiredToFail":1},
            {"NbPeopleOnMission":3,"NbFailuresRequiredToFail":1}
        ]}}"#;
        let ServerEvent::GameStarted {
            mission_requirements,
        } = parse_server_event(text).expect("valid frame")
        else {
            panic!("expected GameStarted");
        };
        assert_eq!(mission_requirements.len(), 2);
        assert_eq!(mission_requirements[1].nb_people_on_mission, 3);
    }

    #[test]
    fn player_votes_keep_server_order() {
        let text = r#"{"AllPlayerVotedOnTeam":{"Approved":false,"VoteFailures":1,"PlayerVotes":{"c":false,"a":true,"b":false}}}"#;
        let ServerEvent::AllPlayerVotedOnTeam { player_votes, .. } =
            parse_server_event(text).expect("valid frame")
        else {
            panic!("expected AllPlayerVotedOnTeam");
        };
        let names: Vec<&str> = player_votes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_unknown_event() {
        assert!(parse_server_event(r#"{"SomethingNew":{}}"#).is_err());
    }

    #[test]
    fn name_matches_wire_key() {
        let event = ServerEvent::MissionCompleted {
            success: true,
            nb_fails: 0,
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert!(json.get(event.name()).is_some());
    }
}
