//! Translates ServerEvent frames from the wire into bus Events
//!
//! This keeps the wire format (PascalCase bodies, name-keyed maps, winner as a
//! string) out of the consumers. Frames the client has no use for translate to
//! `None`: the party code, for instance, comes from the create-party response
//! rather than from the stream.

use bombcanary_domain::{Allegiance, MissionRequirement, NameSet};
use bombcanary_shared::{parse_server_event, MissionRequirementData, ServerEvent};

use crate::messages::Event;

/// Why a frame could not become an Event
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode and translate one text frame.
pub fn decode_frame(text: &str) -> Result<Option<Event>, TranslateError> {
    let server_event = parse_server_event(text)?;
    Ok(translate(server_event))
}

/// Translate a ServerEvent into an Event
pub fn translate(event: ServerEvent) -> Option<Event> {
    let translated = match event {
        ServerEvent::PartyCreated { .. } => return None,

        // =====================================================================
        // Connection / replay
        // =====================================================================
        ServerEvent::EventsReplayStarted { player } => Event::EventsReplayStarted { player },
        ServerEvent::EventsReplayEnded {} => Event::EventsReplayEnded,
        ServerEvent::PlayerConnected { name } => Event::PlayerConnected { name },
        ServerEvent::PlayerDisconnected { name } => Event::PlayerDisconnected { name },
        ServerEvent::PlayerJoined { name } => Event::PlayerJoined { name },

        // =====================================================================
        // Game
        // =====================================================================
        ServerEvent::GameStarted {
            mission_requirements,
        } => Event::GameStarted {
            requirements: mission_requirements
                .into_iter()
                .map(translate_requirement)
                .collect(),
        },
        ServerEvent::SpiesRevealed { spies } => Event::SpiesRevealed {
            spies: spies.into_keys().collect(),
        },
        ServerEvent::LeaderStartedToSelectMembers { leader } => {
            Event::LeaderStartedToSelectMembers { leader }
        }
        ServerEvent::LeaderSelectedMember { selected_member } => Event::LeaderSelectedMember {
            member: selected_member,
        },
        ServerEvent::LeaderDeselectedMember { deselected_member } => {
            Event::LeaderDeselectedMember {
                member: deselected_member,
            }
        }
        ServerEvent::LeaderConfirmedSelection {} => Event::LeaderConfirmedTeam,
        ServerEvent::PlayerVotedOnTeam { player, approved } => {
            Event::PlayerVotedOnTeam { player, approved }
        }
        ServerEvent::AllPlayerVotedOnTeam {
            approved,
            player_votes,
            ..
        } => Event::AllPlayerVotedOnTeam {
            approved,
            player_votes,
        },
        ServerEvent::MissionStarted {} => Event::MissionStarted,
        ServerEvent::PlayerWorkedOnMission { player, success } => {
            Event::PlayerWorkedOnMission { player, success }
        }
        ServerEvent::MissionCompleted { success, nb_fails } => Event::MissionCompleted {
            success,
            failure_count: nb_fails,
        },
        ServerEvent::GameEnded { winner, spies } => Event::GameEnded {
            winner: translate_winner(&winner),
            spies: spies.into_iter().collect::<NameSet>(),
        },
    };
    Some(translated)
}

/// Anything but the spies counts as a resistance win; the game still ends.
fn translate_winner(winner: &str) -> Allegiance {
    winner.parse::<Allegiance>().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Unrecognised winner, assuming resistance");
        Allegiance::Resistance
    })
}

fn translate_requirement(data: MissionRequirementData) -> MissionRequirement {
    MissionRequirement::new(data.nb_people_on_mission, data.nb_failures_required_to_fail)
}
