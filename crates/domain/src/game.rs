//! Screen, phase, dialog and allegiance vocabulary

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level screen the client shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    /// Nothing known yet; held until the first replay completes
    #[default]
    Loading,
    /// No party session: create or join a party
    Lobby,
    /// Waiting for players before the game starts
    PartyRoom,
    /// Game in progress or ended
    Game,
}

/// Phase of the round currently being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    #[default]
    TeamSelection,
    TeamVote,
    Mission,
    /// Terminal
    GameEnded,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::TeamSelection => "team selection",
            GamePhase::TeamVote => "team vote",
            GamePhase::Mission => "mission",
            GamePhase::GameEnded => "game ended",
        };
        write!(f, "{}", s)
    }
}

/// Overlay shown on top of the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialog {
    Identity,
    MissionDetails,
    LastMissionResult,
}

/// Hidden role category of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allegiance {
    Resistance,
    Spies,
}

impl fmt::Display for Allegiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Allegiance::Resistance => "resistance",
            Allegiance::Spies => "spies",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Allegiance {
    type Err = DomainError;

    /// The server names the winning side `"spy"` or `"resistance"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spy" | "spies" => Ok(Allegiance::Spies),
            "resistance" => Ok(Allegiance::Resistance),
            _ => Err(DomainError::parse(format!("Unknown allegiance: {}", s))),
        }
    }
}

/// Where a mission slot sits relative to the mission being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionTimeline {
    Past,
    Current,
    Future,
}

impl MissionTimeline {
    pub fn of(mission: usize, current_mission: usize) -> Self {
        if mission < current_mission {
            MissionTimeline::Past
        } else if mission == current_mission {
            MissionTimeline::Current
        } else {
            MissionTimeline::Future
        }
    }
}
