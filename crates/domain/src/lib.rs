//! # Bomb Canary Domain
//!
//! Vocabulary shared by the client core and its adapters: which screen is up,
//! which phase the game is in, mission requirements and results, team vote
//! rounds. Pure data, no I/O.

pub mod error;
pub mod game;
pub mod mission;

pub use error::DomainError;
pub use game::{Allegiance, Dialog, GamePhase, MissionTimeline, Page};
pub use mission::{MissionRequirement, MissionResult, PlayerVotes, TeamVote, TeamVotes};

/// Insertion-ordered set of player names.
pub type NameSet = indexmap::IndexSet<String>;
