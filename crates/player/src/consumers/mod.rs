//! Consumers: bus subscribers that turn messages into store calls or requests
//!
//! Store-facing consumers declare the narrow slice of the store they need as a
//! trait; [`Store`](crate::store::Store) implements all of them. None of them
//! hold state of their own.

pub mod game;
pub mod message_log;
pub mod page;
pub mod party;
pub mod player;
pub mod player_actions;
pub mod replay;
pub mod reset;
pub mod stream_opener;

pub use game::{GameConsumer, GameStore};
pub use message_log::MessageLogConsumer;
pub use page::{PageConsumer, RoomStore};
pub use party::PartyConsumer;
pub use player::{PlayerConsumer, PlayerStore};
pub use player_actions::PlayerActionsConsumer;
pub use replay::{ReplayConsumer, ReplayStore};
pub use reset::{ResetConsumer, Resetter};
pub use stream_opener::StreamOpenerConsumer;

#[cfg(any(test, feature = "testing"))]
pub use game::MockGameStore;
#[cfg(any(test, feature = "testing"))]
pub use page::MockRoomStore;
#[cfg(any(test, feature = "testing"))]
pub use player::MockPlayerStore;
#[cfg(any(test, feature = "testing"))]
pub use replay::MockReplayStore;
#[cfg(any(test, feature = "testing"))]
pub use reset::MockResetter;
