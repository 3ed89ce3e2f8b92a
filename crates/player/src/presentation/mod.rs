//! Presentation: read-only projections of the store and the services a UI
//! drives them through
//!
//! Brokers wrap a [`StoreValues`](crate::store::StoreValues) snapshot and
//! expose one narrow values trait per component. Services hold a values slice
//! and, where the component can act, a [`Dispatcher`](crate::infrastructure::messaging::Dispatcher).
//! Neither caches anything.

pub mod brokers;
pub mod services;

pub use brokers::{
    AppValuesBroker, EndGameValuesBroker, GameValuesBroker, IdentityValuesBroker,
    LastMissionResultValuesBroker, MissionConductingValuesBroker, MissionDetailsValuesBroker,
    MissionTrackerValuesBroker, PartyRoomValuesBroker, TeamSelectionValuesBroker,
    TeamVoteValuesBroker,
};

/// Join names for display: `"a, b and c"`, a lone name as is, nothing as `""`.
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    let names: Vec<&str> = names.into_iter().map(String::as_str).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
