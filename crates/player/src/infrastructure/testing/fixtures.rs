//! Simple test fixtures used across unit tests.

use bombcanary_domain::{MissionRequirement, NameSet, PlayerVotes};

use crate::ports::outbound::ApiError;
use crate::store::StoreValues;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn names(list: &[&str]) -> NameSet {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn votes(list: &[(&str, bool)]) -> PlayerVotes {
    list.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

/// Five-player requirements: 2, 3, 2, 3, 3 people; the fourth needs two fails.
pub fn five_player_requirements() -> Vec<MissionRequirement> {
    vec![
        MissionRequirement::new(2, 1),
        MissionRequirement::new(3, 1),
        MissionRequirement::new(2, 1),
        MissionRequirement::new(3, 2),
        MissionRequirement::new(3, 1),
    ]
}

/// A started five-player game seen by `player`, leader `p1`, nothing played yet.
pub fn game_started_as(player: &str) -> StoreValues {
    let mut values = StoreValues::default();
    values.define_player(player);
    for p in ["p1", "p2", "p3", "p4", "p5"] {
        values.join_player(p);
    }
    values.show_party_room(Some("code".to_string()));
    values.set_mission_requirements(five_player_requirements());
    values.show_game_room();
    values.start_team_selection();
    values.assign_leader("p1");
    values.recompute();
    values
}
