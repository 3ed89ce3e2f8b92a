//! A player reconnects mid-game: the party history is replayed, then the
//! game continues live until the server ends it and the connection drops.

mod common;

use bombcanary_domain::{Allegiance, Dialog, GamePhase, MissionResult, Page, TeamVotes};
use bombcanary_player::infrastructure::http::OutboundRequest;
use bombcanary_player::infrastructure::websocket::StreamSignal;
use bombcanary_player::presentation::services::{
    EndGameService, LastMissionResultService, MissionConductingService, MissionDetailsService,
    TeamSelectionService, TeamVoteService,
};
use bombcanary_player::presentation::{GameValuesBroker, MissionDetailsValuesBroker};
use bombcanary_player::Command;
use bombcanary_shared::PlayerAction;

use common::{Harness, REPLAYED_HISTORY};

#[test]
fn replayed_history_is_published_once() {
    let harness = Harness::new();
    harness.core.start();
    harness.joined("abc");
    assert_eq!(harness.opener.opened(), 2);
    assert_eq!(harness.values().page_to_show, Page::PartyRoom);

    let (history, last) = REPLAYED_HISTORY.split_at(REPLAYED_HISTORY.len() - 1);
    harness.frames(history);
    assert!(harness.core.store.is_replaying());
    assert!(harness.values().players.is_empty());
    assert_eq!(harness.notifications.get(), 2);

    harness.frames(last);
    assert!(!harness.core.store.is_replaying());
    assert_eq!(harness.notifications.get(), 3);

    let values = harness.values();
    assert_eq!(values.page_to_show, Page::Game);
    assert_eq!(values.party_code, "abc");
    assert_eq!(values.player, "p2");
    assert_eq!(values.players, vec!["p1", "p2", "p3", "p4", "p5"]);
    assert_eq!(values.dialog_shown, None);
    assert_eq!(values.current_game_phase, GamePhase::TeamSelection);
    assert_eq!(values.leader, "p3");
    assert!(values.current_team.is_empty());
    assert_eq!(values.player_vote, None);
    assert_eq!(values.current_mission(), 1);
    assert_eq!(values.current_team_vote_nb(), 1);
    assert_eq!(
        values.mission_results,
        vec![MissionResult {
            success: false,
            failure_count: 1
        }]
    );
    assert_eq!(
        values.revealed_spies.iter().collect::<Vec<_>>(),
        vec!["p2", "p4"]
    );
    assert_eq!(values.team_vote_results[0].rounds(), 2);
    assert_eq!(values.team_vote_results[0].rejections(), 1);
    assert_eq!(values.team_vote_results.get(1).map(TeamVotes::rounds), Some(0));
}

#[test]
fn first_mission_details_after_replay() {
    let harness = Harness::new();
    harness.joined("abc");
    harness.frames(REPLAYED_HISTORY);
    harness.dispatch(Command::ViewMissionDetails { mission: 0 });

    let values = harness.values();
    assert_eq!(values.dialog_shown, Some(Dialog::MissionDetails));

    let details = MissionDetailsValuesBroker::new(&values);
    let service = MissionDetailsService::new(&details);
    assert!(service.should_show_votes());
    assert!(service.should_show_mission_result());
    assert_eq!(service.team_from_vote_as_string(0), "p3 and p5");
    assert_eq!(service.team_from_vote_as_string(1), "p2 and p1");
    assert!(!service.has_mission_succeeded());
    assert_eq!(service.success_count(), 1);
    assert_eq!(service.failure_count(), 1);
}

#[test]
fn live_round_after_replay_then_disconnect() {
    let mut harness = Harness::new();
    harness.joined("abc");
    harness.frames(REPLAYED_HISTORY);

    harness.frames(&[
        r#"{"LeaderSelectedMember":{"SelectedMember":"p3"}}"#,
        r#"{"LeaderSelectedMember":{"SelectedMember":"p2"}}"#,
    ]);
    {
        let values = harness.values();
        let game = GameValuesBroker::new(&values);
        let team_selection = game.team_selection();
        let service = TeamSelectionService::new(&team_selection, harness.core.bus.as_ref());
        assert!(!service.is_player_the_leader());
        assert_eq!(service.people_required_on_mission(), 3);
        assert!(!service.can_confirm_team());
    }

    harness.frames(&[
        r#"{"LeaderSelectedMember":{"SelectedMember":"p4"}}"#,
        r#"{"LeaderConfirmedSelection":{}}"#,
    ]);
    assert_eq!(harness.values().current_game_phase, GamePhase::TeamVote);

    {
        let values = harness.values();
        let game = GameValuesBroker::new(&values);
        let team_vote = game.team_vote();
        let service = TeamVoteService::new(&team_vote, harness.core.bus.as_ref());
        assert_eq!(service.current_team_as_string(), "p3, p2 and p4");
        assert!(!service.has_current_player_voted());
        service.approve_team();
    }
    assert_eq!(
        harness.sent(),
        vec![OutboundRequest::Action(PlayerAction::ApproveTeam)]
    );

    harness.frames(&[
        r#"{"PlayerVotedOnTeam":{"Player":"p2","Approved":true}}"#,
        r#"{"AllPlayerVotedOnTeam":{"Approved":true,"VoteFailures":0,
            "PlayerVotes":{"p1":true,"p2":true,"p3":true,"p4":true,"p5":true}}}"#,
        r#"{"MissionStarted":{}}"#,
    ]);
    {
        let values = harness.values();
        assert_eq!(values.player_vote, Some(true));
        assert_eq!(values.current_team_vote_nb(), 2);
        let game = GameValuesBroker::new(&values);
        let conducting = game.mission_conducting();
        let service = MissionConductingService::new(&conducting, harness.core.bus.as_ref());
        assert!(service.is_player_in_current_mission());
        assert!(!service.has_player_worked_on_mission());
        service.fail_mission();
    }
    assert_eq!(
        harness.sent(),
        vec![OutboundRequest::Action(PlayerAction::FailMission)]
    );

    harness.frames(&[
        r#"{"PlayerWorkedOnMission":{"Player":"p2","Success":false}}"#,
        r#"{"PlayerWorkedOnMission":{"Player":"p3"}}"#,
        r#"{"PlayerWorkedOnMission":{"Player":"p4"}}"#,
        r#"{"MissionCompleted":{"Success":false,"NbFails":2}}"#,
    ]);
    {
        let values = harness.values();
        assert_eq!(values.player_mission_success, Some(false));
        assert_eq!(values.dialog_shown, Some(Dialog::LastMissionResult));
        let last = GameValuesBroker::new(&values).last_mission_result();
        assert!(!LastMissionResultService::new(&last).success());
    }

    harness.dispatch(Command::CloseDialog);
    assert_eq!(harness.values().dialog_shown, None);

    harness.frame(r#"{"GameEnded":{"Winner":"spy","Spies":["p2","p4"]}}"#);
    {
        let values = harness.values();
        assert_eq!(values.current_game_phase, GamePhase::GameEnded);
        assert_eq!(values.winner, Some(Allegiance::Spies));
        let end_game = GameValuesBroker::new(&values).end_game();
        let service = EndGameService::new(&end_game);
        assert!(service.spies_have_won());
        assert!(service.player_has_won());
        assert_eq!(service.spies_as_string(), "p2 and p4");
    }

    harness.handler.handle(StreamSignal::Closed);
    let values = harness.values();
    assert_eq!(values.page_to_show, Page::Lobby);
    assert!(values.players.is_empty());
    assert_eq!(values.winner, None);
    assert!(harness.sent().is_empty());
}
