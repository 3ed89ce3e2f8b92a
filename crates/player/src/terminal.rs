//! Line-oriented front end for the headless client
//!
//! Each stdin line parses to a [`TerminalCommand`]. Commands are checked
//! against the current snapshot through the component services, the same
//! way a screen would enable or disable its buttons, and then dispatched.

use std::str::FromStr;

use bombcanary_domain::{Dialog, GamePhase, Page};

use crate::infrastructure::messaging::Dispatcher;
use crate::presentation::services::{
    DialogService, EndGameService, GameService, IdentityService, LastMissionResultService,
    LobbyService, MissionConductingService, MissionDetailsService, MissionTrackerService,
    PageService, PartyRoomService, PartyRoomValues, TeamSelectionService, TeamSelectionValues,
    TeamVoteService, MIN_PLAYERS_TO_START,
};
use crate::presentation::{join_names, AppValuesBroker};
use crate::store::StoreValues;

pub const HELP: &str = "commands: create <name> | join <code> <name> | start | select <player> | \
confirm | approve | reject | succeed | fail | identity | mission <1-5> | close | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Create { name: String },
    Join { code: String, name: String },
    Start,
    Select { player: String },
    Confirm,
    Approve,
    Reject,
    Succeed,
    Fail,
    Identity,
    /// Zero-based mission slot; typed 1-based
    Mission { mission: usize },
    Close,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("mission must be a number from 1, got '{0}'")]
    InvalidMission(String),
}

impl FromStr for TerminalCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseError::Empty);
        };
        let mut arg = |command: &'static str, argument: &'static str| {
            words
                .next()
                .map(str::to_string)
                .ok_or(ParseError::MissingArgument { command, argument })
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "create" => TerminalCommand::Create {
                name: arg("create", "name")?,
            },
            "join" => TerminalCommand::Join {
                code: arg("join", "code")?,
                name: arg("join", "name")?,
            },
            "start" => TerminalCommand::Start,
            "select" => TerminalCommand::Select {
                player: arg("select", "player")?,
            },
            "confirm" => TerminalCommand::Confirm,
            "approve" => TerminalCommand::Approve,
            "reject" => TerminalCommand::Reject,
            "succeed" => TerminalCommand::Succeed,
            "fail" => TerminalCommand::Fail,
            "identity" => TerminalCommand::Identity,
            "mission" => {
                let raw = arg("mission", "number")?;
                let number = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or(ParseError::InvalidMission(raw))?;
                TerminalCommand::Mission {
                    mission: number - 1,
                }
            }
            "close" => TerminalCommand::Close,
            "help" | "?" => TerminalCommand::Help,
            "quit" | "exit" => TerminalCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// Why a well-formed command was not sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("not available on the {0:?} page")]
    WrongPage(Page),
    #[error("not available during {0}")]
    WrongPhase(GamePhase),
    #[error("at least 5 players are needed to start")]
    NotEnoughPlayers,
    #[error("only the leader ({0}) can do that")]
    NotLeader(String),
    #[error("{0} cannot be selected")]
    NotSelectable(String),
    #[error("the team needs {0} members")]
    TeamIncomplete(usize),
    #[error("you already voted")]
    AlreadyVoted,
    #[error("you are not on this mission")]
    NotOnMission,
    #[error("you already worked on this mission")]
    AlreadyWorked,
    #[error("there is no mission {0}")]
    NoSuchMission(usize),
    #[error("no dialog is open")]
    NoDialog,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

/// Check `command` against `values` and dispatch it.
pub fn execute(
    command: TerminalCommand,
    values: &StoreValues,
    dispatcher: &dyn Dispatcher,
) -> Result<Flow, Refusal> {
    let app = AppValuesBroker::new(values);
    let page = PageService::new(&app);
    let game = app.game();

    match command {
        TerminalCommand::Quit => return Ok(Flow::Quit),
        TerminalCommand::Help => return Ok(Flow::ShowHelp),
        TerminalCommand::Create { name } => {
            require_lobby(&page, values)?;
            LobbyService::new(dispatcher).create_party(&name);
        }
        TerminalCommand::Join { code, name } => {
            require_lobby(&page, values)?;
            LobbyService::new(dispatcher).join_party(&code, &name);
        }
        TerminalCommand::Start => {
            if !page.is_page_party_room() {
                return Err(Refusal::WrongPage(values.page_to_show));
            }
            let party_room = app.party_room();
            let service = PartyRoomService::new(&party_room, dispatcher);
            if !service.can_start_game() {
                return Err(Refusal::NotEnoughPlayers);
            }
            service.start_game();
        }
        TerminalCommand::Select { player } => {
            require_phase(values, GamePhase::TeamSelection)?;
            let team_selection = game.team_selection();
            let service = TeamSelectionService::new(&team_selection, dispatcher);
            if !service.is_player_the_leader() {
                return Err(Refusal::NotLeader(service.leader().to_string()));
            }
            if !service.players().contains(&player)
                || !service.is_given_player_selectable_for_team(&player)
            {
                return Err(Refusal::NotSelectable(player));
            }
            service.toggle_player_selection(&player);
        }
        TerminalCommand::Confirm => {
            require_phase(values, GamePhase::TeamSelection)?;
            let team_selection = game.team_selection();
            let service = TeamSelectionService::new(&team_selection, dispatcher);
            if !service.is_player_the_leader() {
                return Err(Refusal::NotLeader(service.leader().to_string()));
            }
            if !service.can_confirm_team() {
                return Err(Refusal::TeamIncomplete(service.people_required_on_mission()));
            }
            service.confirm_team();
        }
        TerminalCommand::Approve | TerminalCommand::Reject => {
            require_phase(values, GamePhase::TeamVote)?;
            let team_vote = game.team_vote();
            let service = TeamVoteService::new(&team_vote, dispatcher);
            if service.has_current_player_voted() {
                return Err(Refusal::AlreadyVoted);
            }
            if command == TerminalCommand::Approve {
                service.approve_team();
            } else {
                service.reject_team();
            }
        }
        TerminalCommand::Succeed | TerminalCommand::Fail => {
            require_phase(values, GamePhase::Mission)?;
            let conducting = game.mission_conducting();
            let service = MissionConductingService::new(&conducting, dispatcher);
            if !service.is_player_in_current_mission() {
                return Err(Refusal::NotOnMission);
            }
            if service.has_player_worked_on_mission() {
                return Err(Refusal::AlreadyWorked);
            }
            if command == TerminalCommand::Succeed {
                service.succeed_mission();
            } else {
                service.fail_mission();
            }
        }
        TerminalCommand::Identity => {
            require_game_page(values)?;
            GameService::new(&game, dispatcher).view_identity();
        }
        TerminalCommand::Mission { mission } => {
            require_game_page(values)?;
            let tracker = game.mission_tracker();
            if !MissionTrackerService::new(&tracker).missions().contains(&mission) {
                return Err(Refusal::NoSuchMission(mission + 1));
            }
            GameService::new(&game, dispatcher).view_mission_details(mission);
        }
        TerminalCommand::Close => {
            if values.dialog_shown.is_none() {
                return Err(Refusal::NoDialog);
            }
            DialogService::new(dispatcher).close_dialog();
        }
    }
    Ok(Flow::Continue)
}

/// A party is only created or joined from the lobby; the store holds one party.
fn require_lobby(page: &PageService<'_>, values: &StoreValues) -> Result<(), Refusal> {
    if page.is_page_lobby() {
        Ok(())
    } else {
        Err(Refusal::WrongPage(values.page_to_show))
    }
}

fn require_game_page(values: &StoreValues) -> Result<(), Refusal> {
    if values.page_to_show == Page::Game {
        Ok(())
    } else {
        Err(Refusal::WrongPage(values.page_to_show))
    }
}

fn require_phase(values: &StoreValues, phase: GamePhase) -> Result<(), Refusal> {
    require_game_page(values)?;
    if values.current_game_phase == phase {
        Ok(())
    } else {
        Err(Refusal::WrongPhase(values.current_game_phase))
    }
}

/// One-line summary of what a player would currently see.
pub fn summary(values: &StoreValues) -> String {
    let app = AppValuesBroker::new(values);
    let page = PageService::new(&app);

    if page.is_page_loading() {
        return "loading".to_string();
    }
    if page.is_page_lobby() {
        return "lobby: create <name> or join <code> <name>".to_string();
    }
    if page.is_page_party_room() {
        let party_room = app.party_room();
        let ready = if party_room.players().len() >= MIN_PLAYERS_TO_START {
            ", ready to start"
        } else {
            ""
        };
        return format!(
            "party {} [{}]{}",
            party_room.party_code(),
            party_room.players().join(", "),
            ready
        );
    }

    let game = app.game();
    let mut line = format!(
        "mission {} vote {} leader {}: {}",
        values.current_mission() + 1,
        values.current_team_vote_nb(),
        values.leader,
        phase_summary(values)
    );
    if let Some(dialog) = dialog_summary(values) {
        line.push_str(" | ");
        line.push_str(&dialog);
    }
    let tracker = game.mission_tracker();
    let tracker = MissionTrackerService::new(&tracker);
    let tags: Vec<String> = tracker
        .missions()
        .map(|m| {
            if tracker.should_mission_tag_show_success(m) {
                "ok".to_string()
            } else if tracker.should_mission_tag_show_failure(m) {
                "fail".to_string()
            } else {
                let people = tracker.people_on_mission(m).unwrap_or(0);
                let marker = if tracker.does_mission_need_more_than_one_fail(m) {
                    "*"
                } else {
                    ""
                };
                format!("{}{}", people, marker)
            }
        })
        .collect();
    if !tags.is_empty() {
        line.push_str(&format!(" | missions [{}]", tags.join(" ")));
    }
    line
}

fn phase_summary(values: &StoreValues) -> String {
    let game = AppValuesBroker::new(values).game();
    match values.current_game_phase {
        GamePhase::TeamSelection => {
            let required = game
                .team_selection()
                .people_required_on_mission()
                .unwrap_or(0);
            format!(
                "selecting team ({}/{}) [{}]",
                values.current_team.len(),
                required,
                join_names(&values.current_team)
            )
        }
        GamePhase::TeamVote => {
            let voted = values.people_that_voted_on_team.len();
            format!(
                "voting on {} ({}/{} voted)",
                join_names(&values.current_team),
                voted,
                values.players.len()
            )
        }
        GamePhase::Mission => format!(
            "mission with {} ({}/{} worked)",
            join_names(&values.current_team),
            values.people_that_worked_on_mission.len(),
            values.current_team.len()
        ),
        GamePhase::GameEnded => {
            let end_game = game.end_game();
            let service = EndGameService::new(&end_game);
            format!(
                "game over, {} won (spies: {}), you {}",
                if service.spies_have_won() {
                    "spies"
                } else {
                    "resistance"
                },
                service.spies_as_string(),
                if service.player_has_won() { "won" } else { "lost" }
            )
        }
    }
}

fn dialog_summary(values: &StoreValues) -> Option<String> {
    let game = AppValuesBroker::new(values).game();
    let text = match values.dialog_shown? {
        Dialog::Identity => {
            let identity = game.identity();
            let service = IdentityService::new(&identity);
            if service.is_player_a_spy() {
                format!("you are a spy with {}", service.other_spies())
            } else {
                "you are in the resistance".to_string()
            }
        }
        Dialog::MissionDetails => {
            let details = game.mission_details();
            let service = MissionDetailsService::new(&details);
            let mut text = format!(
                "mission {} needs {} people",
                service.mission() + 1,
                service.team_size()
            );
            if service.should_show_votes() {
                let rounds = service.team_votes().map_or(0, |t| t.rounds());
                let teams: Vec<String> = (0..rounds)
                    .map(|vote| service.team_from_vote_as_string(vote))
                    .collect();
                text.push_str(&format!(", teams proposed: [{}]", teams.join("; ")));
            }
            if service.should_show_mission_result() {
                text.push_str(&format!(
                    ", {} ({} success, {} fail)",
                    if service.has_mission_succeeded() {
                        "succeeded"
                    } else {
                        "failed"
                    },
                    service.success_count(),
                    service.failure_count()
                ));
            }
            text
        }
        Dialog::LastMissionResult => {
            let last = game.last_mission_result();
            if LastMissionResultService::new(&last).success() {
                "last mission succeeded".to_string()
            } else {
                "last mission failed".to_string()
            }
        }
    };
    Some(text)
}
