//! Player actions consumer: in-game commands become `/actions/*` requests

use bombcanary_shared::PlayerAction;

use crate::infrastructure::http::{OutboundRequest, OutboundSender};
use crate::infrastructure::messaging::Consumer;
use crate::messages::{Command, Message};

pub struct PlayerActionsConsumer {
    requests: OutboundSender,
}

impl PlayerActionsConsumer {
    pub fn new(requests: OutboundSender) -> Self {
        Self { requests }
    }
}

fn to_action(command: &Command) -> Option<PlayerAction> {
    let action = match command {
        Command::StartGame => PlayerAction::StartGame,
        Command::LeaderSelectsMember { member } => PlayerAction::LeaderSelectsMember {
            member: member.clone(),
        },
        Command::LeaderDeselectsMember { member } => PlayerAction::LeaderDeselectsMember {
            member: member.clone(),
        },
        Command::LeaderConfirmsTeam => PlayerAction::LeaderConfirmsTeam,
        Command::ApproveTeam => PlayerAction::ApproveTeam,
        Command::RejectTeam => PlayerAction::RejectTeam,
        Command::SucceedMission => PlayerAction::SucceedMission,
        Command::FailMission => PlayerAction::FailMission,
        _ => return None,
    };
    Some(action)
}

impl Consumer for PlayerActionsConsumer {
    fn consume(&self, message: &Message) {
        let Message::Command(command) = message else {
            return;
        };
        let Some(action) = to_action(command) else {
            return;
        };
        if self.requests.send(OutboundRequest::Action(action)).is_err() {
            tracing::warn!(?command, "Outbound queue closed, dropping action");
        }
    }
}
