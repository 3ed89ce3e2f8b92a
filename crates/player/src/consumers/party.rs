//! Party consumer: creating and joining a party

use bombcanary_shared::{CreatePartyRequest, JoinPartyRequest};

use crate::infrastructure::http::{OutboundRequest, OutboundSender};
use crate::infrastructure::messaging::Consumer;
use crate::messages::{Command, Message};

pub struct PartyConsumer {
    requests: OutboundSender,
}

impl PartyConsumer {
    pub fn new(requests: OutboundSender) -> Self {
        Self { requests }
    }
}

impl Consumer for PartyConsumer {
    fn consume(&self, message: &Message) {
        let request = match message {
            Message::Command(Command::CreateParty { name }) => {
                OutboundRequest::CreateParty(CreatePartyRequest { name: name.clone() })
            }
            Message::Command(Command::JoinParty { code, name }) => {
                OutboundRequest::JoinParty(JoinPartyRequest {
                    code: code.clone(),
                    name: name.clone(),
                })
            }
            _ => return,
        };
        if self.requests.send(request).is_err() {
            tracing::warn!("Outbound queue closed, dropping party request");
        }
    }
}
