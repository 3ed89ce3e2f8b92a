//! Composition of the client core: one bus, one store, every consumer
//!
//! Subscription order matters. Replay runs first so that a replay bracket is
//! opened or closed before any store mutation for the same message, and Reset
//! runs before Page so a closed connection lands on the lobby.

use std::rc::Rc;

use crate::consumers::{
    GameConsumer, MessageLogConsumer, PageConsumer, PartyConsumer, PlayerActionsConsumer,
    PlayerConsumer, ReplayConsumer, ResetConsumer, StreamOpenerConsumer,
};
use crate::infrastructure::http::OutboundSender;
use crate::infrastructure::messaging::{Consumer, Dispatcher, MessageBus};
use crate::messages::Event;
use crate::ports::outbound::StreamOpener;
use crate::store::Store;

/// The wired bus and store. Cheap to clone.
#[derive(Clone)]
pub struct ClientCore {
    pub bus: Rc<MessageBus>,
    pub store: Rc<Store>,
}

impl ClientCore {
    /// Build the store and subscribe every consumer to a fresh bus.
    ///
    /// `requests` receives server-bound requests; `opener` is asked to open
    /// the event stream.
    pub fn wire(requests: OutboundSender, opener: Rc<dyn StreamOpener>) -> Self {
        let bus = Rc::new(MessageBus::new());
        let store = Rc::new(Store::new());

        let consumers: Vec<Rc<dyn Consumer>> = vec![
            Rc::new(ReplayConsumer::new(store.clone())),
            Rc::new(ResetConsumer::new(store.clone())),
            Rc::new(PlayerConsumer::new(store.clone())),
            Rc::new(GameConsumer::new(store.clone())),
            Rc::new(PageConsumer::new(store.clone())),
            Rc::new(PlayerActionsConsumer::new(requests.clone())),
            Rc::new(PartyConsumer::new(requests)),
            Rc::new(StreamOpenerConsumer::new(opener)),
            Rc::new(MessageLogConsumer::default()),
        ];
        for consumer in consumers {
            bus.subscribe(consumer);
        }
        tracing::debug!(consumers = bus.subscriber_count(), "Client core wired");

        Self { bus, store }
    }

    /// Tell the core the application is up.
    pub fn start(&self) {
        self.bus.dispatch(Event::AppLoaded.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bombcanary_domain::Page;
    use bombcanary_shared::PlayerAction;
    use tokio::sync::mpsc;

    use crate::infrastructure::http::OutboundRequest;
    use crate::messages::Command;
    use crate::ports::outbound::MockStreamOpener;

    #[test]
    fn start_opens_stream_and_stays_loading() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut opener = MockStreamOpener::new();
        opener.expect_open().times(1).return_const(());

        let core = ClientCore::wire(tx, Rc::new(opener));
        core.start();

        assert_eq!(core.bus.subscriber_count(), 9);
        assert_eq!(core.store.values().page_to_show, Page::Loading);
    }

    #[test]
    fn closed_connection_lands_on_lobby() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let core = ClientCore::wire(tx, Rc::new(MockStreamOpener::new()));

        core.bus.dispatch(Event::ServerConnectionClosed.into());

        assert_eq!(core.store.values().page_to_show, Page::Lobby);
    }

    #[test]
    fn commands_become_requests() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let core = ClientCore::wire(tx, Rc::new(MockStreamOpener::new()));

        core.bus.dispatch(Command::ApproveTeam.into());

        assert_eq!(
            rx.try_recv().ok(),
            Some(OutboundRequest::Action(PlayerAction::ApproveTeam))
        );
    }
}
