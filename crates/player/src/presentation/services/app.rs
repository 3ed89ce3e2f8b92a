//! App and lobby services

use crate::infrastructure::messaging::Dispatcher;
use crate::messages::{Command, Event};

pub struct AppService<'a> {
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> AppService<'a> {
    pub fn new(dispatcher: &'a dyn Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn app_mounted(&self) {
        self.dispatcher.dispatch(Event::AppLoaded.into());
    }
}

pub struct LobbyService<'a> {
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> LobbyService<'a> {
    pub fn new(dispatcher: &'a dyn Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn create_party(&self, name: &str) {
        self.dispatcher.dispatch(
            Command::CreateParty {
                name: name.to_string(),
            }
            .into(),
        );
    }

    pub fn join_party(&self, code: &str, name: &str) {
        self.dispatcher.dispatch(
            Command::JoinParty {
                code: code.to_string(),
                name: name.to_string(),
            }
            .into(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::messaging::MockDispatcher;
    use crate::messages::Message;

    fn expecting(expected: Message) -> MockDispatcher {
        let mut dispatcher = MockDispatcher::new();
        dispatcher
            .expect_dispatch()
            .withf(move |m| *m == expected)
            .times(1)
            .return_const(());
        dispatcher
    }

    #[test]
    fn app_mounted_dispatches_app_loaded() {
        let dispatcher = expecting(Event::AppLoaded.into());
        AppService::new(&dispatcher).app_mounted();
    }

    #[test]
    fn lobby_creates_party() {
        let dispatcher = expecting(
            Command::CreateParty {
                name: "alice".to_string(),
            }
            .into(),
        );
        LobbyService::new(&dispatcher).create_party("alice");
    }

    #[test]
    fn lobby_joins_party() {
        let dispatcher = expecting(
            Command::JoinParty {
                code: "abc".to_string(),
                name: "bob".to_string(),
            }
            .into(),
        );
        LobbyService::new(&dispatcher).join_party("abc", "bob");
    }
}
