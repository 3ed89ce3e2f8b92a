//! Page and party room services

use bombcanary_domain::Page;

use crate::infrastructure::messaging::Dispatcher;
use crate::messages::Command;

/// Smallest party the server lets start a game
pub const MIN_PLAYERS_TO_START: usize = 5;

pub trait PageValues {
    fn page_to_show(&self) -> Page;
}

pub struct PageService<'a> {
    values: &'a dyn PageValues,
}

impl<'a> PageService<'a> {
    pub fn new(values: &'a dyn PageValues) -> Self {
        Self { values }
    }

    fn is_page(&self, page: Page) -> bool {
        self.values.page_to_show() == page
    }

    pub fn is_page_loading(&self) -> bool {
        self.is_page(Page::Loading)
    }

    pub fn is_page_lobby(&self) -> bool {
        self.is_page(Page::Lobby)
    }

    pub fn is_page_party_room(&self) -> bool {
        self.is_page(Page::PartyRoom)
    }

    pub fn is_page_game(&self) -> bool {
        self.is_page(Page::Game)
    }
}

pub trait PartyRoomValues {
    fn party_code(&self) -> &str;
    fn players(&self) -> &[String];
    fn has_player_joined(&self) -> bool;
}

pub struct PartyRoomService<'a> {
    values: &'a dyn PartyRoomValues,
    dispatcher: &'a dyn Dispatcher,
}

impl<'a> PartyRoomService<'a> {
    pub fn new(values: &'a dyn PartyRoomValues, dispatcher: &'a dyn Dispatcher) -> Self {
        Self { values, dispatcher }
    }

    pub fn party_code(&self) -> &str {
        self.values.party_code()
    }

    pub fn players(&self) -> &[String] {
        self.values.players()
    }

    pub fn has_player_joined(&self) -> bool {
        self.values.has_player_joined()
    }

    pub fn can_start_game(&self) -> bool {
        self.values.players().len() >= MIN_PLAYERS_TO_START
    }

    pub fn start_game(&self) {
        self.dispatcher.dispatch(Command::StartGame.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::messaging::MockDispatcher;
    use crate::messages::Message;

    impl PageValues for Page {
        fn page_to_show(&self) -> Page {
            *self
        }
    }

    struct Room {
        players: Vec<String>,
    }

    impl PartyRoomValues for Room {
        fn party_code(&self) -> &str {
            "code"
        }
        fn players(&self) -> &[String] {
            &self.players
        }
        fn has_player_joined(&self) -> bool {
            true
        }
    }

    fn room(count: usize) -> Room {
        Room {
            players: (0..count).map(|i| format!("p{}", i)).collect(),
        }
    }

    #[test]
    fn page_predicates() {
        for page in [Page::Loading, Page::Lobby, Page::PartyRoom, Page::Game] {
            let service = PageService::new(&page);
            assert_eq!(service.is_page_loading(), page == Page::Loading);
            assert_eq!(service.is_page_lobby(), page == Page::Lobby);
            assert_eq!(service.is_page_party_room(), page == Page::PartyRoom);
            assert_eq!(service.is_page_game(), page == Page::Game);
        }
    }

    #[test]
    fn game_can_start_from_five_players() {
        let dispatcher = MockDispatcher::new();
        let four = room(4);
        let five = room(5);
        let six = room(6);

        assert!(!PartyRoomService::new(&four, &dispatcher).can_start_game());
        assert!(PartyRoomService::new(&five, &dispatcher).can_start_game());
        assert!(PartyRoomService::new(&six, &dispatcher).can_start_game());
    }

    #[test]
    fn start_game_dispatches_command() {
        let mut dispatcher = MockDispatcher::new();
        dispatcher
            .expect_dispatch()
            .withf(|m| *m == Message::Command(Command::StartGame))
            .times(1)
            .return_const(());
        let values = room(5);

        PartyRoomService::new(&values, &dispatcher).start_game();
    }
}
