//! Shared harness: the real bus and store, a counting stream opener, and a
//! stream handler fed with raw server frames.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use bombcanary_player::infrastructure::http::OutboundRequest;
use bombcanary_player::infrastructure::websocket::{StreamHandler, StreamSignal};
use bombcanary_player::ports::outbound::StreamOpener;
use bombcanary_player::{ClientCore, Dispatcher, Event, Message, StoreValues};
use tokio::sync::mpsc;

#[derive(Default)]
pub struct CountingOpener {
    opened: Cell<usize>,
}

impl CountingOpener {
    pub fn opened(&self) -> usize {
        self.opened.get()
    }
}

impl StreamOpener for CountingOpener {
    fn open(&self) {
        self.opened.set(self.opened.get() + 1);
    }
}

pub struct Harness {
    pub core: ClientCore,
    pub handler: StreamHandler,
    pub opener: Rc<CountingOpener>,
    pub requests: mpsc::UnboundedReceiver<OutboundRequest>,
    pub notifications: Rc<Cell<usize>>,
}

impl Harness {
    pub fn new() -> Self {
        let (tx, requests) = mpsc::unbounded_channel();
        let opener = Rc::new(CountingOpener::default());
        let core = ClientCore::wire(tx, opener.clone());
        let handler = StreamHandler::new(core.bus.clone());

        let notifications = Rc::new(Cell::new(0));
        let counter = notifications.clone();
        // Kept for the whole test; dropping the handle does not unsubscribe.
        let _subscription = core.store.subscribe(move |_| counter.set(counter.get() + 1));

        Self {
            core,
            handler,
            opener,
            requests,
            notifications,
        }
    }

    pub fn frame(&self, json: &str) {
        self.handler.handle(StreamSignal::Frame(json.to_string()));
    }

    pub fn frames(&self, frames: &[&str]) {
        for json in frames {
            self.frame(json);
        }
    }

    pub fn dispatch(&self, message: impl Into<Message>) {
        self.core.bus.dispatch(message.into());
    }

    pub fn joined(&self, code: &str) {
        self.dispatch(Event::JoinPartySucceeded {
            code: code.to_string(),
        });
    }

    pub fn values(&self) -> StoreValues {
        self.core.store.values()
    }

    pub fn sent(&mut self) -> Vec<OutboundRequest> {
        let mut sent = Vec::new();
        while let Ok(request) = self.requests.try_recv() {
            sent.push(request);
        }
        sent
    }
}

/// History of a five-player party up to the start of mission 2, seen by `p2`.
pub const REPLAYED_HISTORY: &[&str] = &[
    r#"{"EventsReplayStarted":{"Player":"p2"}}"#,
    r#"{"PlayerJoined":{"Name":"p1"}}"#,
    r#"{"PlayerJoined":{"Name":"p2"}}"#,
    r#"{"PlayerJoined":{"Name":"p3"}}"#,
    r#"{"PlayerJoined":{"Name":"p4"}}"#,
    r#"{"PlayerJoined":{"Name":"p5"}}"#,
    r#"{"GameStarted":{"MissionRequirements":[
        {"NbPeopleOnMission":2,"NbFailuresRequiredToFail":1},
        {"NbPeopleOnMission":3,"NbFailuresRequiredToFail":1},
        {"NbPeopleOnMission":2,"NbFailuresRequiredToFail":1},
        {"NbPeopleOnMission":3,"NbFailuresRequiredToFail":2},
        {"NbPeopleOnMission":3,"NbFailuresRequiredToFail":1}]}}"#,
    r#"{"SpiesRevealed":{"Spies":{"p2":{},"p4":{}}}}"#,
    r#"{"LeaderStartedToSelectMembers":{"Leader":"p1"}}"#,
    r#"{"LeaderSelectedMember":{"SelectedMember":"p3"}}"#,
    r#"{"LeaderSelectedMember":{"SelectedMember":"p5"}}"#,
    r#"{"LeaderConfirmedSelection":{}}"#,
    r#"{"PlayerVotedOnTeam":{"Player":"p1"}}"#,
    r#"{"PlayerVotedOnTeam":{"Player":"p2","Approved":false}}"#,
    r#"{"AllPlayerVotedOnTeam":{"Approved":false,"VoteFailures":1,
        "PlayerVotes":{"p1":true,"p2":false,"p3":true,"p4":false,"p5":false}}}"#,
    r#"{"LeaderStartedToSelectMembers":{"Leader":"p2"}}"#,
    r#"{"LeaderSelectedMember":{"SelectedMember":"p2"}}"#,
    r#"{"LeaderSelectedMember":{"SelectedMember":"p1"}}"#,
    r#"{"LeaderConfirmedSelection":{}}"#,
    r#"{"AllPlayerVotedOnTeam":{"Approved":true,"VoteFailures":0,
        "PlayerVotes":{"p1":true,"p2":true,"p3":true,"p4":true,"p5":false}}}"#,
    r#"{"MissionStarted":{}}"#,
    r#"{"PlayerWorkedOnMission":{"Player":"p1"}}"#,
    r#"{"PlayerWorkedOnMission":{"Player":"p2","Success":false}}"#,
    r#"{"MissionCompleted":{"Success":false,"NbFails":1}}"#,
    r#"{"LeaderStartedToSelectMembers":{"Leader":"p3"}}"#,
    r#"{"EventsReplayEnded":{}}"#,
];
