//! Store - state reconstruction engine
//!
//! The Store owns the [`StoreValues`] view model. Consumers mutate it through
//! the narrow traits they declare (see [`crate::consumers`]); readers either
//! take a snapshot with [`Store::values`] or subscribe for every committed
//! change.
//!
//! # Replay buffering
//!
//! When the server starts resending a party's history, the store switches to
//! `Replaying`: mutations fold into a shadow copy and subscribers see nothing
//! until [`Store::end_replay`] publishes the copy in a single notification.
//! Dialog-opening mutations are dropped while replaying.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use bombcanary_domain::{Allegiance, MissionRequirement, NameSet, PlayerVotes};

use super::StoreValues;
use crate::consumers::{GameStore, PlayerStore, ReplayStore, Resetter, RoomStore};

type Listener = Rc<dyn Fn(&StoreValues)>;

enum Mode {
    Live,
    Replaying { buffer: StoreValues },
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

impl Listeners {
    fn add(&self, listener: Listener) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`Store::subscribe`]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    /// Stop receiving notifications. A no-op once the store is gone.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }
}

/// Single owner of the client view model
pub struct Store {
    live: RefCell<StoreValues>,
    mode: RefCell<Mode>,
    listeners: Rc<Listeners>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            live: RefCell::new(StoreValues::default()),
            mode: RefCell::new(Mode::Live),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Clone of the publicly readable model. Buffered replay state is not visible.
    pub fn values(&self) -> StoreValues {
        self.live.borrow().clone()
    }

    pub fn is_replaying(&self) -> bool {
        matches!(*self.mode.borrow(), Mode::Replaying { .. })
    }

    /// Register a listener. It is called right away with the current model,
    /// then once per committed change.
    pub fn subscribe(&self, listener: impl Fn(&StoreValues) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let id = self.listeners.add(Rc::clone(&listener));
        let current = self.values();
        listener(&current);
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn start_replay(&self) {
        if self.is_replaying() {
            return;
        }
        let buffer = self.values();
        *self.mode.borrow_mut() = Mode::Replaying { buffer };
        tracing::debug!("Replay started, buffering store mutations");
    }

    pub fn end_replay(&self) {
        let previous = std::mem::replace(&mut *self.mode.borrow_mut(), Mode::Live);
        let Mode::Replaying { buffer } = previous else {
            return;
        };
        *self.live.borrow_mut() = buffer;
        tracing::debug!("Replay ended, publishing buffered state");
        self.notify();
    }

    /// Discard everything and go back to defaults. Abandons any replay.
    pub fn reset(&self) {
        *self.mode.borrow_mut() = Mode::Live;
        *self.live.borrow_mut() = StoreValues::default();
        self.notify();
    }

    fn update(&self, mutate: impl FnOnce(&mut StoreValues)) {
        if let Mode::Replaying { buffer } = &mut *self.mode.borrow_mut() {
            mutate(buffer);
            buffer.recompute();
            return;
        }
        {
            let mut live = self.live.borrow_mut();
            mutate(&mut live);
            live.recompute();
        }
        self.notify();
    }

    /// Apply only when live; dropped while replaying.
    fn update_live_only(&self, mutate: impl FnOnce(&mut StoreValues)) {
        if self.is_replaying() {
            tracing::trace!("Dropping dialog mutation during replay");
            return;
        }
        self.update(mutate);
    }

    fn notify(&self) {
        let snapshot = self.values();
        for listener in self.listeners.snapshot() {
            listener(&snapshot);
        }
    }
}

impl PlayerStore for Store {
    fn define_player(&self, name: &str) {
        self.update(|v| v.define_player(name));
    }

    fn join_player(&self, name: &str) {
        self.update(|v| v.join_player(name));
    }
}

impl GameStore for Store {
    fn set_mission_requirements(&self, requirements: Vec<MissionRequirement>) {
        self.update(|v| v.set_mission_requirements(requirements));
    }

    fn start_team_selection(&self) {
        self.update(StoreValues::start_team_selection);
    }

    fn assign_leader(&self, leader: &str) {
        self.update(|v| v.assign_leader(leader));
    }

    fn select_player(&self, name: &str) {
        self.update(|v| v.select_player(name));
    }

    fn deselect_player(&self, name: &str) {
        self.update(|v| v.deselect_player(name));
    }

    fn start_team_vote(&self) {
        self.update(StoreValues::start_team_vote);
    }

    fn make_player_vote(&self, name: &str, approved: Option<bool>) {
        self.update(|v| v.make_player_vote(name, approved));
    }

    fn save_team_vote_result(&self, approved: bool, player_votes: PlayerVotes) {
        self.update(|v| v.save_team_vote_result(approved, player_votes));
    }

    fn start_mission(&self) {
        self.update(StoreValues::start_mission);
    }

    fn make_player_work_on_mission(&self, name: &str, success: Option<bool>) {
        self.update(|v| v.make_player_work_on_mission(name, success));
    }

    fn save_mission_result(&self, success: bool, failure_count: usize) {
        self.update(|v| v.save_mission_result(success, failure_count));
    }

    fn show_last_mission_result(&self) {
        self.update_live_only(StoreValues::show_last_mission_result);
    }

    fn remember_spies(&self, spies: NameSet) {
        self.update(|v| v.remember_spies(spies));
    }

    fn end_game(&self, winner: Allegiance) {
        self.update(|v| v.end_game(winner));
    }
}

impl RoomStore for Store {
    fn show_lobby(&self) {
        self.update(StoreValues::show_lobby);
    }

    fn show_party_room(&self, code: Option<String>) {
        self.update(|v| v.show_party_room(code));
    }

    fn show_game_room(&self) {
        self.update(StoreValues::show_game_room);
    }

    fn show_identity(&self) {
        self.update_live_only(StoreValues::show_identity);
    }

    fn show_mission_details(&self, mission: usize) {
        self.update_live_only(|v| v.show_mission_details(mission));
    }

    fn close_dialog(&self) {
        self.update(StoreValues::close_dialog);
    }
}

impl ReplayStore for Store {
    fn start_replay(&self) {
        Store::start_replay(self);
    }

    fn end_replay(&self) {
        Store::end_replay(self);
    }
}

impl Resetter for Store {
    fn reset(&self) {
        Store::reset(self);
    }
}
