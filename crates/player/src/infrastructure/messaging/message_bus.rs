//! Message Bus for fanning messages out to consumers.
//!
//! The MessageBus is an in-process publish/subscribe dispatcher. Consumers
//! register once at wiring time and receive every message dispatched
//! afterwards, in subscription order, synchronously on the calling thread.
//!
//! # Re-entrant dispatch
//!
//! A consumer may dispatch while it is itself consuming. The nested message is
//! queued and delivered after the current message has reached every consumer
//! (breadth-first), so all consumers observe messages in the same order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::messages::Message;

/// Receives every message dispatched on the bus it is subscribed to.
pub trait Consumer {
    fn consume(&self, message: &Message);
}

impl<F: Fn(&Message)> Consumer for F {
    fn consume(&self, message: &Message) {
        self(message)
    }
}

/// Anything that accepts messages for delivery.
///
/// Component services and stream handlers depend on this rather than on the
/// concrete bus.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Dispatcher {
    fn dispatch(&self, message: Message);
}

/// Single-threaded message bus.
///
/// Holds strong references to its consumers; there is no unsubscribe.
#[derive(Default)]
pub struct MessageBus {
    consumers: RefCell<Vec<Rc<dyn Consumer>>>,
    queue: RefCell<VecDeque<Message>>,
    draining: Cell<bool>,
}

impl MessageBus {
    /// Create a new MessageBus with no consumers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a consumer. It sees every message dispatched from now on.
    pub fn subscribe(&self, consumer: Rc<dyn Consumer>) {
        self.consumers.borrow_mut().push(consumer);
    }

    /// Get the number of consumers.
    pub fn subscriber_count(&self) -> usize {
        self.consumers.borrow().len()
    }

    fn deliver(&self, message: &Message) {
        // Consumers subscribed during delivery only see later messages.
        let consumers: Vec<Rc<dyn Consumer>> = self.consumers.borrow().clone();
        for consumer in consumers {
            consumer.consume(message);
        }
    }
}

/// Clears the draining flag even if a consumer panics.
struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Dispatcher for MessageBus {
    fn dispatch(&self, message: Message) {
        self.queue.borrow_mut().push_back(message);
        if self.draining.replace(true) {
            // An outer dispatch is draining the queue and will get to it.
            return;
        }
        let _guard = DrainGuard(&self.draining);

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            self.deliver(&message);
        }
    }
}

impl<D: Dispatcher + ?Sized> Dispatcher for Rc<D> {
    fn dispatch(&self, message: Message) {
        (**self).dispatch(message)
    }
}
