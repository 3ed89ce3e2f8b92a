//! Stream Port - Opening the server event stream
//!
//! The stream is opened on application start and again after a party was
//! created or joined, since the server only streams to known players.
//! Implementations must be cheap to call repeatedly; the adapter replaces any
//! previous connection.

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StreamOpener {
    fn open(&self);
}
