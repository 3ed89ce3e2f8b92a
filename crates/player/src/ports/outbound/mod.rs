//! Outbound ports - Interfaces for external services
//!
//! Consumers and the request executor depend on these traits so they can be
//! tested without a server.

pub mod http_port;
pub mod stream_port;

pub use http_port::{ApiError, HttpPost};
pub use stream_port::StreamOpener;

#[cfg(any(test, feature = "testing"))]
pub use http_port::MockHttpPost;
#[cfg(any(test, feature = "testing"))]
pub use stream_port::MockStreamOpener;
