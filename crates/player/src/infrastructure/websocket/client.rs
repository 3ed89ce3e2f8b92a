//! Event stream client using tokio-tungstenite
//!
//! Read-only: the server never expects frames from the player. Every frame,
//! error and close is forwarded as a [`StreamReport`] over a channel; the
//! single-threaded side passes it through [`EventStreamClient::accept`] and
//! feeds the signal to the [`StreamHandler`](super::StreamHandler).
//! There is no reconnect. A closed stream always ends with `Closed`.
//!
//! Each `open` starts a new connection number. Reports already queued by a
//! replaced connection are dropped by `accept`.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::COOKIE;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use super::StreamSignal;
use crate::infrastructure::http::HttpClient;
use crate::ports::outbound::StreamOpener;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Invalid stream request: {0}")]
    Request(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("Invalid cookie header: {0}")]
    Cookie(String),
}

/// A [`StreamSignal`] tagged with the connection that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReport {
    pub connection: u64,
    pub signal: StreamSignal,
}

pub type SignalSender = mpsc::UnboundedSender<StreamReport>;

struct Reporter {
    connection: u64,
    signals: SignalSender,
}

impl Reporter {
    /// False once the run loop is gone.
    fn send(&self, signal: StreamSignal) -> bool {
        self.signals
            .send(StreamReport {
                connection: self.connection,
                signal,
            })
            .is_ok()
    }
}

/// Connects to the server event stream, carrying the session cookie
pub struct EventStreamClient {
    url: Url,
    cookie_url: Url,
    http: HttpClient,
    task: Option<JoinHandle<()>>,
    connection: u64,
}

impl EventStreamClient {
    /// `url` is the websocket endpoint; `cookie_url` is the http URL the
    /// session cookie was set for.
    pub fn new(url: Url, cookie_url: Url, http: HttpClient) -> Self {
        Self {
            url,
            cookie_url,
            http,
            task: None,
            connection: 0,
        }
    }

    /// Open the stream, replacing any connection already running.
    pub fn open(&mut self, signals: SignalSender) {
        if let Some(previous) = self.task.take() {
            previous.abort();
        }
        self.connection += 1;
        let reporter = Reporter {
            connection: self.connection,
            signals,
        };

        match self.request() {
            Ok(request) => {
                let url = self.url.to_string();
                self.task = Some(tokio::spawn(read_stream(url, request, reporter)));
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not build event stream request");
                reporter.send(StreamSignal::Error(e.to_string()));
                reporter.send(StreamSignal::Closed);
            }
        }
    }

    /// The signal of `report`, unless a later `open` replaced its connection.
    pub fn accept(&self, report: StreamReport) -> Option<StreamSignal> {
        if report.connection == self.connection {
            Some(report.signal)
        } else {
            tracing::debug!(
                connection = report.connection,
                current = self.connection,
                "Dropping signal from replaced event stream"
            );
            None
        }
    }

    /// Stop the running stream without reporting a close.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn request(&self) -> Result<Request, StreamError> {
        let mut request = self.url.as_str().into_client_request()?;
        if let Some(cookie) = self.http.cookie_header(&self.cookie_url) {
            let value =
                HeaderValue::from_str(&cookie).map_err(|e| StreamError::Cookie(e.to_string()))?;
            request.headers_mut().insert(COOKIE, value);
        }
        Ok(request)
    }
}

async fn read_stream(url: String, request: Request, reporter: Reporter) {
    match connect_async(request).await {
        Ok((ws_stream, _)) => {
            tracing::info!("Connected to event stream at {}", url);
            let (_write, mut read) = ws_stream.split();

            while let Some(msg) = read.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        if !reporter.send(StreamSignal::Frame(text)) {
                            return;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        tracing::info!("Server closed event stream");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!("Event stream error: {}", e);
                        reporter.send(StreamSignal::Error(e.to_string()));
                        break;
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!("Failed to connect to event stream: {}", e);
            reporter.send(StreamSignal::Error(e.to_string()));
        }
    }
    reporter.send(StreamSignal::Closed);
}

/// [`StreamOpener`] that asks the run loop to (re)open the stream
pub struct ChannelStreamOpener {
    requests: mpsc::UnboundedSender<()>,
}

impl ChannelStreamOpener {
    pub fn new(requests: mpsc::UnboundedSender<()>) -> Self {
        Self { requests }
    }
}

impl StreamOpener for ChannelStreamOpener {
    fn open(&self) {
        if self.requests.send(()).is_err() {
            tracing::warn!("Run loop gone, cannot open event stream");
        }
    }
}
