//! Client configuration read from the environment

use std::time::Duration;

use url::Url;

pub const SERVER_URL_VAR: &str = "BOMBCANARY_SERVER_URL";
pub const EVENTS_PATH_VAR: &str = "BOMBCANARY_EVENTS_PATH";
pub const REQUEST_TIMEOUT_VAR: &str = "BOMBCANARY_REQUEST_TIMEOUT_SECS";

const DEFAULT_SERVER_URL: &str = "http://localhost:44324";
const DEFAULT_EVENTS_PATH: &str = "/events";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {message}")]
    InvalidUrl { var: &'static str, message: String },
    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var} must be a whole number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for party and action requests
    pub server_url: Url,
    /// Websocket URL of the event stream
    pub events_url: Url,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get_var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = get_var(SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            var: SERVER_URL_VAR,
            message: e.to_string(),
        })?;

        let events_path =
            get_var(EVENTS_PATH_VAR).unwrap_or_else(|| DEFAULT_EVENTS_PATH.to_string());
        let events_url = events_url(&server_url, &events_path)?;

        let request_timeout = match get_var(REQUEST_TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: REQUEST_TIMEOUT_VAR,
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            server_url,
            events_url,
            request_timeout,
        })
    }
}

fn events_url(server_url: &Url, path: &str) -> Result<Url, ConfigError> {
    let scheme = match server_url.scheme() {
        "http" => "ws",
        "https" => "wss",
        other => {
            return Err(ConfigError::UnsupportedScheme {
                var: SERVER_URL_VAR,
                scheme: other.to_string(),
            })
        }
    };

    let mut url = server_url.join(path).map_err(|e| ConfigError::InvalidUrl {
        var: EVENTS_PATH_VAR,
        message: e.to_string(),
    })?;
    url.set_scheme(scheme)
        .map_err(|_| ConfigError::UnsupportedScheme {
            var: SERVER_URL_VAR,
            scheme: scheme.to_string(),
        })?;
    Ok(url)
}
