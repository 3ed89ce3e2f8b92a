//! Outbound request queue
//!
//! Consumers run synchronously on the bus, so they never await a request.
//! They push an [`OutboundRequest`] onto an unbounded channel; a single task
//! performs the requests in order and reports follow-up events back through a
//! second channel that the composition root drains into the bus.

use bombcanary_shared::{
    CreatePartyRequest, CreatePartyResponse, JoinPartyRequest, PlayerAction, CREATE_PARTY_PATH,
    JOIN_PARTY_PATH,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::messages::Event;
use crate::ports::outbound::{ApiError, HttpPost};

/// A request waiting to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundRequest {
    Action(PlayerAction),
    CreateParty(CreatePartyRequest),
    JoinParty(JoinPartyRequest),
}

impl OutboundRequest {
    /// Endpoint path, used for logging
    pub fn path(&self) -> String {
        match self {
            OutboundRequest::Action(action) => action.path(),
            OutboundRequest::CreateParty(_) => CREATE_PARTY_PATH.to_string(),
            OutboundRequest::JoinParty(_) => JOIN_PARTY_PATH.to_string(),
        }
    }
}

pub type OutboundSender = mpsc::UnboundedSender<OutboundRequest>;
pub type OutboundReceiver = mpsc::UnboundedReceiver<OutboundRequest>;

fn to_body<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::encode(e.to_string()))
}

/// Perform one request. Returns the event to dispatch on success, if any.
pub async fn execute(
    http: &dyn HttpPost,
    request: OutboundRequest,
) -> Result<Option<Event>, ApiError> {
    match request {
        OutboundRequest::Action(action) => {
            let path = action.path();
            match action.body() {
                Some(body) => http.post_no_response_json(&path, &to_body(&body)?).await?,
                None => http.post_empty(&path).await?,
            }
            Ok(None)
        }
        OutboundRequest::CreateParty(request) => {
            let response = http.post_json(CREATE_PARTY_PATH, &to_body(&request)?).await?;
            let created: CreatePartyResponse =
                serde_json::from_value(response).map_err(|e| ApiError::decode(e.to_string()))?;
            Ok(Some(Event::PartyCreated { code: created.code }))
        }
        OutboundRequest::JoinParty(request) => {
            http.post_no_response_json(JOIN_PARTY_PATH, &to_body(&request)?)
                .await?;
            Ok(Some(Event::JoinPartySucceeded { code: request.code }))
        }
    }
}

/// Send queued requests one at a time until the queue closes.
///
/// Failures are logged and dropped; nothing is retried.
pub async fn run_outbound(
    http: Arc<dyn HttpPost>,
    mut requests: OutboundReceiver,
    completions: mpsc::UnboundedSender<Event>,
) {
    while let Some(request) = requests.recv().await {
        let path = request.path();
        match execute(http.as_ref(), request).await {
            Ok(Some(event)) => {
                tracing::debug!(path = %path, "Request succeeded");
                if completions.send(event).is_err() {
                    tracing::debug!("Completion receiver dropped, stopping outbound loop");
                    return;
                }
            }
            Ok(None) => tracing::debug!(path = %path, "Request sent"),
            Err(e) => tracing::warn!(path = %path, error = %e, "Request failed"),
        }
    }
    tracing::debug!("Outbound request queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockHttpPost;
    use serde_json::json;

    #[tokio::test]
    async fn empty_action_posts_without_body() {
        let mut http = MockHttpPost::new();
        http.expect_post_empty()
            .withf(|path| path == "/actions/approve-team")
            .times(1)
            .returning(|_| Ok(()));

        let result = execute(&http, OutboundRequest::Action(PlayerAction::ApproveTeam)).await;

        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn member_action_posts_member_body() {
        let mut http = MockHttpPost::new();
        http.expect_post_no_response_json()
            .withf(|path, body| {
                path == "/actions/leader-selects-member" && *body == json!({"member": "bob"})
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let request = OutboundRequest::Action(PlayerAction::LeaderSelectsMember {
            member: "bob".to_string(),
        });
        assert_eq!(execute(&http, request).await, Ok(None));
    }

    #[tokio::test]
    async fn create_party_yields_party_created() {
        let mut http = MockHttpPost::new();
        http.expect_post_json()
            .withf(|path, body| path == "/party/create" && *body == json!({"name": "alice"}))
            .times(1)
            .returning(|_, _| Ok(json!({"code": "testCode"})));

        let request = OutboundRequest::CreateParty(CreatePartyRequest {
            name: "alice".to_string(),
        });
        let result = execute(&http, request).await;

        assert_eq!(
            result,
            Ok(Some(Event::PartyCreated {
                code: "testCode".to_string()
            }))
        );
    }

    #[tokio::test]
    async fn create_party_with_malformed_response_is_a_decode_error() {
        let mut http = MockHttpPost::new();
        http.expect_post_json()
            .returning(|_, _| Ok(json!({"unexpected": true})));

        let request = OutboundRequest::CreateParty(CreatePartyRequest {
            name: "alice".to_string(),
        });
        let result = execute(&http, request).await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn join_party_yields_join_succeeded_with_code() {
        let mut http = MockHttpPost::new();
        http.expect_post_no_response_json()
            .withf(|path, body| {
                path == "/party/join" && *body == json!({"code": "xyz", "name": "bob"})
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let request = OutboundRequest::JoinParty(JoinPartyRequest {
            code: "xyz".to_string(),
            name: "bob".to_string(),
        });

        assert_eq!(
            execute(&http, request).await,
            Ok(Some(Event::JoinPartySucceeded {
                code: "xyz".to_string()
            }))
        );
    }

    #[tokio::test]
    async fn run_outbound_reports_successes_and_drops_failures() {
        let mut http = MockHttpPost::new();
        http.expect_post_empty()
            .returning(|_| Err(ApiError::status(403, "not the leader")));
        http.expect_post_no_response_json()
            .returning(|_, _| Ok(()));

        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        request_tx
            .send(OutboundRequest::Action(PlayerAction::StartGame))
            .expect("queue open");
        request_tx
            .send(OutboundRequest::JoinParty(JoinPartyRequest {
                code: "c1".to_string(),
                name: "n1".to_string(),
            }))
            .expect("queue open");
        drop(request_tx);

        run_outbound(Arc::new(http), request_rx, event_tx).await;

        assert_eq!(
            event_rx.recv().await,
            Some(Event::JoinPartySucceeded {
                code: "c1".to_string()
            })
        );
        assert_eq!(event_rx.recv().await, None);
    }
}
