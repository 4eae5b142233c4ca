//! Test helpers for integration tests
//!
//! Provides a mock backend serving `POST /api/messages/:message_id/toggle_like`
//! and utilities for building clients and pages against it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use dashmap::DashMap;
use likes_client::HttpToggleLikeApi;
use likes_common::ApiConfig;
use likes_core::{LikeState, MessageId, NO_MESSAGE};
use likes_ui::{ElementId, IconMarkup, MessageList, Page};
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::fixtures::ToggleLikeReply;

/// Forced reply replacing the normal endpoint behavior
#[derive(Debug, Clone)]
pub enum ForcedReply {
    /// Reply with this status and a JSON body
    Status(u16),
    /// Reply 200 with this raw, non-JSON body
    RawBody(String),
}

/// Server-side state of the mock backend
#[derive(Debug, Default)]
pub struct BackendState {
    token: Option<String>,
    liked: DashMap<MessageId, bool>,
    hits: DashMap<MessageId, usize>,
    forced: Mutex<Option<ForcedReply>>,
    delay: Mutex<Option<Duration>>,
}

impl BackendState {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some(token) = &self.token else {
            return true;
        };
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            == Some(token.as_str())
    }
}

async fn toggle_like(
    State(state): State<Arc<BackendState>>,
    Path(message_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let delay = *state.delay.lock();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let Ok(message_id) = MessageId::parse(&message_id) else {
        return (StatusCode::OK, Json(ToggleLikeReply::message(NO_MESSAGE))).into_response();
    };
    *state.hits.entry(message_id.clone()).or_default() += 1;

    if !state.authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ToggleLikeReply::message("Access unauthorized")),
        )
            .into_response();
    }

    let forced = state.forced.lock().clone();
    match forced {
        Some(ForcedReply::Status(status)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, Json(ToggleLikeReply::message("forced"))).into_response();
        }
        Some(ForcedReply::RawBody(body)) => return (StatusCode::OK, body).into_response(),
        None => {}
    }

    match state.liked.get_mut(&message_id) {
        Some(mut liked) => {
            *liked = !*liked;
            (StatusCode::OK, Json(ToggleLikeReply::toggled(*liked))).into_response()
        }
        None => (StatusCode::OK, Json(ToggleLikeReply::message(NO_MESSAGE))).into_response(),
    }
}

/// Mock backend instance that manages lifecycle
pub struct TestBackend {
    pub addr: SocketAddr,
    state: Arc<BackendState>,
    _handle: JoinHandle<()>,
}

impl TestBackend {
    /// Start a backend that accepts every request
    pub async fn start() -> Result<Self> {
        Self::start_with_state(BackendState::default()).await
    }

    /// Start a backend that answers 401 unless the bearer token matches
    pub async fn start_with_token(token: &str) -> Result<Self> {
        Self::start_with_state(BackendState {
            token: Some(token.to_string()),
            ..BackendState::default()
        })
        .await
    }

    async fn start_with_state(state: BackendState) -> Result<Self> {
        let state = Arc::new(state);
        let app = Router::new()
            .route("/api/messages/:message_id/toggle_like", post(toggle_like))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register a message with its current like state
    pub fn add_message(&self, message_id: &MessageId, liked: bool) {
        self.state.liked.insert(message_id.clone(), liked);
    }

    /// Server-side like state, `None` for unknown messages
    pub fn liked(&self, message_id: &MessageId) -> Option<bool> {
        self.state.liked.get(message_id).map(|liked| *liked)
    }

    /// Number of toggle requests received for a message
    pub fn hits(&self, message_id: &MessageId) -> usize {
        self.state.hits.get(message_id).map_or(0, |hits| *hits)
    }

    pub fn force_reply(&self, reply: Option<ForcedReply>) {
        *self.state.forced.lock() = reply;
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.state.delay.lock() = delay;
    }

    /// Client config pointing at this backend
    pub fn api_config(&self, token: Option<&str>) -> ApiConfig {
        ApiConfig {
            token: token.map(str::to_string),
            timeout_secs: 5,
            ..ApiConfig::new(self.base_url())
        }
    }

    /// HTTP toggle client pointing at this backend
    pub fn client(&self, token: Option<&str>) -> Result<HttpToggleLikeApi> {
        Ok(HttpToggleLikeApi::new(&self.api_config(token))?)
    }
}

/// A page with a `messages` container and one rendered icon per message
pub struct TestPage {
    pub page: Page,
    pub list: Arc<MessageList>,
    pub icons: Vec<(MessageId, ElementId)>,
}

impl TestPage {
    /// Render `<li><button><i class="fa-heart ..." data-msg-id=...>` rows
    pub fn render(markup: &IconMarkup, messages: &[(MessageId, LikeState)]) -> Result<Self> {
        let page = Page::new();
        let list = MessageList::new("messages");
        page.insert(list.clone());

        let mut icons = Vec::with_capacity(messages.len());
        for (message_id, state) in messages {
            let row = list.append_child(list.root(), "message", &[])?;
            let button = list.append_child(row, "btn btn-sm", &[])?;
            let icon = markup.render(&list, button, message_id, *state)?;
            icons.push((message_id.clone(), icon));
        }

        Ok(Self { page, list, icons })
    }

    pub fn icon(&self, message_id: &MessageId) -> Option<ElementId> {
        self.icons
            .iter()
            .find(|(id, _)| id == message_id)
            .map(|(_, icon)| *icon)
    }

    /// Class attribute of an element
    pub fn classes(&self, element: ElementId) -> String {
        self.list
            .get(element)
            .map(|e| e.classes().to_string())
            .unwrap_or_default()
    }
}
