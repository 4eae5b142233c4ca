//! Like toggle handler
//!
//! Resolves the clicked icon, asks the backend to toggle the like, and flips the
//! icon's style classes when the backend did.
//!
//! Overlapping clicks on the same message are governed by [`InFlightPolicy`].
//! With `Overlap` nothing serializes them: each response flips the icon when it
//! arrives, so two quick clicks send two requests and end where they started,
//! and a failed first request can leave the icon one flip away from the server.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use likes_client::ToggleLikeApi;
use likes_common::{InFlightPolicy, UiConfig};
use likes_core::{DomainError, LikeState, MessageId, ToggleOutcome};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::container::{Element, ElementId, MessageList};
use crate::error::HandlerError;
use crate::markup::IconMarkup;

/// What one click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    pub message_id: MessageId,
    pub outcome: ToggleOutcome,
    /// Icon state after the click; `None` if the classes are ambiguous
    pub state: Option<LikeState>,
}

/// Delegated click handler for like icons
pub struct LikeToggleHandler {
    api: Arc<dyn ToggleLikeApi>,
    markup: IconMarkup,
    policy: InFlightPolicy,
    pending: DashMap<MessageId, usize>,
}

impl LikeToggleHandler {
    pub fn new(api: Arc<dyn ToggleLikeApi>, markup: IconMarkup, policy: InFlightPolicy) -> Self {
        Self {
            api,
            markup,
            policy,
            pending: DashMap::new(),
        }
    }

    pub fn from_config(api: Arc<dyn ToggleLikeApi>, config: &UiConfig) -> Result<Self, DomainError> {
        Ok(Self::new(api, IconMarkup::from_config(config)?, config.in_flight))
    }

    pub fn markup(&self) -> &IconMarkup {
        &self.markup
    }

    pub fn policy(&self) -> InFlightPolicy {
        self.policy
    }

    /// Number of requests currently pending for a message
    pub fn pending(&self, message_id: &MessageId) -> usize {
        self.pending.get(message_id).map_or(0, |count| *count)
    }

    /// Handle a click on `target` inside `list`
    ///
    /// Returns `None` when the click did not land on (or inside) a like icon.
    #[instrument(skip(self, list), fields(container = %list.id()))]
    pub async fn handle_click(
        &self,
        list: &MessageList,
        target: ElementId,
    ) -> Option<Result<ToggleReport, HandlerError>> {
        let icon = list.closest(target, |element| self.markup.is_icon(element))?;
        Some(self.toggle_icon(&icon).await)
    }

    /// Toggle the like behind an icon element
    pub async fn toggle_icon(&self, icon: &Element) -> Result<ToggleReport, HandlerError> {
        let message_id = self.markup.message_id(icon).inspect_err(|e| {
            warn!(element = %icon.id(), error = %e, code = e.code(), "Like icon without a usable message id");
        })?;

        let Some(_pending) = self.begin(&message_id) else {
            debug!(message_id = %message_id, "Toggle already pending, click skipped");
            return Ok(self.report(message_id, ToggleOutcome::Skipped, icon));
        };

        let outcome = match self.request(&message_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(message_id = %message_id, error = %e, code = e.code(), "Like toggle failed");
                return Err(e);
            }
        };

        if outcome.changes_state() {
            icon.update_classes(|classes| self.markup.style().flip(classes));
        }

        let report = self.report(message_id, outcome, icon);
        debug!(
            message_id = %report.message_id,
            outcome = %report.outcome,
            state = ?report.state,
            "Like toggle handled"
        );
        Ok(report)
    }

    async fn request(&self, message_id: &MessageId) -> Result<ToggleOutcome, HandlerError> {
        let response = self.api.toggle_like(message_id).await?;
        Ok(response.outcome()?)
    }

    fn report(&self, message_id: MessageId, outcome: ToggleOutcome, icon: &Element) -> ToggleReport {
        ToggleReport {
            message_id,
            outcome,
            state: self.markup.state(icon).ok(),
        }
    }

    /// Register a pending request, or `None` if the policy says to skip it
    fn begin(&self, message_id: &MessageId) -> Option<PendingGuard<'_>> {
        match self.pending.entry(message_id.clone()) {
            Entry::Occupied(mut entry) => {
                if self.policy == InFlightPolicy::SkipWhilePending {
                    return None;
                }
                *entry.get_mut() += 1;
            }
            Entry::Vacant(entry) => {
                entry.insert(1);
            }
        }

        Some(PendingGuard {
            pending: &self.pending,
            message_id: message_id.clone(),
        })
    }
}

impl fmt::Debug for LikeToggleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LikeToggleHandler")
            .field("markup", &self.markup)
            .field("policy", &self.policy)
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Decrements the pending count when the request finishes or is dropped
struct PendingGuard<'a> {
    pending: &'a DashMap<MessageId, usize>,
    message_id: MessageId,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if let Entry::Occupied(mut entry) = self.pending.entry(self.message_id.clone()) {
            if *entry.get() <= 1 {
                entry.remove();
            } else {
                *entry.get_mut() -= 1;
            }
        }
    }
}
