//! Click binding lifecycle
//!
//! The like handler is attached to one container when it is mounted and
//! detached when the binding is unmounted or dropped.

use std::sync::Arc;

use crate::container::{BindingId, ElementId, MessageList, Page};
use crate::error::{BindingError, HandlerError};
use crate::handler::{LikeToggleHandler, ToggleReport};

/// A mounted like handler
#[derive(Debug)]
pub struct LikeBinding {
    container: Arc<MessageList>,
    handler: Arc<LikeToggleHandler>,
    binding_id: Option<BindingId>,
}

impl LikeBinding {
    /// Attach `handler` to the container with id `container_id`
    ///
    /// The container must already be on the page.
    pub fn mount(
        page: &Page,
        container_id: &str,
        handler: Arc<LikeToggleHandler>,
    ) -> Result<Self, BindingError> {
        let container = page
            .get(container_id)
            .ok_or_else(|| BindingError::ContainerMissing(container_id.to_string()))?;
        Ok(Self::mount_on(container, handler))
    }

    /// Attach `handler` to a container directly
    pub fn mount_on(container: Arc<MessageList>, handler: Arc<LikeToggleHandler>) -> Self {
        let binding_id = container.bind(handler.clone());
        tracing::info!(container = %container.id(), "Like handler mounted");

        Self {
            container,
            handler,
            binding_id: Some(binding_id),
        }
    }

    pub fn container(&self) -> &Arc<MessageList> {
        &self.container
    }

    pub fn handler(&self) -> &Arc<LikeToggleHandler> {
        &self.handler
    }

    pub fn is_mounted(&self) -> bool {
        self.binding_id.is_some()
    }

    /// Click an element of the bound container
    ///
    /// Only this binding's handler sees the click; use [`MessageList::click`]
    /// to reach every bound handler. Returns `None` when unmounted or when the
    /// click missed every icon.
    pub async fn click(&self, target: ElementId) -> Option<Result<ToggleReport, HandlerError>> {
        if !self.is_mounted() {
            return None;
        }
        self.handler.handle_click(&self.container, target).await
    }

    /// Detach the handler from the container
    pub fn unmount(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(binding_id) = self.binding_id.take() {
            self.container.unbind(binding_id);
            tracing::info!(container = %self.container.id(), "Like handler unmounted");
        }
    }
}

impl Drop for LikeBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
