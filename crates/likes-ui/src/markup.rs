//! Like icon markup
//!
//! How a like icon is recognised (selector class), where its message id lives
//! (data attribute) and which classes render its state.

use likes_common::UiConfig;
use likes_core::{is_class_token, DomainError, IconStyle, LikeState, MessageId};

use crate::container::{Element, ElementId, MessageList};
use crate::error::{ContainerError, HandlerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMarkup {
    icon_class: String,
    message_id_attr: String,
    style: IconStyle,
}

impl IconMarkup {
    /// The selector class and the id attribute must each be a single token
    pub fn new(
        icon_class: impl Into<String>,
        message_id_attr: impl Into<String>,
        style: IconStyle,
    ) -> Result<Self, DomainError> {
        let icon_class = icon_class.into();
        let message_id_attr = message_id_attr.into();

        if !is_class_token(&icon_class) {
            return Err(DomainError::InvalidIconMarkup(format!(
                "icon class must be a single non-empty token, got {icon_class:?}"
            )));
        }
        if !is_class_token(&message_id_attr) {
            return Err(DomainError::InvalidIconMarkup(format!(
                "message id attribute must be a single non-empty token, got {message_id_attr:?}"
            )));
        }

        Ok(Self {
            icon_class,
            message_id_attr,
            style,
        })
    }

    pub fn from_config(config: &UiConfig) -> Result<Self, DomainError> {
        Self::new(
            config.icon_class.clone(),
            config.message_id_attr.clone(),
            config.icon_style()?,
        )
    }

    pub fn icon_class(&self) -> &str {
        &self.icon_class
    }

    pub fn message_id_attr(&self) -> &str {
        &self.message_id_attr
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    pub fn is_icon(&self, element: &Element) -> bool {
        element.has_class(&self.icon_class)
    }

    /// Read the message id the icon was rendered with
    pub fn message_id(&self, element: &Element) -> Result<MessageId, HandlerError> {
        let value = element
            .attribute(&self.message_id_attr)
            .ok_or_else(|| HandlerError::MissingMessageId {
                attribute: self.message_id_attr.clone(),
            })?;

        MessageId::parse(value).map_err(|source| HandlerError::InvalidMessageId {
            value: value.to_string(),
            source,
        })
    }

    /// Current like state of an icon, read from its classes
    pub fn state(&self, element: &Element) -> Result<LikeState, DomainError> {
        self.style.state_of(&element.classes())
    }

    /// Render an icon for a message under `parent`, in sync with `state`
    pub fn render(
        &self,
        list: &MessageList,
        parent: ElementId,
        message_id: &MessageId,
        state: LikeState,
    ) -> Result<ElementId, ContainerError> {
        let class_attr = format!("{} {}", self.icon_class, self.style.class_for(state));
        list.append_child(
            parent,
            &class_attr,
            &[(self.message_id_attr.as_str(), message_id.as_str())],
        )
    }
}

impl Default for IconMarkup {
    fn default() -> Self {
        let config = UiConfig::default();
        Self {
            icon_class: config.icon_class,
            message_id_attr: config.message_id_attr,
            style: IconStyle::default(),
        }
    }
}
