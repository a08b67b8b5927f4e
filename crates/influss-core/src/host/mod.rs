//! Messages exchanged with the browser extension over native messaging.
//!
//! Inbound messages are tagged by `action`, replies by `type`. Either side may
//! carry a `requestId`; the host echoes it back untouched so the extension can
//! match replies to requests that are answered out of order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::clip::ClipResult;
use crate::settings::Settings;
use crate::trigger::{ClipTrigger, ContextMenuClick};

pub const REQUEST_ID_KEY: &str = "requestId";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// What the extension asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtensionMessage {
    /// Sent by the popup with the active tab's URL.
    ClipWebsite {
        #[serde(default)]
        url: String,
    },

    #[serde(rename_all = "camelCase")]
    ContextMenuClicked {
        menu_item_id: String,
        #[serde(default)]
        page_url: Option<String>,
        #[serde(default)]
        link_url: Option<String>,
    },

    GetSettings,

    SaveSettings(Settings),
}

/// What the host does with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Clip(ClipTrigger),
    GetSettings,
    SaveSettings(Settings),
}

impl ExtensionMessage {
    pub fn into_command(self) -> HostCommand {
        match self {
            ExtensionMessage::ClipWebsite { url } => {
                HostCommand::Clip(ClipTrigger::PopupMessage { url })
            }
            ExtensionMessage::ContextMenuClicked {
                menu_item_id,
                page_url,
                link_url,
            } => HostCommand::Clip(ClipTrigger::ContextMenu(ContextMenuClick {
                menu_item_id,
                page_url,
                link_url,
            })),
            ExtensionMessage::GetSettings => HostCommand::GetSettings,
            ExtensionMessage::SaveSettings(settings) => HostCommand::SaveSettings(settings),
        }
    }
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRequest {
    pub request_id: Option<Value>,
    pub message: ExtensionMessage,
}

/// An inbound frame that could not be turned into a message.
///
/// The request id is kept when the frame was at least a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRequest {
    pub request_id: Option<Value>,
    pub error: HostError,
}

impl HostRequest {
    pub fn decode(frame: &[u8]) -> Result<Self, RejectedRequest> {
        let value: Value = serde_json::from_slice(frame).map_err(|e| RejectedRequest {
            request_id: None,
            error: HostError::MalformedJson(e.to_string()),
        })?;

        let request_id = value
            .get(REQUEST_ID_KEY)
            .filter(|id| !id.is_null())
            .cloned();

        match serde_json::from_value(value) {
            Ok(message) => Ok(Self {
                request_id,
                message,
            }),
            Err(e) => Err(RejectedRequest {
                request_id,
                error: HostError::InvalidMessage(e.to_string()),
            }),
        }
    }
}

/// What the host answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostReply {
    ClipResult(ClipResult),
    Settings(Settings),
    Saved { saved: bool },
    /// The message was not addressed to us (foreign context-menu item).
    Ignored,
    Error { message: String },
}

impl HostReply {
    pub fn error(error: &HostError) -> Self {
        HostReply::Error {
            message: error.to_string(),
        }
    }

    /// Serialize, echoing `request_id` when present.
    pub fn encode(&self, request_id: Option<&Value>) -> Result<Vec<u8>, HostError> {
        let mut value =
            serde_json::to_value(self).map_err(|e| HostError::Internal(e.to_string()))?;

        if let (Some(id), Some(object)) = (request_id, value.as_object_mut()) {
            object.insert(REQUEST_ID_KEY.to_string(), id.clone());
        }

        serde_json::to_vec(&value).map_err(|e| HostError::Internal(e.to_string()))
    }
}
