//! Small response bodies shared by handlers.
//!
//! Slot endpoints return the slot JSON directly; only acknowledgements that
//! carry no entity use these types.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
