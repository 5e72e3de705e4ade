//! Toast notification types
//!
//! Plain data consumed by the toast surface in `ui::notifications`.

use serde::{Deserialize, Serialize};

/// Toast severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient notification
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
            description: None,
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
            description: None,
            // Errors should be manually dismissed
            auto_dismiss_ms: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
