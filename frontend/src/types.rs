//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Operation Types** - the selectable backend operations
//! - **API Types** - backend response structure
//! - **Popup Types** - notification state
//! - **Wallet Types** - browser wallet info
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Operation Types
// =============================================================================

/// The backend operation selected by the user.
///
/// Determines which endpoint receives the upload and how the response
/// payload is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Register the image on chain.
    Publish,
    /// Check whether the image already exists on chain.
    Verify,
    /// Validate image properties server-side.
    Check,
}

impl Mode {
    /// All operations, in display order.
    pub const ALL: [Mode; 3] = [Mode::Publish, Mode::Verify, Mode::Check];

    /// URL segment appended to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Mode::Publish => "publish",
            Mode::Verify => "verify",
            Mode::Check => "check",
        }
    }

    /// Card title shown in the feature selector.
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Publish => "Publish to Blockchain",
            Mode::Verify => "Verify on Blockchain",
            Mode::Check => "Image Validation",
        }
    }

    /// Card description shown in the feature selector.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Publish => {
                "Upload and publish your image to the blockchain for permanent storage"
            }
            Mode::Verify => "Check if your image already exists on the blockchain",
            Mode::Check => "Validate image properties and check for tampering",
        }
    }

    /// Label of the submit button.
    pub fn action_label(&self) -> &'static str {
        match self {
            Mode::Publish => "Publish",
            Mode::Verify => "Verify",
            Mode::Check => "Validate",
        }
    }

    /// Whether the operation needs a connected wallet.
    ///
    /// Only publishing writes on chain; verification and validation are
    /// read-only and work without an account.
    pub fn requires_wallet(&self) -> bool {
        matches!(self, Mode::Publish)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend upload endpoints.
///
/// The server contract is not formally versioned, so every field beyond
/// `message` is optional and absent fields deserialize to `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Human-readable outcome description.
    #[serde(default)]
    pub message: String,
    /// Whether the operation succeeded, as reported by the server.
    #[serde(default)]
    pub success: Option<bool>,
    /// Whether a matching image record already exists on chain.
    #[serde(default)]
    pub exists: Option<bool>,
    /// Transaction reference of a successful publish (hex, no `0x` prefix).
    #[serde(default)]
    pub trx_hash: Option<String>,
    /// Perceptual hash computed for the uploaded image.
    #[serde(default)]
    pub hash: Option<String>,
    /// Image property report returned by the `check` endpoint.
    #[serde(default)]
    pub validation: Option<serde_json::Value>,
}

// =============================================================================
// Popup Types
// =============================================================================

/// Kind of a popup notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

impl PopupKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            PopupKind::Success => "popup-success",
            PopupKind::Error => "popup-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            PopupKind::Success => "✅",
            PopupKind::Error => "❌",
        }
    }
}

/// A non-blocking notification raised when a request resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub kind: PopupKind,
    pub message: String,
}

impl Popup {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// Wallet Types
// =============================================================================

/// Connected wallet account.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletAccount {
    /// Hex-encoded account address.
    pub address: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The `Display` output is
/// shown to the user, so API errors render the server message verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Network/HTTP failure or malformed response body.
    Network(String),
    /// Non-2xx HTTP status; carries the server-provided message.
    Api { status: u16, message: String },
    /// Wallet connection failed.
    Wallet(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api { message, .. } => write!(f, "{}", message),
            AppError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_endpoints() {
        assert_eq!(Mode::Publish.endpoint(), "publish");
        assert_eq!(Mode::Verify.endpoint(), "verify");
        assert_eq!(Mode::Check.endpoint(), "check");
    }

    #[test]
    fn only_publish_requires_wallet() {
        assert!(Mode::Publish.requires_wallet());
        assert!(!Mode::Verify.requires_wallet());
        assert!(!Mode::Check.requires_wallet());
    }

    #[test]
    fn response_deserializes_full_publish_body() {
        let json = r#"{
            "message": "Image published successfully",
            "success": true,
            "exists": false,
            "trx_hash": "9a1c2f",
            "hash": "ffab#0012#77cd"
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Image published successfully");
        assert_eq!(response.success, Some(true));
        assert_eq!(response.exists, Some(false));
        assert_eq!(response.trx_hash.as_deref(), Some("9a1c2f"));
        assert!(response.validation.is_none());
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_empty());
        assert!(response.success.is_none());
        assert!(response.exists.is_none());
        assert!(response.trx_hash.is_none());
        assert!(response.hash.is_none());
        assert!(response.validation.is_none());
    }

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = AppError::Api {
            status: 400,
            message: "bad file".to_string(),
        };
        assert_eq!(err.to_string(), "bad file");
    }
}
