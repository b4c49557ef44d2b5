//! Response interpretation.
//!
//! A 2xx HTTP status does not imply success: the backend answers duplicate
//! findings with HTTP 200 and a payload describing the conflict. The
//! branching lives in [`interpret`], a pure function over
//! (mode, response), so the rendering layer stays free of policy.

use crate::config::EXPLORER_TX_BASE;
use crate::types::{ApiResponse, Mode, Popup};

/// Exact message the backend sends for a completed publish.
///
/// The success check depends on string equality with this constant; if the
/// backend wording changes, this is the one line to update.
pub const PUBLISH_OK_MESSAGE: &str = "Image published successfully";

/// UI-level resolution of an upload request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Success path: status text plus, for a publish, the transaction
    /// reference when present.
    Accepted {
        status: String,
        trx_hash: Option<String>,
    },
    /// Failure path: error text to render inline.
    Rejected { error: String },
}

/// Decide the UI outcome for a well-formed backend response.
pub fn interpret(mode: Mode, response: &ApiResponse) -> Outcome {
    match mode {
        Mode::Verify => match response.exists {
            Some(false) => Outcome::Accepted {
                status: "Image is unique. No matching record found on chain.".to_string(),
                trx_hash: None,
            },
            // An absent flag is not proof of uniqueness.
            _ => Outcome::Rejected {
                error: "Image already exists on the blockchain".to_string(),
            },
        },
        Mode::Publish => {
            let exists = response.exists.unwrap_or(false);
            if response.message == PUBLISH_OK_MESSAGE && !exists {
                Outcome::Accepted {
                    status: response.message.clone(),
                    trx_hash: response.trx_hash.clone(),
                }
            } else if exists {
                Outcome::Rejected {
                    error: "Image already exists on the blockchain".to_string(),
                }
            } else {
                Outcome::Rejected {
                    error: response.message.clone(),
                }
            }
        }
        Mode::Check => {
            let status = if response.message.is_empty() {
                "Image validation complete".to_string()
            } else {
                response.message.clone()
            };
            Outcome::Accepted {
                status,
                trx_hash: None,
            }
        }
    }
}

/// Build the popup notification for a resolved request.
pub fn popup_for(mode: Mode, outcome: &Outcome) -> Popup {
    match outcome {
        Outcome::Accepted { status, .. } => match mode {
            Mode::Publish => Popup::success("Image published to the blockchain"),
            Mode::Verify | Mode::Check => Popup::success(status.clone()),
        },
        Outcome::Rejected { error } => Popup::error(error.clone()),
    }
}

/// Block explorer link for a transaction reference.
///
/// The backend sends the hash without a `0x` prefix; strip one defensively
/// before re-adding it.
pub fn explorer_tx_url(trx_hash: &str) -> String {
    format!(
        "{}0x{}",
        EXPLORER_TX_BASE,
        trx_hash.trim_start_matches("0x")
    )
}

/// Shorten a long identifier to `first 6 ... last 4` for display.
///
/// Used for both wallet addresses and transaction references. Short values
/// pass through untouched.
pub fn truncate_hash(value: &str) -> String {
    if value.len() <= 10 {
        return value.to_string();
    }
    format!("{}...{}", &value[..6], &value[value.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PopupKind;

    fn response(json: &str) -> ApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn verify_unique_image_is_accepted() {
        let outcome = interpret(Mode::Verify, &response(r#"{"exists": false}"#));
        match outcome {
            Outcome::Accepted { status, trx_hash } => {
                assert!(status.contains("unique"));
                assert!(trx_hash.is_none());
            }
            Outcome::Rejected { .. } => panic!("unique image must be accepted"),
        }
    }

    #[test]
    fn verify_existing_image_is_rejected() {
        let outcome = interpret(Mode::Verify, &response(r#"{"exists": true}"#));
        assert!(matches!(
            outcome,
            Outcome::Rejected { ref error } if error.contains("already exists")
        ));
    }

    #[test]
    fn verify_without_exists_flag_is_rejected() {
        let outcome = interpret(Mode::Verify, &response("{}"));
        assert!(matches!(outcome, Outcome::Rejected { .. }));
    }

    #[test]
    fn publish_success_carries_transaction_reference() {
        let outcome = interpret(
            Mode::Publish,
            &response(
                r#"{"message": "Image published successfully", "exists": false, "trx_hash": "abc123"}"#,
            ),
        );
        assert_eq!(
            outcome,
            Outcome::Accepted {
                status: PUBLISH_OK_MESSAGE.to_string(),
                trx_hash: Some("abc123".to_string()),
            }
        );
    }

    #[test]
    fn publish_duplicate_is_rejected_regardless_of_message() {
        let outcome = interpret(
            Mode::Publish,
            &response(r#"{"message": "Image published successfully", "exists": true}"#),
        );
        assert!(matches!(
            outcome,
            Outcome::Rejected { ref error } if error.contains("already exists")
        ));
    }

    #[test]
    fn publish_with_unexpected_message_surfaces_it_verbatim() {
        let outcome = interpret(
            Mode::Publish,
            &response(r#"{"message": "Chain congested, try later", "exists": false}"#),
        );
        assert_eq!(
            outcome,
            Outcome::Rejected {
                error: "Chain congested, try later".to_string()
            }
        );
    }

    #[test]
    fn check_reports_server_message() {
        let outcome = interpret(
            Mode::Check,
            &response(r#"{"message": "Image validation complete", "validation": {"format": "PNG"}}"#),
        );
        assert_eq!(
            outcome,
            Outcome::Accepted {
                status: "Image validation complete".to_string(),
                trx_hash: None,
            }
        );
    }

    #[test]
    fn popup_language_follows_mode() {
        let accepted = interpret(Mode::Verify, &response(r#"{"exists": false}"#));
        let popup = popup_for(Mode::Verify, &accepted);
        assert_eq!(popup.kind, PopupKind::Success);
        assert!(popup.message.contains("unique"));

        let rejected = interpret(Mode::Publish, &response(r#"{"exists": true}"#));
        let popup = popup_for(Mode::Publish, &rejected);
        assert_eq!(popup.kind, PopupKind::Error);
        assert!(popup.message.contains("already exists"));
    }

    #[test]
    fn explorer_url_prefixes_hash() {
        assert_eq!(
            explorer_tx_url("abc123"),
            "https://sepolia.basescan.org/tx/0xabc123"
        );
        // Defensive against an already-prefixed hash.
        assert_eq!(
            explorer_tx_url("0xabc123"),
            "https://sepolia.basescan.org/tx/0xabc123"
        );
    }

    #[test]
    fn truncation_keeps_short_values() {
        assert_eq!(truncate_hash("abc123"), "abc123");
    }

    #[test]
    fn truncation_shortens_long_values() {
        let hash = "d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d4e5";
        assert_eq!(truncate_hash(hash), "d4e5f6...d4e5");
    }
}
