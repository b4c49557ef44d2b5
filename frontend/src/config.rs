//! Application configuration.
//!
//! Centralized configuration for the PxlProof frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The PxlProof backend handles image hashing, duplicate detection
/// and on-chain publication.
pub const API_BASE_URL: &str = "https://pxlproof.ashwinshome.co.uk/api";

/// Block explorer URL prefix for transaction references.
///
/// The transaction hash (without `0x`) returned by a publish is appended
/// as `0x{hash}`.
pub const EXPLORER_TX_BASE: &str = "https://sepolia.basescan.org/tx/";

/// Application name for wallet connection.
///
/// Displayed in wallet extension popups.
pub const APP_NAME: &str = "PxlProof";

/// Wallet-connect project identifier.
///
/// Build-time placeholder; override with `PXLPROOF_PROJECT_ID` for
/// production builds.
pub const WALLET_PROJECT_ID: &str = match option_env!("PXLPROOF_PROJECT_ID") {
    Some(id) => id,
    None => "diesdas",
};

/// MIME types accepted for upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Extension filter for the file picker, matching [`ALLOWED_IMAGE_TYPES`].
pub const IMAGE_ACCEPT_FILTER: &str = ".jpg,.jpeg,.png";

/// How long a popup notification stays on screen (in milliseconds).
pub const POPUP_DISMISS_MS: u32 = 6_000;

/// Check whether a file's MIME type is accepted for upload.
pub fn is_supported_image_type(mime: &str) -> bool {
    ALLOWED_IMAGE_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jpeg_and_png() {
        assert!(is_supported_image_type("image/jpeg"));
        assert!(is_supported_image_type("image/jpg"));
        assert!(is_supported_image_type("image/png"));
        assert!(is_supported_image_type("IMAGE/PNG"));
    }

    #[test]
    fn rejects_other_types() {
        assert!(!is_supported_image_type("image/gif"));
        assert!(!is_supported_image_type("image/webp"));
        assert!(!is_supported_image_type("application/pdf"));
        assert!(!is_supported_image_type(""));
    }
}
