//! Wrapper for injected browser wallets (MetaMask and compatible extensions).

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult, WalletAccount};

/// Rust wrapper for the EIP-1193 provider injected at `window.ethereum`.
pub struct BrowserWallet;

impl BrowserWallet {
    /// Check whether a compatible extension is installed.
    pub fn is_available() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let has_provider = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false);

        if has_provider {
            log::info!("✅ Browser wallet detected");
        } else {
            log::warn!("⚠️  No browser wallet found");
        }

        has_provider
    }

    /// Connect the wallet and return the first authorized account.
    pub async fn connect() -> AppResult<WalletAccount> {
        if !Self::is_available() {
            return Err(AppError::Wallet(
                "No browser wallet found. Please install MetaMask or a compatible extension."
                    .to_string(),
            ));
        }

        log::info!("🔌 Connecting to wallet...");

        let accounts = Self::request_accounts().await?;
        let account = accounts
            .into_iter()
            .next()
            .map(|address| WalletAccount { address })
            .ok_or_else(|| AppError::Wallet("No account authorized".to_string()))?;

        log::info!("✅ Connected to wallet: {}", account.address);

        Ok(account)
    }

    /// Invoke `ethereum.request({ method: "eth_requestAccounts" })`.
    async fn request_accounts() -> AppResult<Vec<String>> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Wallet("no global window".to_string()))?;

        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        let request: Function = Reflect::get(&ethereum, &JsValue::from_str("request"))
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| AppError::Wallet("Provider has no request method".to_string()))?;

        let params = js_sys::Object::new();
        Reflect::set(
            &params,
            &JsValue::from_str("method"),
            &JsValue::from_str("eth_requestAccounts"),
        )
        .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        let promise: Promise = request
            .call1(&ethereum, &params)
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| AppError::Wallet("Provider did not return a promise".to_string()))?;

        let result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| AppError::Wallet(format!("Failed to parse accounts: {}", e)))
    }
}

/// Pull the `message` field out of a thrown JS value, with fallbacks.
fn js_error_message(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown wallet error".to_string())
}
