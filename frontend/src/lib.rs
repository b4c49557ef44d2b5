//! PxlProof - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for publishing images to a blockchain-backed
//! record store and verifying them against it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Home                                                        │
//! │  ├── Hero (title, description)                              │
//! │  ├── FeatureCards (publish / verify / check)                │
//! │  └── UploadSection (preview, submit, status)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PopupNotice (result notifications)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Mode, ApiResponse, Popup, etc.)
//! - [`outcome`] - Pure response-interpretation policy
//! - [`components`] - UI components (Header, UploadSection, etc.)
//! - [`services`] - Backend communication (api, wallet)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod outcome;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Operations
    Mode,
    // API
    ApiResponse,
    // Popups
    Popup, PopupKind,
    // Wallet
    WalletAccount,
    // Errors
    AppError, AppResult,
};

// Outcome policy
pub use outcome::{interpret, Outcome};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PxlProof - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    // Page-level state, injected into the components that need it
    let (wallet_address, set_wallet_address) = create_signal(None::<String>);
    let (mode, set_mode) = create_signal(Mode::Publish);
    let (popup, set_popup) = create_signal(None::<Popup>);

    view! {
        <Header
            wallet_address=wallet_address
            set_wallet_address=set_wallet_address
        />

        <div class="container">
            <Hero/>
            <FeatureCards mode=mode set_mode=set_mode/>
            <UploadSection
                mode=mode
                wallet_address=wallet_address
                set_popup=set_popup
            />
        </div>

        <PopupNotice popup=popup set_popup=set_popup/>

        <Footer/>
    }
}
