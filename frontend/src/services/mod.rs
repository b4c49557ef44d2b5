//! Backend and wallet services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - image upload to the PxlProof backend
//! - [`wallet`] - injected browser wallet integration (MetaMask, etc.)

pub mod api;
pub mod wallet;

pub use api::*;
pub use wallet::*;
