//! UI Components for the PxlProof application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`FeatureCards`] - Operation selector (publish, verify, check)
//! - [`UploadSection`] - Image selection, preview and submission
//! - [`PopupNotice`] - Non-blocking result notifications

mod features;
mod footer;
mod header;
mod hero;
mod popup;
mod upload;

pub use features::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use popup::*;
pub use upload::*;
