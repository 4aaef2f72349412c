//! State Management
//!
//! Page signals and the browser timer used for feedback expiry.

pub mod ui;

pub use ui::{GlooTimer, RosterPane, UiState};
