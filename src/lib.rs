//! # Activity Signup
//!
//! Client core for the school activity signup service: bearer-token session
//! handling, the activity roster, and the teacher actions that mutate it.
//!
//! ## Modules
//!
//! - [`session`]: Token lifecycle and authenticated-UI gating
//! - [`roster`]: Catalog fetch and whole-roster rendering
//! - [`dispatch`]: Signup / unregister / login / logout handling and feedback
//! - [`api`]: Typed client for the activities service over a pluggable transport
//! - [`surface`]: The display seam front ends implement
//!
//! The core is single-threaded and framework-free. The browser front end
//! (`signup-ui`) and the `activity-signup` CLI both drive it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_signup::*;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! # struct Terminal;
//! # impl Surface for Terminal {
//! #     fn paint_auth(&self, _: bool) {}
//! #     fn paint_roster(&self, _: &RosterView) {}
//! #     fn paint_roster_failure(&self, _: &str) {}
//! #     fn paint_feedback(&self, _: Option<&Feedback>) {}
//! #     fn reset_signup_form(&self) {}
//! #     fn close_login_form(&self) {}
//! # }
//! # struct NoTimer;
//! # impl Timer for NoTimer {
//! #     fn schedule(&self, _: Duration, _: Box<dyn FnOnce()>) {}
//! # }
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = ClientConfig::default();
//!     config.api.base_url = "http://localhost:8000".to_string();
//!
//!     let app = SignupApp::new(
//!         &config,
//!         Rc::new(ReqwestTransport::new()?),
//!         Box::new(MemoryTokenStore::new()),
//!         Rc::new(Terminal),
//!         Rc::new(NoTimer),
//!     );
//!
//!     app.start().await;
//!     app.dispatcher.login("teacher", "secret").await;
//!     app.dispatcher.signup("Chess Club", "student@mergington.edu").await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod dispatch;
pub mod roster;
pub mod session;
pub mod surface;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use api::{
    ActivitiesClient, ApiError, ApiRequest, ApiResponse, Method, Transport, TransportError,
};

#[cfg(feature = "native")]
pub use api::ReqwestTransport;

pub use app::SignupApp;

pub use config::{ClientConfig, ConfigError, FeedbackConfig, LoggingConfig};

pub use dispatch::{
    ActionDispatcher, ActionOutcome, Feedback, FeedbackBoard, FeedbackKind, FeedbackWindows, Timer,
};

pub use roster::{Activity, ActivityCard, ActivityRoster, ParticipantRow, RemoveControl, RosterView};

pub use session::{LoginError, MemoryTokenStore, Session, SessionManager, StoreError, TokenStore};

#[cfg(feature = "native")]
pub use session::FileTokenStore;

pub use surface::Surface;
