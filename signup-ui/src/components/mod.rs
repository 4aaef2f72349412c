//! UI Components
//!
//! Leptos components for the activities page.

pub mod activity_card;
pub mod header;
pub mod loading;
pub mod login;
pub mod message;
pub mod signup_form;

pub use activity_card::{ActivityCard, ActivityList};
pub use header::Header;
pub use loading::Loading;
pub use login::LoginModal;
pub use message::Message;
pub use signup_form::SignupForm;
