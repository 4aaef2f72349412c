//! UI State
//!
//! Reactive signals behind every piece of the page, and the core's display
//! surface implemented on top of them.

use activity_signup::{Feedback, RosterView, Surface, Timer};
use leptos::*;
use std::time::Duration;

/// What the activities list currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum RosterPane {
    Loading,
    Ready(RosterView),
    Failed(String),
}

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct UiState {
    /// Login vs. logout controls and the user icon
    pub authenticated: RwSignal<bool>,
    /// Activities list
    pub roster: RwSignal<RosterPane>,
    /// Signup selector options; untouched when a refresh fails
    pub activity_options: RwSignal<Vec<String>>,
    /// The single feedback line
    pub feedback: RwSignal<Option<Feedback>>,
    pub login_open: RwSignal<bool>,
    pub login_username: RwSignal<String>,
    pub login_password: RwSignal<String>,
    pub signup_email: RwSignal<String>,
    pub signup_activity: RwSignal<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            authenticated: create_rw_signal(false),
            roster: create_rw_signal(RosterPane::Loading),
            activity_options: create_rw_signal(Vec::new()),
            feedback: create_rw_signal(None),
            login_open: create_rw_signal(false),
            login_username: create_rw_signal(String::new()),
            login_password: create_rw_signal(String::new()),
            signup_email: create_rw_signal(String::new()),
            signup_activity: create_rw_signal(String::new()),
        }
    }
}

impl Surface for UiState {
    fn paint_auth(&self, authenticated: bool) {
        self.authenticated.set(authenticated);
    }

    fn paint_roster(&self, roster: &RosterView) {
        self.activity_options.set(roster.options.clone());
        self.roster.set(RosterPane::Ready(roster.clone()));
    }

    fn paint_roster_failure(&self, message: &str) {
        self.roster.set(RosterPane::Failed(message.to_string()));
    }

    fn paint_feedback(&self, feedback: Option<&Feedback>) {
        self.feedback.set(feedback.cloned());
    }

    fn reset_signup_form(&self) {
        self.signup_email.set(String::new());
        self.signup_activity.set(String::new());
    }

    fn close_login_form(&self) {
        self.login_open.set(false);
        self.login_username.set(String::new());
        self.login_password.set(String::new());
    }
}

/// Feedback expiry on the browser event loop
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
