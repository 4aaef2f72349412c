//! Action Dispatcher
//!
//! Handles the four user actions (signup, unregister, login, logout). Each
//! is one guarded request/response cycle that ends in a visible feedback
//! message; a successful roster mutation is followed by exactly one refresh,
//! issued after the mutation has resolved.

mod feedback;

pub use feedback::{Feedback, FeedbackBoard, FeedbackKind, Timer};

use std::rc::Rc;
use std::time::Duration;

use crate::api::{ActivitiesClient, ApiError};
use crate::roster::ActivityRoster;
use crate::session::{LoginError, SessionManager};
use crate::surface::Surface;

pub const LOGGED_IN: &str = "Successfully logged in!";
pub const LOGGED_OUT: &str = "Successfully logged out!";
pub const SIGNUP_LOGIN_REQUIRED: &str = "Please login as a teacher to register students.";
pub const UNREGISTER_LOGIN_REQUIRED: &str = "Please login as a teacher to unregister students.";
pub const ACTION_REJECTED: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// How an action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Server accepted the action
    Completed,
    /// Refused locally, no request sent
    Denied,
    /// Server answered with a non-2xx status
    Rejected,
    /// No usable response
    Failed,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}

/// How long feedback stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackWindows {
    /// Login and logout
    pub auth: Duration,
    /// Signup and unregister
    pub roster: Duration,
}

impl Default for FeedbackWindows {
    fn default() -> Self {
        Self {
            auth: Duration::from_secs(3),
            roster: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    fn login_required(&self) -> &'static str {
        match self {
            Mutation::Signup => SIGNUP_LOGIN_REQUIRED,
            Mutation::Unregister => UNREGISTER_LOGIN_REQUIRED,
        }
    }

    fn failed(&self) -> &'static str {
        match self {
            Mutation::Signup => SIGNUP_FAILED,
            Mutation::Unregister => UNREGISTER_FAILED,
        }
    }
}

pub struct ActionDispatcher {
    client: Rc<ActivitiesClient>,
    session: Rc<SessionManager>,
    roster: Rc<ActivityRoster>,
    surface: Rc<dyn Surface>,
    feedback: Rc<FeedbackBoard>,
    windows: FeedbackWindows,
}

impl ActionDispatcher {
    pub fn new(
        client: Rc<ActivitiesClient>,
        session: Rc<SessionManager>,
        roster: Rc<ActivityRoster>,
        surface: Rc<dyn Surface>,
        feedback: Rc<FeedbackBoard>,
        windows: FeedbackWindows,
    ) -> Self {
        Self {
            client,
            session,
            roster,
            surface,
            feedback,
            windows,
        }
    }

    pub fn feedback(&self) -> &Rc<FeedbackBoard> {
        &self.feedback
    }

    /// Register a student; on success clears the form and refreshes the roster
    pub async fn signup(&self, activity: &str, email: &str) -> ActionOutcome {
        self.mutate(Mutation::Signup, activity, email).await
    }

    /// Remove a student; on success refreshes the roster
    pub async fn unregister(&self, activity: &str, email: &str) -> ActionOutcome {
        self.mutate(Mutation::Unregister, activity, email).await
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> ActionOutcome {
        // Removal controls are never drawn while logged out, but a stale one
        // can still be clicked.
        if !self.session.is_authenticated() {
            self.feedback
                .show(Feedback::error(mutation.login_required()), self.windows.roster);
            return ActionOutcome::Denied;
        }

        let authorization = self.session.auth_header();
        let result = match mutation {
            Mutation::Signup => self.client.signup(activity, email, authorization).await,
            Mutation::Unregister => self.client.unregister(activity, email, authorization).await,
        };

        match result {
            Ok(message) => {
                tracing::info!("{:?} {} / {}: {}", mutation, activity, email, message);
                self.feedback.show(Feedback::success(message), self.windows.roster);
                if let Mutation::Signup = mutation {
                    self.surface.reset_signup_form();
                }
                self.roster.refresh().await;
                ActionOutcome::Completed
            }
            Err(e) => self.reject(e, ACTION_REJECTED, mutation.failed(), self.windows.roster),
        }
    }

    fn reject(
        &self,
        error: ApiError,
        fallback: &str,
        failed: &str,
        window: Duration,
    ) -> ActionOutcome {
        if error.is_rejection() {
            let text = error.detail().unwrap_or(fallback).to_string();
            self.feedback.show(Feedback::error(text), window);
            ActionOutcome::Rejected
        } else {
            tracing::error!("{}: {}", failed, error);
            self.feedback.show(Feedback::error(failed), window);
            ActionOutcome::Failed
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ActionOutcome {
        match self.session.login(username, password).await {
            Ok(()) => {
                self.surface.close_login_form();
                self.feedback.show(Feedback::success(LOGGED_IN), self.windows.auth);
                ActionOutcome::Completed
            }
            Err(e) => {
                let outcome = match e {
                    LoginError::Rejected(_) => ActionOutcome::Rejected,
                    LoginError::Unreachable(_) => ActionOutcome::Failed,
                };
                self.feedback.show(Feedback::error(e.to_string()), self.windows.auth);
                outcome
            }
        }
    }

    /// Always ends logged out
    pub async fn logout(&self) -> ActionOutcome {
        self.session.logout().await;
        self.feedback.show(Feedback::success(LOGGED_OUT), self.windows.auth);
        ActionOutcome::Completed
    }
}
