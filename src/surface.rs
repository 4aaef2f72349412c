//! Display surface
//!
//! Everything the three components show goes through this trait. The
//! browser implements it with Leptos signals, the CLI prints to the terminal.

use crate::dispatch::Feedback;
use crate::roster::RosterView;

pub trait Surface {
    /// Show login vs. logout controls and toggle the authenticated indicator
    fn paint_auth(&self, authenticated: bool);

    /// Replace the whole roster and the activity selection options
    fn paint_roster(&self, roster: &RosterView);

    /// Replace the roster with a single failure placeholder.
    /// The activity selection options stay as they were.
    fn paint_roster_failure(&self, message: &str);

    /// Show a feedback message, or hide the current one with `None`
    fn paint_feedback(&self, feedback: Option<&Feedback>);

    /// Clear the signup form fields
    fn reset_signup_form(&self);

    /// Close the login form and clear its fields
    fn close_login_form(&self);
}
