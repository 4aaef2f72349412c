//! App wiring
//!
//! Builds the three components over the front end's transport, token store,
//! surface and timer, and runs the startup sequence.

use std::rc::Rc;

use crate::api::{ActivitiesClient, Transport};
use crate::config::ClientConfig;
use crate::dispatch::{ActionDispatcher, FeedbackBoard, Timer};
use crate::roster::ActivityRoster;
use crate::session::{SessionManager, TokenStore};
use crate::surface::Surface;

pub struct SignupApp {
    pub session: Rc<SessionManager>,
    pub roster: Rc<ActivityRoster>,
    pub dispatcher: ActionDispatcher,
}

impl SignupApp {
    pub fn new(
        config: &ClientConfig,
        transport: Rc<dyn Transport>,
        store: Box<dyn TokenStore>,
        surface: Rc<dyn Surface>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        let client = Rc::new(ActivitiesClient::new(transport, &config.api.base_url));
        let session = Rc::new(SessionManager::new(client.clone(), store, surface.clone()));
        let roster = Rc::new(ActivityRoster::new(
            client.clone(),
            session.clone(),
            surface.clone(),
        ));
        let feedback = FeedbackBoard::new(surface.clone(), timer);
        let dispatcher = ActionDispatcher::new(
            client,
            session.clone(),
            roster.clone(),
            surface,
            feedback,
            config.feedback.windows(),
        );

        Self {
            session,
            roster,
            dispatcher,
        }
    }

    /// Restore and validate the session, then load the roster with the
    /// now-known status
    pub async fn start(&self) {
        self.session.restore();
        self.session.validate().await;
        self.roster.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::{ActionOutcome, Feedback, SIGNUP_LOGIN_REQUIRED, UNREGISTER_LOGIN_REQUIRED};
    use crate::session::MemoryTokenStore;
    use crate::testing::{Harness, SurfaceEvent};

    const CATALOG: &str = r#"{
        "Chess Club": {"description": "Learn strategies", "schedule": "Fridays, 3:30 PM - 5:00 PM", "max_participants": 12, "participants": ["michael@mergington.edu", "daniel@mergington.edu"]},
        "Programming Class": {"description": "Learn programming", "schedule": "Tuesdays", "max_participants": 20, "participants": ["emma@mergington.edu"]}
    }"#;

    #[tokio::test]
    async fn test_start_with_valid_token_shows_teacher_controls() {
        let h = Harness::with_store(MemoryTokenStore::with_token("persisted"));
        h.transport.reply(200, r#"{"authenticated": true}"#);
        h.transport.reply(200, CATALOG);

        h.app.start().await;

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/auth/status");
        assert_eq!(sent[1].url, "/activities");

        // Auth repaint happens before the roster is drawn
        let events = h.surface.events();
        assert_eq!(events[0], SurfaceEvent::Auth(true));
        let roster = h.surface.last_roster().unwrap();
        assert_eq!(roster.remove_controls(), 3);
    }

    #[tokio::test]
    async fn test_start_with_rejected_token_renders_read_only() {
        let store = MemoryTokenStore::with_token("expired");
        let h = Harness::with_store(store.clone());
        h.transport.reply(401, r#"{"detail":"Invalid token"}"#);
        h.transport.reply(200, CATALOG);

        h.app.start().await;

        assert_eq!(store.peek(), None);
        assert_eq!(h.surface.last_auth(), Some(false));
        assert_eq!(h.surface.last_roster().unwrap().remove_controls(), 0);
    }

    #[tokio::test]
    async fn test_signup_scenario() {
        let h = Harness::new();
        h.transport.reply(200, CATALOG);
        h.app.start().await;

        h.transport.reply(200, r#"{"token":"teacher-token"}"#);
        h.app.dispatcher.login("teacher", "pw").await;

        h.transport.reply(200, r#"{"message":"Signed up a@b.com for Chess Club"}"#);
        h.transport.reply(
            200,
            r#"{
                "Chess Club": {"description": "Learn strategies", "schedule": "Fridays", "max_participants": 12, "participants": ["michael@mergington.edu", "daniel@mergington.edu", "a@b.com"]},
                "Programming Class": {"description": "Learn programming", "schedule": "Tuesdays", "max_participants": 20, "participants": ["emma@mergington.edu"]}
            }"#,
        );

        let outcome = h.app.dispatcher.signup("Chess Club", "a@b.com").await;
        assert_eq!(outcome, ActionOutcome::Completed);

        let sent = h.transport.requests();
        let signup = &sent[2];
        assert_eq!(signup.url, "/activities/Chess%20Club/signup?email=a%40b.com");
        assert_eq!(signup.authorization.as_deref(), Some("Bearer teacher-token"));
        assert_eq!(sent[3].url, "/activities");

        // Feedback, form reset, then the refreshed roster
        let events = h.surface.events();
        let tail = &events[events.len() - 3..];
        assert_eq!(
            tail[0],
            SurfaceEvent::Feedback(Some(Feedback::success("Signed up a@b.com for Chess Club")))
        );
        assert_eq!(tail[1], SurfaceEvent::ResetSignupForm);

        let roster = h.surface.last_roster().unwrap();
        let chess = roster.card("Chess Club").unwrap();
        assert_eq!(chess.emails().iter().filter(|e| **e == "a@b.com").count(), 1);
        assert_eq!(chess.spots_left, 9);
        assert_eq!(roster.options.len(), 2);
        assert_eq!(roster.remove_controls(), 4);
    }

    #[tokio::test]
    async fn test_unregister_while_logged_out_sends_nothing() {
        let h = Harness::new();
        h.transport.reply(200, CATALOG);
        h.app.start().await;
        let before = h.surface.last_roster();

        let outcome = h.app.dispatcher.unregister("Chess Club", "michael@mergington.edu").await;

        assert_eq!(outcome, ActionOutcome::Denied);
        assert_eq!(h.transport.requests().len(), 1);
        assert_eq!(h.surface.feedback().unwrap().text, UNREGISTER_LOGIN_REQUIRED);
        assert_eq!(h.surface.last_roster(), before);

        h.app.dispatcher.signup("Chess Club", "a@b.com").await;
        assert_eq!(h.surface.feedback().unwrap().text, SIGNUP_LOGIN_REQUIRED);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_feedback_expires() {
        let h = Harness::new();
        h.app.dispatcher.logout().await;
        h.timer.fire_all();
        assert_eq!(h.surface.feedback(), None);
        assert_eq!(h.app.dispatcher.feedback().current(), None);
    }
}
