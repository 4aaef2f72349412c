//! Activity Roster
//!
//! Fetches the catalog and redraws the whole roster from it. The snapshot is
//! read-only and replaced on every successful fetch; nothing is patched
//! locally.

mod view;

pub use view::{ActivityCard, ParticipantRow, RemoveControl, RosterView};

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ActivitiesClient;
use crate::session::SessionManager;
use crate::surface::Surface;

/// Placeholder shown when the catalog cannot be loaded
pub const ROSTER_UNAVAILABLE: &str = "Failed to load activities. Please try again later.";

/// A capacity-limited activity and its participants, as the server last reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative if the server snapshot is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

pub struct ActivityRoster {
    client: Rc<ActivitiesClient>,
    session: Rc<SessionManager>,
    surface: Rc<dyn Surface>,
    snapshot: RefCell<Vec<Activity>>,
}

impl ActivityRoster {
    pub fn new(
        client: Rc<ActivitiesClient>,
        session: Rc<SessionManager>,
        surface: Rc<dyn Surface>,
    ) -> Self {
        Self {
            client,
            session,
            surface,
            snapshot: RefCell::new(Vec::new()),
        }
    }

    /// Fetch the catalog and replace the rendered roster.
    ///
    /// On failure the roster is replaced by a placeholder, the selection
    /// options and the last good snapshot are kept. Returns whether the
    /// fetch succeeded.
    pub async fn refresh(&self) -> bool {
        match self.client.activities().await {
            Ok(activities) => {
                let view = RosterView::build(&activities, self.session.is_authenticated());
                tracing::debug!("Loaded {} activities", activities.len());
                *self.snapshot.borrow_mut() = activities;
                self.surface.paint_roster(&view);
                true
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.surface.paint_roster_failure(ROSTER_UNAVAILABLE);
                false
            }
        }
    }

    /// Activities from the last successful fetch
    pub fn snapshot(&self) -> Vec<Activity> {
        self.snapshot.borrow().clone()
    }
}
