//! Roster render model
//!
//! The rendered roster is a pure function of the latest snapshot and the
//! session status at refresh time. Front ends draw it wholesale.

use super::Activity;

/// Everything a front end needs to draw the roster and the signup selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterView {
    pub cards: Vec<ActivityCard>,
    /// Signup selector options, one per activity, in server order
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Present only when the roster was built for an authenticated session
    pub remove: Option<RemoveControl>,
}

/// Removal control bound to one (activity, email) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveControl {
    pub activity: String,
    pub email: String,
}

impl RosterView {
    pub fn build(activities: &[Activity], authenticated: bool) -> Self {
        let cards = activities
            .iter()
            .map(|activity| ActivityCard {
                name: activity.name.clone(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        remove: authenticated.then(|| RemoveControl {
                            activity: activity.name.clone(),
                            email: email.clone(),
                        }),
                    })
                    .collect(),
            })
            .collect();

        let options = activities.iter().map(|a| a.name.clone()).collect();

        Self { cards, options }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|card| card.name == name)
    }

    /// Number of removal controls across all cards
    pub fn remove_controls(&self) -> usize {
        self.cards
            .iter()
            .flat_map(|card| &card.participants)
            .filter(|row| row.remove.is_some())
            .count()
    }
}

impl ActivityCard {
    pub fn emails(&self) -> Vec<&str> {
        self.participants.iter().map(|row| row.email.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{} description", name),
            schedule: "Fridays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_controls_only_when_authenticated() {
        let activities = vec![
            activity("Chess Club", 12, &["a@b.com", "c@d.com"]),
            activity("Art Club", 15, &["e@f.com"]),
        ];

        let anonymous = RosterView::build(&activities, false);
        assert_eq!(anonymous.remove_controls(), 0);

        let teacher = RosterView::build(&activities, true);
        assert_eq!(teacher.remove_controls(), 3);
        let row = &teacher.card("Chess Club").unwrap().participants[1];
        assert_eq!(
            row.remove,
            Some(RemoveControl {
                activity: "Chess Club".to_string(),
                email: "c@d.com".to_string(),
            })
        );
    }

    #[test]
    fn test_options_follow_server_order() {
        let activities = vec![
            activity("Zumba", 10, &[]),
            activity("Art Club", 15, &[]),
            activity("Chess Club", 12, &[]),
        ];

        let view = RosterView::build(&activities, false);
        assert_eq!(view.options, vec!["Zumba", "Art Club", "Chess Club"]);
    }

    #[test]
    fn test_overfull_activity_shows_negative_spots() {
        let view = RosterView::build(&[activity("Tiny", 1, &["a@b.com", "c@d.com", "e@f.com"])], false);
        assert_eq!(view.cards[0].spots_left, -2);
    }
}
