//! View State
//!
//! Render-ready snapshot of the activity list. Rebuilt from scratch on every
//! refresh, never patched.

use crate::intent::UserIntent;
use crate::models::{Activity, ActivityCollection};

pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const LOADING_NOTICE: &str = "Loading activities...";
pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet";

/// Element ids and class names the page markup and stylesheet rely on
pub mod dom {
    pub const ACTIVITIES_LIST_ID: &str = "activities-list";
    pub const ACTIVITY_SELECT_ID: &str = "activity";
    pub const SIGNUP_FORM_ID: &str = "signup-form";
    pub const EMAIL_INPUT_ID: &str = "email";
    pub const MESSAGE_ID: &str = "message";

    pub const ACTIVITY_CARD_CLASS: &str = "activity-card";
    pub const PARTICIPANT_NAME_CLASS: &str = "participant-name";
    pub const DELETE_PARTICIPANT_CLASS: &str = "delete-participant";
    pub const NO_PARTICIPANTS_CLASS: &str = "no-participants";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Before the first response arrives
    #[default]
    Loading,
    Ready { cards: Vec<ActivityCard> },
    Failed { notice: String },
}

impl ViewState {
    pub fn from_collection(collection: &ActivityCollection) -> Self {
        ViewState::Ready {
            cards: collection.iter().map(ActivityCard::from_activity).collect(),
        }
    }

    pub fn failed() -> Self {
        ViewState::Failed {
            notice: LOAD_FAILURE_NOTICE.to_string(),
        }
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ViewState::Ready { cards } => cards,
            _ => &[],
        }
    }

    /// Names offered in the signup selector. Empty unless the last load succeeded.
    pub fn selector_options(&self) -> Vec<String> {
        self.cards().iter().map(|card| card.name.clone()).collect()
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Vec<RosterEntry>,
}

/// What goes inside a card's participant list
#[derive(Debug, Clone, PartialEq)]
pub enum RosterView<'a> {
    Entries(&'a [RosterEntry]),
    /// Single `no-participants` row
    Placeholder { text: &'static str, class: &'static str },
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster: activity
                .participants
                .iter()
                .map(|email| RosterEntry::new(&activity.name, email))
                .collect(),
        }
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn roster_view(&self) -> RosterView<'_> {
        if self.roster.is_empty() {
            RosterView::Placeholder {
                text: NO_PARTICIPANTS_PLACEHOLDER,
                class: dom::NO_PARTICIPANTS_CLASS,
            }
        } else {
            RosterView::Entries(&self.roster)
        }
    }
}

/// One participant row. `email` is kept whole for the removal request.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub activity: String,
    pub email: String,
    pub display_name: String,
}

impl RosterEntry {
    pub fn new(activity: &str, email: &str) -> Self {
        Self {
            activity: activity.to_string(),
            email: email.to_string(),
            display_name: local_part(email).to_string(),
        }
    }

    pub fn removal_intent(&self) -> UserIntent {
        UserIntent::RequestRemoval {
            activity: self.activity.clone(),
            email: self.email.clone(),
        }
    }
}

/// Text before the first `@`, or the whole address if there is none
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club(participants: &[&str], max_participants: u32) -> Activity {
        Activity {
            name: "Chess Club".to_string(),
            description: "...".to_string(),
            schedule: "Mon 3pm".to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_activity_scenario() {
        let json = r#"{"Chess Club": {"description":"...","schedule":"Mon 3pm","max_participants":10,"participants":["a@x.com"]}}"#;
        let collection: ActivityCollection = serde_json::from_str(json).unwrap();
        let state = ViewState::from_collection(&collection);

        assert_eq!(state.cards().len(), 1);
        let card = &state.cards()[0];
        assert_eq!(card.name, "Chess Club");
        assert_eq!(card.availability_label(), "9 spots left");
        assert_eq!(card.roster.len(), 1);
        assert_eq!(card.roster[0].display_name, "a");
        assert_eq!(card.roster[0].email, "a@x.com");
        assert_eq!(state.selector_options(), vec!["Chess Club".to_string()]);
    }

    #[test]
    fn test_full_activity_keeps_removal_controls() {
        let collection: ActivityCollection = vec![chess_club(&["a@x.com", "b@x.com"], 2)].into_iter().collect();
        let state = ViewState::from_collection(&collection);
        let card = state.card("Chess Club").unwrap();

        assert_eq!(card.availability_label(), "0 spots left");
        let intents: Vec<UserIntent> = card.roster.iter().map(RosterEntry::removal_intent).collect();
        assert_eq!(
            intents,
            vec![
                UserIntent::RequestRemoval { activity: "Chess Club".into(), email: "a@x.com".into() },
                UserIntent::RequestRemoval { activity: "Chess Club".into(), email: "b@x.com".into() },
            ]
        );
    }

    #[test]
    fn test_empty_roster() {
        let collection: ActivityCollection = vec![chess_club(&[], 10)].into_iter().collect();
        let state = ViewState::from_collection(&collection);
        let card = &state.cards()[0];
        assert_eq!(card.spots_left, 10);
        assert_eq!(
            card.roster_view(),
            RosterView::Placeholder { text: "No participants yet", class: "no-participants" }
        );
    }

    #[test]
    fn test_roster_view_lists_entries_in_order() {
        let collection: ActivityCollection = vec![chess_club(&["b@x.com", "a@x.com"], 10)].into_iter().collect();
        let state = ViewState::from_collection(&collection);
        let card = &state.cards()[0];

        match card.roster_view() {
            RosterView::Entries(entries) => {
                let emails: Vec<&str> = entries.iter().map(|e| e.email.as_str()).collect();
                assert_eq!(emails, vec!["b@x.com", "a@x.com"]);
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_over_capacity_goes_negative() {
        let json = r#"{"Chess Club": {"description":"...","schedule":"Mon 3pm","max_participants":1,"participants":["a@x.com","b@x.com"]}}"#;
        let collection: ActivityCollection = serde_json::from_str(json).unwrap();
        let state = ViewState::from_collection(&collection);
        let card = &state.cards()[0];

        assert_eq!(card.spots_left, -1);
        assert_eq!(card.availability_label(), "-1 spots left");
        assert_eq!(card.roster.len(), 2);
    }

    #[test]
    fn test_dom_hooks() {
        assert_eq!(
            [dom::ACTIVITIES_LIST_ID, dom::ACTIVITY_SELECT_ID, dom::SIGNUP_FORM_ID, dom::EMAIL_INPUT_ID, dom::MESSAGE_ID],
            ["activities-list", "activity", "signup-form", "email", "message"]
        );
        assert_eq!(
            [dom::ACTIVITY_CARD_CLASS, dom::PARTICIPANT_NAME_CLASS, dom::DELETE_PARTICIPANT_CLASS, dom::NO_PARTICIPANTS_CLASS],
            ["activity-card", "participant-name", "delete-participant", "no-participants"]
        );
    }

    #[test]
    fn test_failed_state_has_no_options() {
        let state = ViewState::failed();
        assert!(state.selector_options().is_empty());
        assert_eq!(state, ViewState::Failed { notice: LOAD_FAILURE_NOTICE.to_string() });
        assert!(ViewState::Loading.selector_options().is_empty());
    }

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("michael@mergington.edu"), "michael");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
        assert_eq!(local_part("a@b@c"), "a");
        assert_eq!(local_part("@x.com"), "");
    }
}
