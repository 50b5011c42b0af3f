//! What the window shows, derived from the latest `GET /activities` answer.
//!
//! Nothing here is cached between loads: every successful load builds a new
//! `ListArea` and a new option list from scratch.

use crate::models::activity::{Activity, ActivityCollection};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub unregister_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsSection {
    Empty,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub participants: ParticipantsSection,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantsSection::Empty
        } else {
            ParticipantsSection::Rows(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        unregister_label: format!("Unregister {}", email),
                    })
                    .collect(),
            )
        };

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Contents of the `activities-list` area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListArea {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    Failed,
}

impl ListArea {
    pub fn from_collection(collection: &ActivityCollection) -> Self {
        ListArea::Cards(collection.iter().map(ActivityCard::from_activity).collect())
    }
}

/// The `activity` select control. `selected == None` is the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivitySelect {
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl ActivitySelect {
    /// Rebuilds the option list. A selection that still exists survives.
    pub fn replace_options(&mut self, collection: &ActivityCollection) {
        self.options = collection.iter().map(|a| a.name.clone()).collect();
        if let Some(selected) = &self.selected {
            if !self.options.contains(selected) {
                self.selected = None;
            }
        }
    }

    pub fn selected_text(&self) -> &str {
        self.selected.as_deref().unwrap_or(SELECT_PLACEHOLDER)
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}
