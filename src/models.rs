//! Frontend Models
//!
//! Data structures matching the activities API.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Activity record as the list endpoint returns it (the name is the map key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Activity with its name attached
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity. Negative when the server has over-filled the activity.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// All activities, in the order the server listed them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCollection(Vec<Activity>);

impl ActivityCollection {
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|activity| activity.name == name)
    }

    /// Insert, replacing an existing activity of the same name in place
    pub fn insert(&mut self, activity: Activity) {
        match self.0.iter_mut().find(|existing| existing.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.0.push(activity),
        }
    }
}

impl FromIterator<Activity> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut collection = ActivityCollection::default();
        for activity in iter {
            collection.insert(activity);
        }
        collection
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut collection = ActivityCollection(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    collection.insert(Activity::from_details(name, details));
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// 2xx body of signup/remove
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Non-2xx body of signup/remove
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
