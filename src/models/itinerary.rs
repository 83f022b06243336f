use serde::{Deserialize, Serialize};

use super::{accommodation::Accommodation, activity::Activity};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMethod {
    Drive,
    Flight,
    Transfer,
    Boat,
}

/// Transit into the day's location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TravelInfo {
    pub from: String,
    pub to: String,
    pub duration: String,
    pub method: TravelMethod,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based position within the package.
    pub day: u32,
    pub title: String,
    pub location: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub accommodation: Accommodation,
    pub meals: Vec<Meal>,
    pub activities: Vec<Activity>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_info: Option<TravelInfo>,
}

impl ItineraryDay {
    pub fn has_meal(&self, meal: Meal) -> bool {
        self.meals.contains(&meal)
    }

    pub fn included_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|activity| activity.included)
    }

    pub fn optional_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|activity| !activity.included)
    }
}
