use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{activity::Activity, add_on::AddOn, itinerary::ItineraryDay};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Adventurous,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classic,
    Luxury,
    Adventure,
    Family,
    Honeymoon,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct GroupSize {
    pub min: u32,
    pub max: u32,
}

impl GroupSize {
    pub fn contains(&self, travelers: u32) -> bool {
        (self.min..=self.max).contains(&travelers)
    }
}

/// A bookable trip template. Built once when the catalog loads and never
/// mutated afterwards.
///
/// In a catalog document the offered add-ons are listed either by id under
/// `addOnIds` or as full objects under `optionalAddOns` (the served shape).
/// The loader resolves both into handles on the catalog's shared add-ons.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafariPackage {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub duration: u32,
    pub description: String,
    pub hero_image: String,
    pub gallery_images: Vec<String>,
    pub starting_price: f64,
    pub price_per_person: f64,
    pub currency: String,
    pub difficulty: Difficulty,
    pub group_size: GroupSize,
    pub itinerary: Vec<ItineraryDay>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    #[serde(default)]
    pub optional_add_ons: Vec<Arc<AddOn>>,
    #[serde(default, skip_serializing)]
    pub(crate) add_on_ids: Vec<String>,
    pub highlights: Vec<String>,
    pub best_time: String,
    pub category: Category,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl SafariPackage {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// The last day is the departure day, so a 7 day trip has 6 nights.
    pub fn nights(&self) -> u32 {
        self.duration.saturating_sub(1)
    }

    pub fn day(&self, day: u32) -> Option<&ItineraryDay> {
        self.itinerary.iter().find(|d| d.day == day)
    }

    pub fn add_on(&self, id: &str) -> Option<&Arc<AddOn>> {
        self.optional_add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// Sum of the nightly rates of every day's accommodation.
    pub fn accommodation_total(&self) -> f64 {
        self.itinerary
            .iter()
            .map(|day| day.accommodation.price_per_night)
            .sum()
    }

    /// Non-included activities across the whole trip, with their day number.
    pub fn optional_activities(&self) -> Vec<(u32, &Activity)> {
        self.itinerary
            .iter()
            .flat_map(|day| day.optional_activities().map(move |a| (day.day, a)))
            .collect()
    }

    pub fn visits(&self, destination: &str) -> bool {
        self.destinations.iter().any(|d| d == destination)
    }
}
