use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AccommodationType {
    Lodge,
    TentedCamp,
    Hotel,
    Boutique,
    Villa,
    Airbnb,
}

/// Lodging for a single itinerary day. Copied by value into every day that
/// stays there, so two days at the same camp hold independent values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccommodationType,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub description: String,
    pub amenities: Vec<String>,
    pub price_per_night: f64,
}

impl Accommodation {
    /// Day rooms and other rooms that cost nothing are priced at zero.
    pub fn is_complimentary(&self) -> bool {
        self.price_per_night == 0.0
    }
}
