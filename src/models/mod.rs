pub mod accommodation;
pub mod activity;
pub mod add_on;
pub mod itinerary;
pub mod pricing;
pub mod safari_package;

pub use accommodation::{Accommodation, AccommodationType};
pub use activity::Activity;
pub use add_on::AddOn;
pub use itinerary::{ItineraryDay, Meal, TravelInfo, TravelMethod};
pub use pricing::{PriceBreakdown, Quote, QuoteRequest};
pub use safari_package::{Category, Difficulty, GroupSize, SafariPackage};
