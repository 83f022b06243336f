use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Itemized quote for one booking request. Never stored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub child_discount: f64,
    pub add_ons_total: f64,
    pub subtotal: f64,
    pub service_fee: f64,
    pub total: f64,
    pub per_person: f64,
    pub currency: String,
}

/// Body of `POST /api/safari/{slug}/quote`.
///
/// Counts are signed on the wire so that negative values surface as an
/// invalid selection instead of a decoding failure.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub adults: i64,
    #[serde(default)]
    pub children: i64,
    #[serde(default)]
    pub add_ons: Vec<String>,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub package_id: String,
    pub slug: String,
    pub adults: u32,
    pub children: u32,
    pub add_ons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    pub breakdown: PriceBreakdown,
    pub quoted_at: DateTime<Utc>,
}
