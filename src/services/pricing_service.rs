use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{BookingError, Result},
    models::{PriceBreakdown, Quote, QuoteRequest, SafariPackage},
};

/// How selected add-ons are charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnCharge {
    /// Each add-on price is multiplied by adults + children.
    PerTraveler,
    /// Each add-on is charged once for the whole booking.
    PerBooking,
}

impl FromStr for AddOnCharge {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "per-traveler" => Ok(AddOnCharge::PerTraveler),
            "per-booking" => Ok(AddOnCharge::PerBooking),
            other => Err(format!("unknown add-on charge '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fraction of a child's share of the base price taken off, 0.0..=1.0
    pub child_discount_rate: f64,
    /// Fraction of the subtotal charged as service fee
    pub service_fee_rate: f64,
    /// Floor for the service fee on any booking with a positive subtotal
    pub minimum_service_fee: f64,
    pub add_on_charge: AddOnCharge,
    /// Reject traveler counts outside the package's group size
    pub enforce_group_size: bool,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            child_discount_rate: 0.0,
            service_fee_rate: 0.0,
            minimum_service_fee: 0.0,
            add_on_charge: AddOnCharge::PerTraveler,
            enforce_group_size: true,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid value '{}' for {}", raw, key);
            default
        }),
        Err(_) => default,
    }
}

impl PricingPolicy {
    /// Create a policy from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            child_discount_rate: env_or("PRICING_CHILD_DISCOUNT_RATE", defaults.child_discount_rate),
            service_fee_rate: env_or("PRICING_SERVICE_FEE_RATE", defaults.service_fee_rate),
            minimum_service_fee: env_or("PRICING_MINIMUM_SERVICE_FEE", defaults.minimum_service_fee),
            add_on_charge: env_or("PRICING_ADD_ON_CHARGE", defaults.add_on_charge),
            enforce_group_size: env_or("PRICING_ENFORCE_GROUP_SIZE", defaults.enforce_group_size),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(0.0..=1.0).contains(&self.child_discount_rate) {
            return Err(format!(
                "child discount rate {} is outside 0..=1",
                self.child_discount_rate
            ));
        }
        if !self.service_fee_rate.is_finite() || self.service_fee_rate < 0.0 {
            return Err(format!(
                "service fee rate {} must be non-negative",
                self.service_fee_rate
            ));
        }
        if !self.minimum_service_fee.is_finite() || self.minimum_service_fee < 0.0 {
            return Err(format!(
                "minimum service fee {} must be non-negative",
                self.minimum_service_fee
            ));
        }
        Ok(())
    }
}

/// Adults and children on one booking, already checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerManifest {
    adults: u32,
    children: u32,
    travelers: u32,
}

impl TravelerManifest {
    pub fn new(adults: i64, children: i64) -> Result<Self> {
        if adults < 0 || children < 0 {
            return Err(BookingError::invalid(
                "traveler counts cannot be negative",
            ));
        }
        if adults < 1 {
            return Err(BookingError::invalid("at least one adult is required"));
        }
        let adults = u32::try_from(adults)
            .map_err(|_| BookingError::invalid("too many adults"))?;
        let children = u32::try_from(children)
            .map_err(|_| BookingError::invalid("too many children"))?;
        let travelers = adults
            .checked_add(children)
            .ok_or_else(|| BookingError::invalid("too many travelers"))?;

        Ok(Self {
            adults,
            children,
            travelers,
        })
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn travelers(&self) -> u32 {
        self.travelers
    }
}

/// Round to the currency minor unit (cents).
pub fn round_to_minor_unit(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Earliest departure allowed is `today`.
pub fn check_departure(departure: NaiveDate, today: NaiveDate) -> Result<()> {
    if departure < today {
        return Err(BookingError::invalid(format!(
            "departure date {} is in the past",
            departure
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct PricingService {
    pub policy: PricingPolicy,
}

impl PricingService {
    pub fn with_policy(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn calculate_base_price(package: &SafariPackage, travelers: &TravelerManifest) -> f64 {
        package.price_per_person * f64::from(travelers.travelers())
    }

    pub fn calculate_child_discount(
        &self,
        package: &SafariPackage,
        travelers: &TravelerManifest,
    ) -> f64 {
        package.price_per_person * f64::from(travelers.children()) * self.policy.child_discount_rate
    }

    /// Sum of the selected add-ons, charged per traveler or once per booking
    /// depending on the policy. Every id must be offered by the package.
    pub fn calculate_add_ons_total(
        &self,
        package: &SafariPackage,
        travelers: &TravelerManifest,
        selected: &[String],
    ) -> Result<f64> {
        let mut seen: Vec<&str> = Vec::with_capacity(selected.len());
        let mut sum = 0.0;

        for id in selected {
            if seen.contains(&id.as_str()) {
                return Err(BookingError::invalid(format!(
                    "add-on '{}' selected more than once",
                    id
                )));
            }
            let add_on = package.add_on(id).ok_or_else(|| {
                BookingError::invalid(format!(
                    "add-on '{}' is not offered with {}",
                    id, package.name
                ))
            })?;
            seen.push(id);
            sum += add_on.price;
        }

        Ok(match self.policy.add_on_charge {
            AddOnCharge::PerTraveler => sum * f64::from(travelers.travelers()),
            AddOnCharge::PerBooking => sum,
        })
    }

    pub fn calculate_service_fee(&self, subtotal: f64) -> f64 {
        if subtotal <= 0.0 {
            return 0.0;
        }
        let fee = subtotal * self.policy.service_fee_rate;
        fee.max(self.policy.minimum_service_fee)
    }

    /// Price a booking. Intermediate amounts are kept unrounded; only `total`
    /// and `per_person` are rounded to cents.
    pub fn quote(
        &self,
        package: &SafariPackage,
        travelers: &TravelerManifest,
        selected: &[String],
    ) -> Result<PriceBreakdown> {
        if self.policy.enforce_group_size && !package.group_size.contains(travelers.travelers()) {
            return Err(BookingError::invalid(format!(
                "{} travels in groups of {} to {}, got {}",
                package.name,
                package.group_size.min,
                package.group_size.max,
                travelers.travelers()
            )));
        }

        let base_price = Self::calculate_base_price(package, travelers);
        let child_discount = self.calculate_child_discount(package, travelers);
        let add_ons_total = self.calculate_add_ons_total(package, travelers, selected)?;
        let subtotal = base_price - child_discount + add_ons_total;
        let service_fee = self.calculate_service_fee(subtotal);
        let total = round_to_minor_unit(subtotal + service_fee);
        let per_person = round_to_minor_unit(total / f64::from(travelers.travelers()));

        Ok(PriceBreakdown {
            base_price,
            child_discount,
            add_ons_total,
            subtotal,
            service_fee,
            total,
            per_person,
            currency: package.currency.clone(),
        })
    }

    /// Validate a wire request and price it, stamping the quote with a fresh id.
    pub fn quote_request(
        &self,
        package: &SafariPackage,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> Result<Quote> {
        let travelers = TravelerManifest::new(request.adults, request.children)?;
        if let Some(departure) = request.departure_date {
            check_departure(departure, today)?;
        }
        let breakdown = self.quote(package, &travelers, &request.add_ons)?;

        Ok(Quote {
            id: Uuid::new_v4(),
            package_id: package.id.clone(),
            slug: package.slug.clone(),
            adults: travelers.adults(),
            children: travelers.children(),
            add_ons: request.add_ons.clone(),
            departure_date: request.departure_date,
            breakdown,
            quoted_at: Utc::now(),
        })
    }
}
