use std::{collections::HashSet, sync::Arc, sync::OnceLock};

use regex::Regex;

use crate::{
    error::{CatalogError, CatalogResult},
    models::{AddOn, ItineraryDay, SafariPackage},
};

const MAX_RATING: f32 = 5.0;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"))
}

fn currency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency pattern"))
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

/// Checks the whole catalog after add-on references have been resolved.
pub fn validate(add_ons: &[Arc<AddOn>], packages: &[SafariPackage]) -> CatalogResult<()> {
    for add_on in add_ons {
        validate_add_on(add_on)?;
    }

    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();
    for package in packages {
        if !slugs.insert(package.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(package.slug.clone()));
        }
        if !ids.insert(package.id.as_str()) {
            return Err(CatalogError::invalid(&package.id, "package id is not unique"));
        }
        validate_package(package)?;
    }

    Ok(())
}

fn validate_add_on(add_on: &AddOn) -> CatalogResult<()> {
    if add_on.id.is_empty() {
        return Err(CatalogError::invalid(&add_on.name, "add-on id is empty"));
    }
    if !is_amount(add_on.price) {
        return Err(CatalogError::invalid(
            &add_on.id,
            format!("add-on price {} is not a non-negative amount", add_on.price),
        ));
    }
    Ok(())
}

pub fn validate_package(package: &SafariPackage) -> CatalogResult<()> {
    let invalid = |reason: String| CatalogError::invalid(&package.id, reason);

    if !is_valid_slug(&package.slug) {
        return Err(invalid(format!("slug '{}' is not URL-safe", package.slug)));
    }
    if !currency_pattern().is_match(&package.currency) {
        return Err(invalid(format!("unknown currency '{}'", package.currency)));
    }
    if !is_amount(package.price_per_person) || !is_amount(package.starting_price) {
        return Err(invalid("prices must be non-negative amounts".to_string()));
    }
    if package.group_size.min < 1 || package.group_size.min > package.group_size.max {
        return Err(invalid(format!(
            "group size {}..{} is not a valid range",
            package.group_size.min, package.group_size.max
        )));
    }
    if package.duration < 1 {
        return Err(invalid("duration must be at least one day".to_string()));
    }
    if package.itinerary.len() != package.duration as usize {
        return Err(invalid(format!(
            "itinerary has {} days but duration is {}",
            package.itinerary.len(),
            package.duration
        )));
    }

    for (index, day) in package.itinerary.iter().enumerate() {
        let expected = index as u32 + 1;
        if day.day != expected {
            return Err(invalid(format!(
                "expected day {} at position {}, found day {}",
                expected, expected, day.day
            )));
        }
        validate_day(day).map_err(invalid)?;
    }

    let mut offered = HashSet::new();
    for add_on in &package.optional_add_ons {
        if !offered.insert(add_on.id.as_str()) {
            return Err(invalid(format!("add-on '{}' is offered twice", add_on.id)));
        }
    }

    Ok(())
}

fn validate_day(day: &ItineraryDay) -> Result<(), String> {
    let mut meals = HashSet::new();
    for meal in &day.meals {
        if !meals.insert(meal) {
            return Err(format!("day {} lists {:?} twice", day.day, meal));
        }
    }

    let accommodation = &day.accommodation;
    if let Some(rating) = accommodation.rating {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(format!(
                "day {}: rating {} for '{}' is outside 0-5",
                day.day, rating, accommodation.name
            ));
        }
    }
    if !is_amount(accommodation.price_per_night) {
        return Err(format!(
            "day {}: '{}' has a negative nightly price",
            day.day, accommodation.name
        ));
    }

    for activity in &day.activities {
        if activity.included {
            continue;
        }
        match activity.price {
            Some(price) if is_amount(price) => {}
            Some(price) => {
                return Err(format!(
                    "day {}: activity '{}' has invalid price {}",
                    day.day, activity.name, price
                ))
            }
            None => {
                return Err(format!(
                    "day {}: optional activity '{}' has no price",
                    day.day, activity.name
                ))
            }
        }
    }

    Ok(())
}
