use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures a caller of the catalog or the pricing calculator has to handle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Safari package not found: {slug}")]
    NotFound { slug: String },

    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

impl BookingError {
    pub fn not_found(slug: impl Into<String>) -> Self {
        BookingError::NotFound { slug: slug.into() }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        BookingError::InvalidSelection {
            reason: reason.into(),
        }
    }
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::NotFound { .. } => StatusCode::NOT_FOUND,
            BookingError::InvalidSelection { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Reasons a catalog document is refused at load time.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Package '{package}' references unknown add-on '{add_on}'")]
    UnknownAddOn { package: String, add_on: String },

    #[error("Duplicate package slug '{0}'")]
    DuplicateSlug(String),

    #[error("Duplicate add-on id '{0}'")]
    DuplicateAddOn(String),

    #[error("Invalid catalog entry '{package}': {reason}")]
    Invalid { package: String, reason: String },

    #[error("A catalog has already been installed for this process")]
    AlreadyInstalled,
}

impl CatalogError {
    pub fn invalid(package: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Invalid {
            package: package.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
