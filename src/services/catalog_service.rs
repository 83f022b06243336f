use std::{fs, path::Path, sync::Arc, sync::OnceLock};

use serde::Deserialize;

use crate::{
    error::{BookingError, CatalogError, CatalogResult, Result},
    models::{AddOn, Category, Difficulty, SafariPackage},
    services::catalog_validation,
};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

static INSTALLED: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    add_ons: Vec<AddOn>,
    packages: Vec<SafariPackage>,
}

/// Query parameters accepted by `GET /api/safari`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PackageFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub destination: Option<String>,
    pub featured: Option<bool>,
}

impl PackageFilter {
    pub fn matches(&self, package: &SafariPackage) -> bool {
        if let Some(category) = self.category {
            if package.category != category {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if package.difficulty != difficulty {
                return false;
            }
        }
        if let Some(destination) = &self.destination {
            if !package.visits(destination) {
                return false;
            }
        }
        match self.featured {
            Some(featured) => package.is_featured() == featured,
            None => true,
        }
    }
}

/// Read-only package and add-on catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    add_ons: Vec<Arc<AddOn>>,
    packages: Vec<SafariPackage>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> CatalogResult<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.add_ons, document.packages)
    }

    /// Resolves each package's add-on ids against `add_ons` and validates the
    /// result. Every package ends up holding handles to the same add-on values.
    pub fn new(add_ons: Vec<AddOn>, mut packages: Vec<SafariPackage>) -> CatalogResult<Self> {
        let mut shared: Vec<Arc<AddOn>> = Vec::with_capacity(add_ons.len());
        for add_on in add_ons {
            if shared.iter().any(|existing| existing.id == add_on.id) {
                return Err(CatalogError::DuplicateAddOn(add_on.id));
            }
            shared.push(Arc::new(add_on));
        }

        for package in packages.iter_mut() {
            let embedded: Vec<String> = package
                .optional_add_ons
                .iter()
                .map(|add_on| add_on.id.clone())
                .collect();
            let ids = match (package.add_on_ids.is_empty(), embedded.is_empty()) {
                (true, _) => embedded,
                (false, true) => package.add_on_ids.clone(),
                (false, false) if package.add_on_ids == embedded => embedded,
                (false, false) => {
                    return Err(CatalogError::invalid(
                        &package.id,
                        "addOnIds and optionalAddOns list different add-ons",
                    ))
                }
            };

            let mut resolved = Vec::with_capacity(ids.len());
            for id in &ids {
                let add_on = shared.iter().find(|a| &a.id == id).ok_or_else(|| {
                    CatalogError::UnknownAddOn {
                        package: package.id.clone(),
                        add_on: id.clone(),
                    }
                })?;
                // Objects carried inline must match the catalog entry they name
                if let Some(inline) = package.optional_add_ons.iter().find(|a| &a.id == id) {
                    if inline.as_ref() != add_on.as_ref() {
                        return Err(CatalogError::invalid(
                            &package.id,
                            format!("add-on '{}' differs from the catalog entry", id),
                        ));
                    }
                }
                resolved.push(Arc::clone(add_on));
            }

            package.add_on_ids = ids;
            package.optional_add_ons = resolved;
        }

        catalog_validation::validate(&shared, &packages)?;

        log::debug!(
            "Catalog loaded with {} packages and {} add-ons",
            packages.len(),
            shared.len()
        );

        Ok(Self {
            add_ons: shared,
            packages,
        })
    }

    pub fn packages(&self) -> &[SafariPackage] {
        &self.packages
    }

    pub fn add_ons(&self) -> &[Arc<AddOn>] {
        &self.add_ons
    }

    pub fn add_on(&self, id: &str) -> Option<&Arc<AddOn>> {
        self.add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// Exact, case-sensitive slug match. `None` is an ordinary outcome.
    pub fn get_package_by_slug(&self, slug: &str) -> Option<&SafariPackage> {
        self.packages.iter().find(|package| package.slug == slug)
    }

    pub fn find_package(&self, slug: &str) -> Result<&SafariPackage> {
        self.get_package_by_slug(slug)
            .ok_or_else(|| BookingError::not_found(slug))
    }

    pub fn featured_packages(&self) -> Vec<&SafariPackage> {
        self.packages.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn filter(&self, filter: &PackageFilter) -> Vec<&SafariPackage> {
        self.packages.iter().filter(|p| filter.matches(p)).collect()
    }
}

/// Sets the process-wide catalog. Only the first call succeeds, and only if
/// nothing has read the process-wide catalog yet.
pub fn install(catalog: Catalog) -> CatalogResult<&'static Catalog> {
    INSTALLED
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInstalled)?;
    Ok(global())
}

/// The installed catalog, or the embedded one if none was installed.
pub fn global() -> &'static Catalog {
    INSTALLED.get_or_init(|| {
        Catalog::embedded().unwrap_or_else(|err| {
            log::error!("Embedded catalog rejected: {}", err);
            Catalog::default()
        })
    })
}

pub fn get_package_by_slug(slug: &str) -> Option<&'static SafariPackage> {
    global().get_package_by_slug(slug)
}
