use serde::{Deserialize, Serialize};

/// Package-level optional extra. Owned by the catalog and shared with every
/// package that offers it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}
