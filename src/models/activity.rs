use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    /// Free text such as "45 mins" or "5-6 hours".
    pub duration: String,
    pub included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    /// What the traveler pays on top of the package price, if anything.
    pub fn extra_cost(&self) -> Option<f64> {
        if self.included {
            None
        } else {
            self.price
        }
    }
}
