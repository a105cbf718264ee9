use serde::{Deserialize, Serialize};

/// Canonical listing record. Everything past the store adapter speaks this
/// shape; absent upstream facts stay `None` rather than defaulting to
/// zero/false, because "no data" and "worst possible" are different things.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    // Identity
    pub external_id: Option<String>,
    pub name: String,
    pub city: String,
    pub state_abbr: String,
    pub address_line: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Derived from (name, city, state); unique within the store.
    pub slug: String,

    // Classification
    pub category: String,
    pub specialties: Vec<String>,

    // Reputation
    pub rating: Option<f64>,
    pub review_count: Option<i64>,

    // Attributes
    pub accepts_new_patients: Option<bool>,
    pub emergency_services: Option<bool>,
    pub wheelchair_accessible: Option<bool>,
    pub languages: Vec<String>,
    pub insurance_plans: Vec<String>,
}

impl Listing {
    pub fn locality(&self) -> Locality {
        Locality {
            city: self.city.clone(),
            state_abbr: self.state_abbr.clone(),
        }
    }

    /// Lower-cased free text a tag predicate may keyword-match against when
    /// the structured field it prefers is absent.
    pub fn attribute_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.category];
        parts.extend(self.specialties.iter().map(String::as_str));
        parts.extend(self.insurance_plans.iter().map(String::as_str));
        parts.extend(self.languages.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Grouping key for ranking and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Locality {
    pub city: String,
    pub state_abbr: String,
}
