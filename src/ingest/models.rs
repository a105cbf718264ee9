use serde::Deserialize;

// Raw snapshot record as the upstream feed ships it. Everything is
// optional and snake_cased; normalization decides what survives.
//
// record
//  ├── place_id
//  ├── name
//  ├── location
//  │    ├── address_line
//  │    ├── city
//  │    ├── state_code
//  │    ├── postal_code
//  │    └── coordinate
//  │         ├── lat
//  │         └── lon
//  ├── classification
//  │    ├── business_type
//  │    └── specialties
//  ├── reputation
//  │    ├── average_rating
//  │    └── review_count
//  └── attributes
//       ├── accepts_new_patients
//       ├── emergency_services
//       ├── wheelchair_accessible
//       ├── languages
//       ├── insurance_plans
//       └── services

#[derive(Debug, Deserialize)]
pub struct RawListing {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<RawLocation>,
    pub classification: Option<RawClassification>,
    pub reputation: Option<RawReputation>,
    pub attributes: Option<RawAttributes>,
}

#[derive(Debug, Deserialize)]
pub struct RawLocation {
    #[serde(rename = "address_line")]
    pub address_line: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "state_code")]
    pub state_code: Option<String>,
    #[serde(rename = "postal_code")]
    pub postal_code: Option<String>,
    pub coordinate: Option<RawCoordinate>,
}

#[derive(Debug, Deserialize)]
pub struct RawCoordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawClassification {
    #[serde(rename = "business_type")]
    pub business_type: Option<String>,
    pub specialties: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RawReputation {
    #[serde(rename = "average_rating")]
    pub average_rating: Option<f64>,
    #[serde(rename = "review_count")]
    pub review_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawAttributes {
    pub accepts_new_patients: Option<bool>,
    pub emergency_services: Option<bool>,
    pub wheelchair_accessible: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub insurance_plans: Option<Vec<String>>,
    // Free-form service strings; folded into specialties on normalization.
    pub services: Option<Vec<String>>,
}
