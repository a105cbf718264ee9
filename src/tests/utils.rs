use crate::db::connection::{init_db, Store};
use crate::db::listings::upsert_listings;
use crate::domain::listing::Listing;
use crate::domain::slug;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh store in the temp dir using the production schema. The nanosecond
/// suffix keeps parallel tests off each other's files.
pub fn make_store(tag: &str) -> Store {
    let path = std::env::temp_dir().join(format!(
        "directory_test_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let store = Store::new(path);
    init_db(&store, "sql/schema.sql").expect("Failed to initialize test store");
    store
}

/// Bare canonical listing with no reputation or attributes.
pub fn listing(name: &str, city: &str, state_abbr: &str) -> Listing {
    Listing {
        external_id: None,
        name: name.to_string(),
        city: city.to_string(),
        state_abbr: state_abbr.to_string(),
        address_line: String::new(),
        latitude: None,
        longitude: None,
        slug: slug::listing_slug(name, city, state_abbr),
        category: "Dentist".to_string(),
        specialties: Vec::new(),
        rating: None,
        review_count: None,
        accepts_new_patients: None,
        emergency_services: None,
        wheelchair_accessible: None,
        languages: Vec::new(),
        insurance_plans: Vec::new(),
    }
}

pub fn rated(name: &str, city: &str, state_abbr: &str, rating: f64, reviews: i64) -> Listing {
    let mut l = listing(name, city, state_abbr);
    l.rating = Some(rating);
    l.review_count = Some(reviews);
    l
}

pub fn seed(store: &Store, listings: &[Listing]) {
    upsert_listings(store, listings).expect("Failed to seed listings");
}
