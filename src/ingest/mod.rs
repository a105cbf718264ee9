pub mod models;

use crate::db::connection::Store;
use crate::db::listings::upsert_listings;
use crate::domain::listing::Listing;
use crate::domain::slug;
use crate::errors::ServerError;
use models::RawListing;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub saved: usize,
    /// Records dropped during normalization (missing name/city/state).
    pub skipped: usize,
    /// Distinct identities that normalized to an already-taken slug.
    pub slug_collisions: usize,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Raw upstream record -> canonical listing. Returns `None` when the
/// identity fields are missing; callers count the skip instead of aborting
/// the batch. Missing optional fields stay absent, never zero/false.
pub fn normalize(raw: &RawListing) -> Option<Listing> {
    let name = non_empty(raw.name.as_deref())?.to_string();
    let location = raw.location.as_ref()?;
    let city = non_empty(location.city.as_deref())?.to_string();
    let state_abbr = non_empty(location.state_code.as_deref())?.to_uppercase();

    let address_line = non_empty(location.address_line.as_deref())
        .unwrap_or("")
        .to_string();
    let coordinate = location.coordinate.as_ref();

    let classification = raw.classification.as_ref();
    let category = classification
        .and_then(|c| non_empty(c.business_type.as_deref()))
        .unwrap_or("")
        .to_string();

    let mut specialties: Vec<String> = classification
        .and_then(|c| c.specialties.clone())
        .unwrap_or_default();

    let reputation = raw.reputation.as_ref();
    let attributes = raw.attributes.as_ref();

    if let Some(services) = attributes.and_then(|a| a.services.clone()) {
        specialties.extend(services);
    }

    let listing_slug = slug::listing_slug(&name, &city, &state_abbr);

    Some(Listing {
        external_id: non_empty(raw.place_id.as_deref()).map(str::to_string),
        name,
        city,
        state_abbr,
        address_line,
        latitude: coordinate.and_then(|c| c.lat),
        longitude: coordinate.and_then(|c| c.lon),
        slug: listing_slug,
        category,
        specialties,
        rating: reputation.and_then(|r| r.average_rating),
        review_count: reputation.and_then(|r| r.review_count),
        accepts_new_patients: attributes.and_then(|a| a.accepts_new_patients),
        emergency_services: attributes.and_then(|a| a.emergency_services),
        wheelchair_accessible: attributes.and_then(|a| a.wheelchair_accessible),
        languages: attributes.and_then(|a| a.languages.clone()).unwrap_or_default(),
        insurance_plans: attributes
            .and_then(|a| a.insurance_plans.clone())
            .unwrap_or_default(),
    })
}

pub fn import_records(store: &Store, raws: &[RawListing]) -> Result<ImportStats, ServerError> {
    let mut normalized = Vec::with_capacity(raws.len());
    let mut skipped = 0usize;

    for raw in raws {
        match normalize(raw) {
            Some(listing) => normalized.push(listing),
            None => {
                eprintln!("Skipping record: missing name/city/state");
                skipped += 1;
            }
        }
    }

    let (saved, slug_collisions) = upsert_listings(store, &normalized)?;

    Ok(ImportStats {
        saved,
        skipped,
        slug_collisions,
    })
}

/// Load a JSON snapshot (array of raw records) into the store.
pub fn import_file(store: &Store, path: &str) -> Result<ImportStats, ServerError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ServerError::BadRequest(format!("read {path}: {e}")))?;
    let raws: Vec<RawListing> = serde_json::from_str(&text)
        .map_err(|e| ServerError::BadRequest(format!("parse {path}: {e}")))?;

    import_records(store, &raws)
}
