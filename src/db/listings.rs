use crate::db::connection::Store;
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

const SQL_LOCALITIES_BY_REGION: &str = include_str!("../../sql/localities_by_region.sql");

const LISTING_COLUMNS: &str = "
    slug,                   -- 0
    external_id,            -- 1
    name,                   -- 2
    city,                   -- 3
    state_abbr,             -- 4
    address_line,           -- 5
    latitude,               -- 6
    longitude,              -- 7
    category,               -- 8
    rating,                 -- 9
    review_count,           -- 10
    specialties,            -- 11
    languages,              -- 12
    insurance_plans,        -- 13
    accepts_new_patients,   -- 14
    emergency_services,     -- 15
    wheelchair_accessible   -- 16
";

/// Per-city roll-up for a state, computed live by the store (never read from
/// a stored aggregate).
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityRow {
    pub city: String,
    pub listing_count: i64,
    pub mean_rating: Option<f64>,
}

fn store_err(e: rusqlite::Error) -> ServerError {
    ServerError::StoreUnavailable(e.to_string())
}

/// List-valued columns are JSON text; a corrupt cell degrades to empty
/// rather than failing the whole read.
fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn listing_from_row(row: &Row) -> rusqlite::Result<Listing> {
    let specialties: String = row.get(11)?;
    let languages: String = row.get(12)?;
    let insurance_plans: String = row.get(13)?;

    Ok(Listing {
        slug: row.get(0)?,
        external_id: row.get(1)?,
        name: row.get(2)?,
        city: row.get(3)?,
        state_abbr: row.get(4)?,
        address_line: row.get(5)?,
        latitude: row.get(6)?,
        longitude: row.get(7)?,
        category: row.get(8)?,
        rating: row.get(9)?,
        review_count: row.get(10)?,
        specialties: decode_list(&specialties),
        languages: decode_list(&languages),
        insurance_plans: decode_list(&insurance_plans),
        accepts_new_patients: row.get(14)?,
        emergency_services: row.get(15)?,
        wheelchair_accessible: row.get(16)?,
    })
}

/// Full canonical listing set in slug order. Slug order is the "source
/// order" the filter engine preserves, so it must be stable across calls.
pub fn all_listings(store: &Store) -> Result<Vec<Listing>, ServerError> {
    store.with_conn(|conn| {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM listings ORDER BY slug");
        let mut stmt = conn.prepare(&sql).map_err(store_err)?;

        let rows = stmt.query_map([], listing_from_row).map_err(store_err)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(store_err)?);
        }
        Ok(out)
    })
}

/// All listings in one (city, state) pair, unordered semantically but
/// returned in slug order for determinism. City match is case-insensitive.
pub fn listings_by_locality(
    store: &Store,
    city: &str,
    state_abbr: &str,
) -> Result<Vec<Listing>, ServerError> {
    store.with_conn(|conn| {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM listings
             WHERE lower(city) = lower(?1) AND upper(state_abbr) = upper(?2)
             ORDER BY slug"
        );
        let mut stmt = conn.prepare(&sql).map_err(store_err)?;

        let rows = stmt
            .query_map(params![city, state_abbr], listing_from_row)
            .map_err(store_err)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(store_err)?);
        }
        Ok(out)
    })
}

pub fn localities_by_region(
    store: &Store,
    state_abbr: &str,
) -> Result<Vec<LocalityRow>, ServerError> {
    store.with_conn(|conn| {
        let mut stmt = conn.prepare(SQL_LOCALITIES_BY_REGION).map_err(store_err)?;

        let rows = stmt
            .query_map(params![state_abbr], |row| {
                Ok(LocalityRow {
                    city: row.get(0)?,
                    listing_count: row.get(1)?,
                    mean_rating: row.get(2)?,
                })
            })
            .map_err(store_err)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(store_err)?);
        }
        Ok(out)
    })
}

/// Transactional refresh of canonical listings, keyed on slug.
///
/// An existing row with the same slug but a *different* (name, city, state)
/// identity is a slug collision: two businesses normalizing to one slug.
/// Those are counted and skipped (first write wins) rather than silently
/// merged. Returns (saved, slug_collisions).
pub fn upsert_listings(
    store: &Store,
    listings: &[Listing],
) -> Result<(usize, usize), ServerError> {
    let now = Utc::now().naive_utc();

    store.with_conn(|conn| {
        let tx = conn.transaction().map_err(store_err)?;
        let mut saved = 0usize;
        let mut collisions = 0usize;

        for listing in listings {
            let existing: Option<(String, String, String)> = tx
                .query_row(
                    "SELECT name, city, state_abbr FROM listings WHERE slug = ?1",
                    params![listing.slug],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .optional()
                .map_err(store_err)?;

            if let Some((name, city, state)) = existing {
                let same_identity = name.eq_ignore_ascii_case(&listing.name)
                    && city.eq_ignore_ascii_case(&listing.city)
                    && state.eq_ignore_ascii_case(&listing.state_abbr);
                if !same_identity {
                    eprintln!(
                        "Slug collision on '{}': '{}' ({}, {}) vs existing '{}' ({}, {})",
                        listing.slug, listing.name, listing.city, listing.state_abbr,
                        name, city, state
                    );
                    collisions += 1;
                    continue;
                }
            }

            let specialties = serde_json::to_string(&listing.specialties)
                .map_err(|e| ServerError::StoreUnavailable(e.to_string()))?;
            let languages = serde_json::to_string(&listing.languages)
                .map_err(|e| ServerError::StoreUnavailable(e.to_string()))?;
            let insurance_plans = serde_json::to_string(&listing.insurance_plans)
                .map_err(|e| ServerError::StoreUnavailable(e.to_string()))?;

            tx.execute(
                r#"
                INSERT INTO listings (
                    slug, external_id,
                    name, city, state_abbr, address_line,
                    latitude, longitude,
                    category, rating, review_count,
                    specialties, languages, insurance_plans,
                    accepts_new_patients, emergency_services, wheelchair_accessible,
                    first_seen_at, last_seen_at
                ) VALUES (
                    ?1, ?2,
                    ?3, ?4, ?5, ?6,
                    ?7, ?8,
                    ?9, ?10, ?11,
                    ?12, ?13, ?14,
                    ?15, ?16, ?17,
                    ?18, ?19
                )
                ON CONFLICT(slug) DO UPDATE SET
                    external_id = excluded.external_id,
                    name = excluded.name,
                    city = excluded.city,
                    state_abbr = excluded.state_abbr,
                    address_line = excluded.address_line,
                    latitude = excluded.latitude,
                    longitude = excluded.longitude,
                    category = excluded.category,
                    rating = excluded.rating,
                    review_count = excluded.review_count,
                    specialties = excluded.specialties,
                    languages = excluded.languages,
                    insurance_plans = excluded.insurance_plans,
                    accepts_new_patients = excluded.accepts_new_patients,
                    emergency_services = excluded.emergency_services,
                    wheelchair_accessible = excluded.wheelchair_accessible,
                    last_seen_at = excluded.last_seen_at
                "#,
                params![
                    listing.slug,
                    listing.external_id,
                    listing.name,
                    listing.city,
                    listing.state_abbr,
                    listing.address_line,
                    listing.latitude,
                    listing.longitude,
                    listing.category,
                    listing.rating,
                    listing.review_count,
                    specialties,
                    languages,
                    insurance_plans,
                    listing.accepts_new_patients,
                    listing.emergency_services,
                    listing.wheelchair_accessible,
                    now,
                    now,
                ],
            )
            .map_err(store_err)?;

            saved += 1;
        }

        tx.commit().map_err(store_err)?;

        Ok((saved, collisions))
    })
}
