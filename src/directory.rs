// src/directory.rs
//
// The call surface pages and API handlers go through. Each function pulls
// a snapshot from the store adapter, then hands it to the pure domain
// logic; nothing here holds cross-request state.

use crate::db::connection::Store;
use crate::db::listings;
use crate::domain::aggregate::{self, LocalityAggregate};
use crate::domain::filter::{self, CategoryTable, QuerySpec};
use crate::domain::listing::Listing;
use crate::domain::ranking::{self, RankedTop, RankingParams};
use crate::errors::ServerError;

// The slug codec is part of this surface too.
pub use crate::domain::slug::{decode_locality_slug, locality_slug};

/// All listings in a city/region, unordered (slug order for determinism).
pub fn get_listings_by_locality(
    store: &Store,
    city: &str,
    state_abbr: &str,
) -> Result<Vec<Listing>, ServerError> {
    listings::listings_by_locality(store, city, state_abbr)
}

/// Ranked top-N for a locality. A locality with no listings is an empty
/// success (`eligible_count` 0) — "no listings yet" is a displayable
/// state, not an error.
pub fn get_ranked_top(
    store: &Store,
    city: &str,
    state_abbr: &str,
    n: usize,
    params: &RankingParams,
) -> Result<RankedTop, ServerError> {
    let set = listings::listings_by_locality(store, city, state_abbr)?;
    Ok(ranking::rank_locality(&set, params, n))
}

/// Full matching set for a query spec; callers paginate separately.
pub fn search_listings(
    store: &Store,
    spec: &QuerySpec,
    categories: &CategoryTable,
) -> Result<Vec<Listing>, ServerError> {
    let all = listings::all_listings(store)?;
    Ok(filter::search(&all, spec, categories))
}

pub fn get_locality_aggregate(
    store: &Store,
    city: &str,
    state_abbr: &str,
) -> Result<LocalityAggregate, ServerError> {
    let set = listings::listings_by_locality(store, city, state_abbr)?;
    Ok(aggregate::locality_aggregate(&set))
}
