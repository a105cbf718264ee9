// src/domain/aggregate.rs

use crate::domain::listing::{Listing, Locality};
use serde::Serialize;
use std::collections::BTreeMap;

/// Fixed page size for the load-more pagination model.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalityAggregate {
    /// Every listing in the locality, rated or not.
    pub count: usize,
    /// Mean over present ratings only; `None` when nothing is rated.
    pub mean_rating: Option<f64>,
}

/// Summary for one locality's listings. Derived on every call from the
/// slice handed in — never cached, so it cannot drift from its source.
pub fn locality_aggregate(listings: &[Listing]) -> LocalityAggregate {
    let ratings: Vec<f64> = listings.iter().filter_map(|l| l.rating).collect();
    let mean_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    LocalityAggregate {
        count: listings.len(),
        mean_rating,
    }
}

/// Group an arbitrary listing set by locality. BTreeMap so iteration
/// order is deterministic for the state/city summary views.
pub fn aggregate_by_locality(listings: &[Listing]) -> BTreeMap<Locality, LocalityAggregate> {
    let mut groups: BTreeMap<Locality, Vec<&Listing>> = BTreeMap::new();
    for listing in listings {
        groups.entry(listing.locality()).or_default().push(listing);
    }

    groups
        .into_iter()
        .map(|(locality, members)| {
            let ratings: Vec<f64> = members.iter().filter_map(|l| l.rating).collect();
            let mean_rating = if ratings.is_empty() {
                None
            } else {
                Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
            };
            (
                locality,
                LocalityAggregate {
                    count: members.len(),
                    mean_rating,
                },
            )
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}

/// "Load more" pagination: page `k` returns the first `k * page_size`
/// items, so each successive page is a strict extension of the previous
/// one — the consumer re-renders a growing list in place and must never
/// see prior items re-ordered or dropped.
pub fn load_more<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let end = page.saturating_mul(page_size).min(items.len());

    Page {
        items: items[..end].to_vec(),
        total: items.len(),
        has_more: end < items.len(),
    }
}
