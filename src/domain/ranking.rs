// src/domain/ranking.rs
//
// Bayesian-smoothed ranking of listings within one locality. A raw 5.0
// average off two reviews should not outrank an established practice with
// hundreds of solid reviews, so each rating is pulled toward a prior mean
// in proportion to how few reviews back it:
//
//     score = (R * v + C * m) / (v + m)
//
// R = listing's average rating, v = its review count, m = how many reviews
// it takes before the raw average is trusted at face value, C = prior mean.

use crate::domain::listing::Listing;
use serde::Serialize;

/// Tuning inputs for the weighted rating. The right values are a product
/// decision, so both are explicit parameters rather than buried constants.
#[derive(Debug, Clone, Copy)]
pub struct RankingParams {
    /// The `m` in the formula: reviews needed before a raw average is
    /// trusted at face value.
    pub min_votes: f64,
    /// Prior mean used when a locality has too few rated listings to
    /// compute its own.
    pub global_prior: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            min_votes: 10.0,
            global_prior: 4.0,
        }
    }
}

/// How many eligible listings a locality needs before a "top 10" framing
/// is honest. Callers check `eligible_count` against this before claiming
/// one.
pub const TOP_LIST_THRESHOLD: usize = 10;

#[derive(Debug, Serialize)]
pub struct RankedTop {
    pub ranked: Vec<Listing>,
    /// Number of listings that participated in ranking, regardless of how
    /// many were requested.
    pub eligible_count: usize,
    /// The prior mean `C` actually used for scoring.
    pub mean_rating: f64,
}

/// A listing participates in ranking only when both rating and review
/// count are present (and the count non-negative). "Rating but no count"
/// is excluded outright — scoring it zero would misrepresent missing data
/// as the worst possible listing.
fn eligibility(listing: &Listing) -> Option<(f64, i64)> {
    match (listing.rating, listing.review_count) {
        (Some(rating), Some(votes)) if votes >= 0 => Some((rating, votes)),
        _ => None,
    }
}

pub fn weighted_rating(rating: f64, votes: f64, prior: f64, params: &RankingParams) -> f64 {
    (rating * votes + prior * params.min_votes) / (votes + params.min_votes)
}

/// Rank the given locality's listings, best first, returning at most `n`.
///
/// Total order: score desc, then review count desc (more reviews wins
/// ties), then slug asc — so the output is independent of input sequence.
/// An empty eligible set is an empty success, never an error.
pub fn rank_locality(listings: &[Listing], params: &RankingParams, n: usize) -> RankedTop {
    let eligible: Vec<(&Listing, f64, i64)> = listings
        .iter()
        .filter_map(|l| eligibility(l).map(|(r, v)| (l, r, v)))
        .collect();

    let prior = if eligible.len() >= 2 {
        eligible.iter().map(|(_, r, _)| r).sum::<f64>() / eligible.len() as f64
    } else {
        params.global_prior
    };

    let mut scored: Vec<(f64, i64, &Listing)> = eligible
        .iter()
        .map(|&(l, r, v)| (weighted_rating(r, v as f64, prior, params), v, l))
        .collect();

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.2.slug.cmp(&b.2.slug))
    });

    RankedTop {
        eligible_count: scored.len(),
        mean_rating: prior,
        ranked: scored.into_iter().take(n).map(|(_, _, l)| l.clone()).collect(),
    }
}
