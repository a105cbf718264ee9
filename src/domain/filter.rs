// src/domain/filter.rs
//
// Pure predicate filtering over the listing set. No relevance scoring and
// no re-ordering: output keeps the source order, and every present field
// of the spec is ANDed with the rest. Ranking is a separate, opt-in step.

use crate::domain::listing::Listing;
use serde::Deserialize;

const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");

/// Structured search input. An empty spec matches everything.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    /// Free text, matched case-insensitively against name OR city OR
    /// category. Whitespace-only means absent.
    pub term: Option<String>,
    /// Exact state code, case-insensitive.
    pub region: Option<String>,
    /// Category slug looked up in the injected `CategoryTable`.
    pub category: Option<String>,
    /// Named attribute tags, all of which must hold.
    pub tags: Vec<String>,
    /// 1-based page index for the load-more pagination layer.
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub slug: String,
    pub search_terms: Vec<String>,
}

/// Static category -> raw-search-terms reference table. Injected rather
/// than hardcoded in the predicate so new categories stay additive.
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The table shipped with the binary (data/categories.json).
    pub fn bundled() -> Self {
        let categories: Vec<Category> =
            serde_json::from_str(CATEGORIES_JSON).expect("bundled categories.json parses");
        Self::new(categories)
    }

    pub fn search_terms(&self, slug: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.search_terms.as_slice())
    }
}

pub type TagPredicate = fn(&Listing) -> bool;

/// Attribute tags exposed to filtering, each a pure function of one
/// listing. Structured fields win; the free text in specialty/service
/// strings is the fallback when the field is absent.
pub const TAG_PREDICATES: &[(&str, TagPredicate)] = &[
    ("accepts-new-patients", tag_accepts_new_patients),
    ("emergency-available", tag_emergency_available),
    ("wheelchair-accessible", tag_wheelchair_accessible),
    ("accepts-insurance", tag_accepts_insurance),
    ("weekend-hours", tag_weekend_hours),
    ("sedation", tag_sedation),
];

pub fn tag_predicate(name: &str) -> Option<TagPredicate> {
    TAG_PREDICATES
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, pred)| *pred)
}

fn tag_accepts_new_patients(listing: &Listing) -> bool {
    match listing.accepts_new_patients {
        Some(flag) => flag,
        None => listing.attribute_text().contains("new patients"),
    }
}

fn tag_emergency_available(listing: &Listing) -> bool {
    match listing.emergency_services {
        Some(flag) => flag,
        None => {
            let text = listing.attribute_text();
            text.contains("emergency") || text.contains("24 hour")
        }
    }
}

fn tag_wheelchair_accessible(listing: &Listing) -> bool {
    match listing.wheelchair_accessible {
        Some(flag) => flag,
        None => listing.attribute_text().contains("wheelchair"),
    }
}

fn tag_accepts_insurance(listing: &Listing) -> bool {
    !listing.insurance_plans.is_empty() || listing.attribute_text().contains("insurance")
}

// No structured field for opening hours; keyword fallback only.
fn tag_weekend_hours(listing: &Listing) -> bool {
    let text = listing.attribute_text();
    text.contains("weekend") || text.contains("saturday") || text.contains("sunday")
}

fn tag_sedation(listing: &Listing) -> bool {
    listing.attribute_text().contains("sedation")
}

fn normalized_term(term: &Option<String>) -> Option<String> {
    term.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn classification_text(listing: &Listing) -> String {
    let mut parts: Vec<&str> = vec![&listing.category];
    parts.extend(listing.specialties.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Conjunction of whichever fields the spec carries. Pure function of one
/// listing plus the spec; no cross-listing state.
///
/// Unknown tags and unknown category slugs match nothing: the conjunction
/// stays monotone and the engine stays total over arbitrary input.
pub fn matches(listing: &Listing, spec: &QuerySpec, categories: &CategoryTable) -> bool {
    if let Some(term) = normalized_term(&spec.term) {
        let hit = contains_ci(&listing.name, &term)
            || contains_ci(&listing.city, &term)
            || contains_ci(&listing.category, &term);
        if !hit {
            return false;
        }
    }

    if let Some(region) = spec.region.as_deref() {
        if !listing.state_abbr.eq_ignore_ascii_case(region.trim()) {
            return false;
        }
    }

    if let Some(slug) = spec.category.as_deref() {
        let Some(terms) = categories.search_terms(slug) else {
            return false;
        };
        let text = classification_text(listing);
        if !terms.iter().any(|t| text.contains(&t.to_lowercase())) {
            return false;
        }
    }

    for tag in &spec.tags {
        match tag_predicate(tag) {
            Some(pred) if pred(listing) => {}
            _ => return false,
        }
    }

    true
}

/// Full matching subset in source order. Callers paginate separately; the
/// returned length is the total-match count for "N results" displays.
pub fn search(listings: &[Listing], spec: &QuerySpec, categories: &CategoryTable) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches(l, spec, categories))
        .cloned()
        .collect()
}
