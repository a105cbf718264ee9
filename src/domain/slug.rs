// src/domain/slug.rs

use crate::errors::ServerError;

/// Normalize one component: lower-case, collapse whitespace runs to single
/// hyphens, drop anything outside [a-z0-9-], squeeze repeated hyphens.
///
/// Known limitation: two distinct names that normalize to the same token
/// collide ("St. Paul" / "st paul"). Collisions are flagged by the store
/// adapter on import, not resolved here.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_whitespace() || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        }
        // everything else is dropped
    }
    out.trim_end_matches('-').to_string()
}

fn join_parts(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("-")
}

/// Listing slugs embed name + city + region. One-way: not decoded.
pub fn listing_slug(name: &str, city: &str, state_abbr: &str) -> String {
    join_parts(&[slugify(name), slugify(city), slugify(state_abbr)])
}

pub fn locality_slug(city: &str, state_abbr: &str) -> String {
    join_parts(&[slugify(city), slugify(state_abbr)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLocality {
    pub city: String,
    pub state_abbr: String,
}

/// Inverse of `locality_slug`. The final token is the region code
/// (upper-cased); the preceding tokens are re-capitalized into the city
/// name. The name component of a listing slug is not recoverable.
pub fn decode_locality_slug(slug: &str) -> Result<DecodedLocality, ServerError> {
    let malformed = || ServerError::InvalidSlug(slug.to_string());

    if slug
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    {
        return Err(malformed());
    }

    let tokens: Vec<&str> = slug.split('-').collect();
    if tokens.len() < 2 || tokens.iter().any(|t| t.is_empty()) {
        return Err(malformed());
    }

    let state_abbr = tokens[tokens.len() - 1].to_uppercase();
    let city = tokens[..tokens.len() - 1]
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(DecodedLocality { city, state_abbr })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
