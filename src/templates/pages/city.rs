// templates/pages/city.rs

use crate::domain::ranking::{RankedTop, TOP_LIST_THRESHOLD};
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

/// Ranked city page. The "Top 10" framing is only honest when enough
/// verified listings back it, so the heading switches below the threshold.
pub fn city_page(city: &str, state_abbr: &str, top: &RankedTop) -> Markup {
    let heading = if top.eligible_count >= TOP_LIST_THRESHOLD {
        format!("Top 10 Dentists in {city}, {state_abbr}")
    } else {
        format!("Dentists in {city}, {state_abbr}")
    };

    desktop_layout(
        &heading,
        html! {
            h1 { (heading) }
            p class="muted" {
                "Ranked from " (top.eligible_count) " verified listings"
            }

            @if top.ranked.is_empty() {
                p { "No rated listings here yet." }
            }

            @for (idx, listing) in top.ranked.iter().enumerate() {
                (card(&format!("{}. {}", idx + 1, listing.name), html! {
                    p { (listing.address_line) }
                    @if let (Some(rating), Some(reviews)) = (listing.rating, listing.review_count) {
                        p class="muted" {
                            (format!("{rating:.1}")) " ★ (" (reviews) " reviews)"
                        }
                    }
                }))
            }
        },
    )
}
