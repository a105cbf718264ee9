// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Find a Dentist",
        html! {
            h1 { "Find a Dentist Near You" }

            (card("Browse by city", html! {
                p { "City pages rank verified practices by rating and review volume." }
                p class="muted" { "Example: " a href="/city?slug=springfield-il" { "Springfield, IL" } }
            }))

            (card("Search", html! {
                p { "Filter the full directory by state, specialty, or attributes like "
                    code { "emergency-available" } " via " code { "/api/listings" } "." }
            }))
        },
    )
}
