// templates/pages/search.rs

use crate::domain::{ListingSearch, LoadState};
use crate::templates::{
    components::{filter_form, listing_grid, Notice},
    desktop_layout,
};
use maud::{html, Markup};

pub fn search_page(user: Option<&str>, notice: Option<&Notice>, search: &ListingSearch) -> Markup {
    desktop_layout(
        "Search",
        user,
        notice,
        html! {
            main {
                h1 { "Find Your Perfect Rental" }
                (filter_form(search))
                div id="results" {
                    (search_results(search))
                }
            }
        },
    )
}

/// The part of the page that changes as filters change.
pub fn search_results(search: &ListingSearch) -> Markup {
    html! {
        @match search.load_state() {
            LoadState::Loading => p class="loading" { "Loading listings…" },
            _ => {
                p class="result-count" {
                    (search.visible_count()) " of " (search.all_listings().len()) " properties"
                }
                (listing_grid(search.visible()))
                @if search.is_empty_result() {
                    p class="empty-state" { "No properties found. Try adjusting your filters." }
                }
            }
        }
    }
}
