use crate::domain::Listing;
use crate::templates::components::format_naira;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        div class="listing-card" data-id=(listing.id.as_str()) {
            @if let Some(src) = listing.cover_image() {
                img src=(src) alt=(listing.title) class="cover";
            } @else {
                div class="cover placeholder" { "No photo" }
            }
            div class="listing-body" {
                h3 class="listing-title" { (listing.title) }
                @if !listing.address.is_empty() {
                    p class="listing-address" { (listing.address) }
                }
                @if !listing.state.is_empty() {
                    p class="listing-location" {
                        @if !listing.local_govt.is_empty() {
                            (listing.local_govt) ", "
                        }
                        (listing.state)
                    }
                }
                p class="listing-price" { (format_naira(listing.price)) "/year" }
                a class="btn" href=(format!("/property/{}", listing.id)) { "View Details" }
            }
        }
    }
}

pub fn listing_grid<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Markup {
    html! {
        div class="listing-grid" {
            @for listing in listings {
                (listing_card(listing))
            }
        }
    }
}
