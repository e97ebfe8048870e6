// templates/pages/property.rs

use crate::domain::Listing;
use crate::templates::{components::format_naira, desktop_layout};
use maud::{html, Markup};

const GALLERY_SLOTS: usize = 4;

pub fn property_page(user: Option<&str>, listing: &Listing) -> Markup {
    desktop_layout(
        &listing.title,
        user,
        None,
        html! {
            main class="property" {
                div class="gallery" {
                    @for slot in 0..GALLERY_SLOTS {
                        @if let Some(src) = listing.image(slot) {
                            img src=(src) alt=(format!("{} photo {}", listing.title, slot + 1));
                        }
                    }
                }

                h1 { (listing.title) }
                p class="property-location" {
                    (listing.address)
                    @if !listing.local_govt.is_empty() { ", " (listing.local_govt) }
                    @if !listing.state.is_empty() { ", " (listing.state) }
                }
                @if let Some(description) = &listing.description {
                    p class="property-description" { (description) }
                }
                p class="listing-price" { (format_naira(listing.price)) " / year" }

                div class="property-facts" {
                    @if let Some(n) = listing.bedrooms {
                        div { strong { (n) } " Bedrooms" }
                    }
                    @if let Some(n) = listing.bathrooms {
                        div { strong { (n) } " Bathrooms" }
                    }
                    @if let Some(n) = listing.area {
                        div { strong { (n) " sq ft" } " Area" }
                    }
                }

                button type="button" class="btn" { "Contact Owner" }
            }
        },
    )
}

pub fn property_not_found_page(user: Option<&str>) -> Markup {
    desktop_layout(
        "Not found",
        user,
        None,
        html! {
            main {
                p class="empty-state" { "Property not found" }
                a href="/search" { "Back to search" }
            }
        },
    )
}
