// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::{
    components::{listing_grid, Notice},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(user: Option<&str>, notice: Option<&Notice>, featured: &[Listing]) -> Markup {
    desktop_layout(
        "Home",
        user,
        notice,
        html! {
            section class="hero" {
                h1 { "Find Your Perfect Rental Home" }
                p { "Discover homes for rent across Rivers State and beyond." }
                a href="/search" class="btn" { "Get Started" }
            }

            main {
                form class="filters" method="get" action="/search" {
                    input type="text" name="q" placeholder="What are you looking for?";
                    input type="number" name="max_price" min="0" placeholder="Max Price";
                    button type="submit" class="btn" { "Search" }
                }

                h2 { "Available Houses" }
                @if featured.is_empty() {
                    p class="empty-state" { "No houses are listed right now. Check back soon." }
                } @else {
                    (listing_grid(featured))
                }
            }

            section class="promo" {
                h2 { "Easy Rentals, Hassle-Free Living" }
                p { "Our platform makes it easy to find and rent homes across the state." }
            }
        },
    )
}
