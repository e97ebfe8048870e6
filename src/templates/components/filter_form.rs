use crate::domain::ListingSearch;
use crate::geos;
use maud::{html, Markup};

/// Search + filter controls. Any input change re-requests the results
/// fragment; picking a state also swaps in that state's LGA options.
pub fn filter_form(search: &ListingSearch) -> Markup {
    let c = search.criteria();
    let min = c.min_bound().map(|v| v.to_string()).unwrap_or_default();
    let max = c.max_bound().map(|v| v.to_string()).unwrap_or_default();

    html! {
        form
            id="filters"
            class="filters"
            method="get"
            action="/search"
            hx-get="/search/results"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-trigger="input, change"
            hx-push-url="false"
        {
            input
                type="text"
                name="q"
                placeholder="Search by title"
                value=(c.query)
                autocomplete="off";

            select
                name="state"
                aria-label="State"
                hx-get="/search/local-govts"
                hx-target="#lga"
                hx-swap="innerHTML"
                hx-trigger="change"
            {
                option value="" selected[c.state.is_empty()] { "All states" }
                @for name in geos::state_names() {
                    option value=(name) selected[c.state == name] { (name) }
                }
            }

            select id="lga" name="lga" aria-label="Local Government Area" {
                (local_govt_options(search.available_local_govts(), &c.local_govt))
            }

            input type="number" name="min_price" min="0" step="any" placeholder="Min Price" value=(min);
            input type="number" name="max_price" min="0" step="any" placeholder="Max Price" value=(max);

            noscript { button type="submit" class="btn" { "Search" } }
        }
    }
}

pub fn local_govt_options(options: &[&str], selected: &str) -> Markup {
    html! {
        option value="" selected[selected.is_empty()] { "Local Government Area" }
        @for lga in options {
            option value=(lga) selected[selected == *lga] { (lga) }
        }
    }
}
