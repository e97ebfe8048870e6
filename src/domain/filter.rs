// src/domain/filter.rs

use crate::domain::listing::Listing;

/// User-controlled filter inputs for the listing search.
///
/// A price bound of `0` means "no bound", not a literal ceiling of zero.
/// Use [`FilterCriteria::min_bound`] / [`FilterCriteria::max_bound`] when an
/// explicit optional is more convenient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub state: String,
    pub local_govt: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl FilterCriteria {
    pub fn min_bound(&self) -> Option<f64> {
        (self.min_price != 0.0).then_some(self.min_price)
    }

    pub fn max_bound(&self) -> Option<f64> {
        (self.max_price != 0.0).then_some(self.max_price)
    }

    /// True when no field narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// The full predicate: every condition must hold for the listing to be visible.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.matches_local_govt(listing)
            && self.matches_state(listing)
            && self.matches_price(listing)
    }

    fn matches_query(&self, listing: &Listing) -> bool {
        listing
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_local_govt(&self, listing: &Listing) -> bool {
        self.local_govt.is_empty() || listing.local_govt.contains(&self.local_govt)
    }

    fn matches_state(&self, listing: &Listing) -> bool {
        self.state.is_empty() || listing.state.contains(&self.state)
    }

    fn matches_price(&self, listing: &Listing) -> bool {
        let above_min = self.min_bound().map_or(true, |min| listing.price >= min);
        let below_max = self.max_bound().map_or(true, |max| listing.price <= max);
        above_min && below_max
    }
}

/// Stable filter: keeps the relative order of `listings`.
pub fn apply_filters(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}
