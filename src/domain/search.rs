// src/domain/search.rs

use crate::domain::filter::{apply_filters, FilterCriteria};
use crate::domain::listing::Listing;
use crate::geos;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// The fetch failed; the engine carries on with an empty listing set.
    LoadFailed(String),
}

/// Holds a listing snapshot plus the current criteria and keeps the
/// visible view in step with both. Every setter recomputes synchronously.
#[derive(Debug, Clone)]
pub struct ListingSearch {
    all: Arc<Vec<Listing>>,
    criteria: FilterCriteria,
    visible: Vec<Listing>,
    available_local_govts: &'static [&'static str],
    load_state: LoadState,
}

impl Default for ListingSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSearch {
    pub fn new() -> Self {
        Self {
            all: Arc::new(Vec::new()),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            available_local_govts: &[],
            load_state: LoadState::Loading,
        }
    }

    /// Resolve the initial fetch. On failure the listing set stays empty and
    /// the error text is returned so the caller can show a notice.
    pub fn finish_load<E: std::fmt::Display>(
        &mut self,
        result: Result<Arc<Vec<Listing>>, E>,
    ) -> Option<String> {
        match result {
            Ok(listings) => {
                self.load_state = LoadState::Loaded;
                self.set_listings(listings);
                None
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(error = %message, "listing fetch failed, showing empty set");
                self.load_state = LoadState::LoadFailed(message.clone());
                self.set_listings(Arc::new(Vec::new()));
                Some(message)
            }
        }
    }

    pub fn set_listings(&mut self, listings: Arc<Vec<Listing>>) {
        self.all = listings;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    /// Selecting a state always clears the chosen local government area.
    pub fn select_state(&mut self, state: impl Into<String>) {
        self.criteria.state = state.into();
        self.criteria.local_govt.clear();
        self.available_local_govts = geos::local_govts_for(&self.criteria.state);
        self.recompute();
    }

    /// Returns false (and clears the field) when `local_govt` is not one of
    /// the options for the current state.
    pub fn set_local_govt(&mut self, local_govt: impl Into<String>) -> bool {
        let local_govt = local_govt.into();
        let accepted = local_govt.is_empty()
            || self
                .available_local_govts
                .iter()
                .any(|option| *option == local_govt);

        self.criteria.local_govt = if accepted { local_govt } else { String::new() };
        self.recompute();
        accepted
    }

    pub fn set_min_price(&mut self, min_price: f64) {
        self.criteria.min_price = min_price;
        self.recompute();
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.criteria.max_price = max_price;
        self.recompute();
    }

    /// Apply a whole criteria value field by field, in form order.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.set_query(criteria.query);
        self.select_state(criteria.state);
        self.set_local_govt(criteria.local_govt);
        self.set_min_price(criteria.min_price);
        self.set_max_price(criteria.max_price);
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn available_local_govts(&self) -> &'static [&'static str] {
        self.available_local_govts
    }

    pub fn all_listings(&self) -> &[Listing] {
        &self.all
    }

    pub fn visible(&self) -> impl Iterator<Item = &Listing> + '_ {
        self.visible.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Only meaningful once loading has finished; while loading there is
    /// nothing to report yet.
    pub fn is_empty_result(&self) -> bool {
        self.load_state != LoadState::Loading && self.visible.is_empty()
    }

    fn recompute(&mut self) {
        self.visible = apply_filters(&self.all, &self.criteria);
    }
}
