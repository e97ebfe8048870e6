// src/cache.rs
use crate::api::{ApiError, PropertyApi};
use crate::auth::token::hash_token;
use crate::domain::{Listing, RecordId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Snapshots are scoped to the bearer that fetched them; `None` is the
/// anonymous slot. Raw tokens are never kept, only their SHA-256.
type SlotKey = Option<[u8; 32]>;

struct Snapshot {
    fetched_at: i64,
    listings: Arc<Vec<Listing>>,
}

/// Shared, immutable listing snapshots with a staleness window.
///
/// A snapshot younger than `ttl_secs` is served as is; an older one is
/// refetched on the next read. Failed fetches are never cached, so the next
/// request retries. Results fetched with one bearer token are only served
/// back to requests carrying the same token.
pub struct ListingCache {
    ttl_secs: i64,
    slots: Mutex<HashMap<SlotKey, Snapshot>>,
}

impl ListingCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_fetch(
        &self,
        api: &dyn PropertyApi,
        bearer: Option<&str>,
        now: i64,
    ) -> Result<Arc<Vec<Listing>>, ApiError> {
        let key = bearer.map(hash_token);
        if let Some(fresh) = self.fresh(&key, now) {
            return Ok(fresh);
        }

        // Fetch outside the lock; concurrent misses may both fetch, last write wins.
        let listings = Arc::new(api.fetch_all_properties(bearer)?);

        let mut slots = self.slots.lock();
        slots.retain(|_, s| self.is_fresh(s, now));
        slots.insert(
            key,
            Snapshot {
                fetched_at: now,
                listings: Arc::clone(&listings),
            },
        );
        tracing::debug!(
            count = listings.len(),
            signed = bearer.is_some(),
            cached_slots = slots.len(),
            "listing snapshot refreshed"
        );

        Ok(listings)
    }

    /// Find one listing, refreshing the snapshot if it is stale.
    pub fn find(
        &self,
        api: &dyn PropertyApi,
        bearer: Option<&str>,
        id: &RecordId,
        now: i64,
    ) -> Result<Option<Listing>, ApiError> {
        let listings = self.get_or_fetch(api, bearer, now)?;
        Ok(listings.iter().find(|l| &l.id == id).cloned())
    }

    /// Drop every snapshot, whoever fetched it.
    pub fn invalidate(&self) {
        self.slots.lock().clear();
    }

    fn fresh(&self, key: &SlotKey, now: i64) -> Option<Arc<Vec<Listing>>> {
        let slots = self.slots.lock();
        slots
            .get(key)
            .filter(|s| self.is_fresh(s, now))
            .map(|s| Arc::clone(&s.listings))
    }

    fn is_fresh(&self, snapshot: &Snapshot, now: i64) -> bool {
        now - snapshot.fetched_at < self.ttl_secs
    }
}
