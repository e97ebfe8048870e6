// src/app.rs
use crate::api::PropertyApi;
use crate::auth::SessionStore;
use crate::cache::ListingCache;
use crate::config::AppConfig;
use crate::db::Database;

/// Everything a request handler may touch, built once at startup and shared
/// by all worker threads.
pub struct App {
    pub config: AppConfig,
    pub api: Box<dyn PropertyApi>,
    pub listings: ListingCache,
    pub sessions: SessionStore,
}

impl App {
    pub fn new(config: AppConfig, db: Database, api: Box<dyn PropertyApi>) -> Self {
        let listings = ListingCache::new(config.listings_ttl_secs);
        let sessions = SessionStore::new(db, config.session_ttl_secs);
        Self {
            config,
            api,
            listings,
            sessions,
        }
    }

    /// Token for listing fetches: the visitor's own if signed in, else the
    /// configured service token.
    pub fn bearer<'a>(&'a self, session_token: Option<&'a str>) -> Option<&'a str> {
        session_token.or(self.config.api_token.as_deref())
    }
}
