// src/auth/session.rs
use crate::api::models::UserProfile;
use crate::auth::token::{hash_token, new_session_token};
use crate::db::{sessions as db_sessions, Database};
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "session";

/// What the app remembers about a signed-in visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub user: UserProfile,
    /// Bearer token issued by the property API at login.
    pub api_token: String,
}

#[derive(Clone)]
pub struct SessionStore {
    db: Database,
    ttl_secs: i64,
}

impl SessionStore {
    pub fn new(db: Database, ttl_secs: i64) -> Self {
        Self { db, ttl_secs }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Persist `data` and return the raw cookie token.
    pub fn create(&self, data: &SessionData, now: i64) -> Result<String, ServerError> {
        let token = new_session_token();
        let user_json = serde_json::to_string(&data.user)
            .map_err(|e| ServerError::DbError(format!("encode session user failed: {e}")))?;
        let expires_at = now + self.ttl_secs;

        self.db.with_conn(|conn| {
            db_sessions::insert_session(
                conn,
                &hash_token(&token),
                &user_json,
                &data.api_token,
                now,
                expires_at,
            )
        })?;

        Ok(token)
    }

    pub fn load(&self, token: &str, now: i64) -> Result<Option<SessionData>, ServerError> {
        let Some(row) = self
            .db
            .with_conn(|conn| db_sessions::find_live_session(conn, &hash_token(token), now))?
        else {
            return Ok(None);
        };

        match serde_json::from_str::<UserProfile>(&row.user_json) {
            Ok(user) => Ok(Some(SessionData {
                user,
                api_token: row.api_token,
            })),
            Err(e) => {
                tracing::warn!(error = %e, expires_at = row.expires_at, "unreadable session row, ignoring");
                Ok(None)
            }
        }
    }

    pub fn revoke(&self, token: &str, now: i64) -> Result<bool, ServerError> {
        self.db
            .with_conn(|conn| db_sessions::revoke_session(conn, &hash_token(token), now))
    }

    pub fn purge(&self, now: i64) -> Result<usize, ServerError> {
        self.db
            .with_conn(|conn| db_sessions::purge_sessions(conn, now))
    }
}

/// Per-request view of the visitor's session. Handlers receive this
/// explicitly; nothing reads session state from anywhere else.
pub struct SessionContext<'a> {
    store: &'a SessionStore,
    now: i64,
    token: Option<String>,
    data: Option<SessionData>,
    cookie: Option<String>,
}

impl<'a> SessionContext<'a> {
    /// Resolve the session named by the request's `Cookie` header. A lookup
    /// failure is logged and treated as signed out.
    pub fn from_cookie_header(store: &'a SessionStore, header: Option<&str>, now: i64) -> Self {
        let token = header.and_then(|h| cookie_value(h, SESSION_COOKIE));
        let data = match token.as_deref() {
            Some(t) => store.load(t, now).unwrap_or_else(|e| {
                tracing::error!(error = %e, "session lookup failed");
                None
            }),
            None => None,
        };

        Self {
            store,
            now,
            token,
            data,
            cookie: None,
        }
    }

    pub fn get(&self) -> Option<&SessionData> {
        self.data.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.data.is_some()
    }

    pub fn api_token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.api_token.as_str())
    }

    /// Start a new session, replacing any current one.
    pub fn set(&mut self, data: SessionData) -> Result<(), ServerError> {
        if let Some(old) = self.token.take() {
            self.store.revoke(&old, self.now)?;
        }

        let token = self.store.create(&data, self.now)?;
        self.cookie = Some(format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.store.ttl_secs()
        ));
        self.token = Some(token);
        self.data = Some(data);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), ServerError> {
        if let Some(token) = self.token.take() {
            self.store.revoke(&token, self.now)?;
        }
        self.data = None;
        self.cookie = Some(format!(
            "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
        ));
        Ok(())
    }

    /// `Set-Cookie` value to send back, if `set` or `clear` ran.
    pub fn set_cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

/// Value of cookie `name` in a `Cookie` request header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
