// src/db/sessions.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SessionRow {
    pub user_json: String,
    pub api_token: String,
    pub expires_at: i64,
}

pub fn insert_session(
    conn: &Connection,
    token_hash: &[u8],
    user_json: &str,
    api_token: &str,
    now: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into sessions (token_hash, user_json, api_token, created_at, expires_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![token_hash, user_json, api_token, now, expires_at],
    )?;
    Ok(())
}

pub fn find_live_session(
    conn: &Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<SessionRow>, ServerError> {
    let row = conn.query_row(
        r#"
        select user_json, api_token, expires_at
        from sessions
        where token_hash = ?
          and expires_at > ?
          and revoked_at is null
        "#,
        params![token_hash, now],
        |row| {
            Ok(SessionRow {
                user_json: row.get(0)?,
                api_token: row.get(1)?,
                expires_at: row.get(2)?,
            })
        },
    )
    .optional()?;

    Ok(row)
}

pub fn revoke_session(conn: &Connection, token_hash: &[u8], now: i64) -> Result<bool, ServerError> {
    let n = conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, token_hash],
    )?;
    Ok(n > 0)
}

/// Drop sessions that expired or were revoked before `now`.
pub fn purge_sessions(conn: &Connection, now: i64) -> Result<usize, ServerError> {
    let n = conn.execute(
        "delete from sessions where expires_at <= ? or revoked_at is not null",
        params![now],
    )?;
    Ok(n)
}
