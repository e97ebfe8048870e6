use crate::domain::Listing;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Wire shapes of the property API.
//
// POST /api/auth/login      {email, password}            -> {message, token, newUser}
// POST /api/auth/register   {fullName, email, phone, ...} -> {message}
// GET  /api/properties/all-properties                    -> [Listing] | {properties} | {data}
// POST /api/properties/create (multipart)                -> {message}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub password: &'a str,
}

/// The signed-in user as the backend describes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<crate::domain::RecordId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    #[serde(default, alias = "user")]
    pub new_user: UserProfile,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Records stay raw until `into_listings` so one bad record cannot sink the
/// whole response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListingsPayload {
    Bare(Vec<Value>),
    Properties { properties: Vec<Value> },
    Data { data: Vec<Value> },
}

impl ListingsPayload {
    /// Decode each record, skipping (and logging) the ones that don't fit.
    pub fn into_listings(self) -> Vec<Listing> {
        let records = match self {
            ListingsPayload::Bare(records)
            | ListingsPayload::Properties {
                properties: records,
            }
            | ListingsPayload::Data { data: records } => records,
        };

        let total = records.len();
        let listings: Vec<Listing> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let id = record
                    .get("_id")
                    .or_else(|| record.get("id"))
                    .map(Value::to_string)
                    .unwrap_or_default();
                match serde_json::from_value::<Listing>(record) {
                    Ok(listing) => Some(listing),
                    Err(e) => {
                        tracing::warn!(index, %id, error = %e, "skipping malformed listing");
                        None
                    }
                }
            })
            .collect();

        if listings.len() < total {
            tracing::warn!(
                kept = listings.len(),
                skipped = total - listings.len(),
                "some listings could not be decoded"
            );
        }
        listings
    }
}
