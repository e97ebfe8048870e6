use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier as handed out by the property API. The backend is not
/// consistent about ids (numbers from some endpoints, object-id strings
/// from others), so both are normalised into a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Ok(RecordId(s)),
            Value::Number(n) => Ok(RecordId(n.to_string())),
            other => Err(de::Error::custom(format!("invalid id: {other}"))),
        }
    }
}

/// A rental property as returned by the listings endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub address: String,
    /// Naira per year. Kept exactly as sent; rounding happens only for display.
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "de_images")]
    pub images: Vec<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default, rename = "localGovt")]
    pub local_govt: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    /// Floor area in square feet.
    #[serde(default)]
    pub area: Option<u32>,
}

impl Listing {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Image at `slot`, tolerating listings with fewer images than the page has slots.
    pub fn image(&self, slot: usize) -> Option<&str> {
        self.images.get(slot).map(String::as_str)
    }
}

/// Prices arrive as integers, floats, or numeric strings depending on who
/// created the listing. Negative and non-finite values are rejected.
fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',').collect();
            cleaned.trim().parse::<f64>().ok()
        }
        _ => None,
    };

    parsed
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| de::Error::custom(format!("invalid price: {value}")))
}

fn de_images<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let images: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(images
        .unwrap_or_default()
        .into_iter()
        .filter(|url| !url.trim().is_empty())
        .collect())
}
