// client.rs
use crate::api::models::{
    ListingsPayload, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use crate::api::ApiError;
use crate::domain::forms::{LoginForm, NewPropertyForm, RegisterForm};
use crate::domain::Listing;
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("sterling-spaces/", env!("CARGO_PKG_VERSION"));

/// The remote property service. Handlers only see this trait so tests can
/// swap in an in-memory fake.
pub trait PropertyApi: Send + Sync {
    fn fetch_all_properties(&self, bearer: Option<&str>) -> Result<Vec<Listing>, ApiError>;

    fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError>;

    /// Returns the backend's confirmation message, if any.
    fn register(&self, form: &RegisterForm) -> Result<Option<String>, ApiError>;

    fn create_property(
        &self,
        bearer: &str,
        form: &NewPropertyForm,
    ) -> Result<Option<String>, ApiError>;
}

pub struct HttpPropertyApi {
    client: Client,
    base: Url,
}

impl HttpPropertyApi {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("bad endpoint {path}: {e}")))
    }

    fn send(&self, name: &'static str, req: RequestBuilder) -> Result<Response, ApiError> {
        let start = Instant::now();
        let resp = req.send().map_err(|e| {
            tracing::error!(endpoint = name, error = %e, "property API request failed");
            ApiError::from(e)
        })?;

        let status = resp.status();
        tracing::debug!(
            endpoint = name,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "property API responded"
        );

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_default();

        tracing::warn!(endpoint = name, status = status.as_u16(), %message, "property API error");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PropertyApi for HttpPropertyApi {
    fn fetch_all_properties(&self, bearer: Option<&str>) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint("api/properties/all-properties")?;
        let mut req = self.client.get(url);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }

        let resp = self.send("all-properties", req)?;
        let payload: ListingsPayload = Self::read_json(resp)?;
        let listings = payload.into_listings();

        tracing::info!(count = listings.len(), "fetched listings");
        Ok(listings)
    }

    fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("api/auth/login")?;
        let req = self.client.post(url).json(&LoginRequest {
            email: &form.email,
            password: &form.password,
        });

        let resp = self.send("login", req)?;
        Self::read_json(resp)
    }

    fn register(&self, form: &RegisterForm) -> Result<Option<String>, ApiError> {
        let url = self.endpoint("api/auth/register")?;
        let req = self.client.post(url).json(&RegisterRequest {
            full_name: &form.full_name,
            email: &form.email,
            phone: &form.phone,
            address: &form.address,
            password: &form.password,
        });

        let resp = self.send("register", req)?;
        let body: MessageResponse = Self::read_json(resp).unwrap_or_default();
        Ok(body.message)
    }

    fn create_property(
        &self,
        bearer: &str,
        form: &NewPropertyForm,
    ) -> Result<Option<String>, ApiError> {
        let url = self.endpoint("api/properties/create")?;
        let req = self
            .client
            .post(url)
            .bearer_auth(bearer)
            .multipart(property_multipart(form));

        let resp = self.send("create-property", req)?;
        let body: MessageResponse = Self::read_json(resp).unwrap_or_default();
        Ok(body.message)
    }
}

/// Text parts in form order, then one `images` part per image.
pub fn property_parts(form: &NewPropertyForm) -> Vec<(&'static str, String)> {
    let num = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();

    let mut parts = vec![
        ("title", form.title.clone()),
        ("description", form.description.clone()),
        ("address", form.address.clone()),
        ("state", form.state.clone()),
        ("localGovt", form.local_govt.clone()),
        ("price", num(form.price)),
        ("bedrooms", num(form.bedrooms)),
        ("bathrooms", num(form.bathrooms)),
        ("area", num(form.area)),
    ];
    parts.extend(form.images.iter().map(|url| ("images", url.clone())));
    parts
}

fn property_multipart(form: &NewPropertyForm) -> multipart::Form {
    property_parts(form)
        .into_iter()
        .fold(multipart::Form::new(), |acc, (name, value)| acc.text(name, value))
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
