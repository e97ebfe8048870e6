use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 to `location`, optionally carrying a `Set-Cookie`.
pub fn redirect(location: &str, set_cookie: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(302)
        .header("Location", location);

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
