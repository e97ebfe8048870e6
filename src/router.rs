use crate::api::ApiError;
use crate::app::App;
use crate::auth::{SessionContext, SessionData};
use crate::domain::forms::{validate, LoginForm, NewPropertyForm, RegisterForm};
use crate::domain::{FilterCriteria, Listing, ListingSearch, RecordId};
use crate::errors::ServerError;
use crate::geos;
use crate::responses::{html_response, html_with_status, redirect, text_response, ResultResp};
use crate::templates::components::{local_govt_options, Notice};
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;
const FEATURED_LISTINGS: usize = 9;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let now = chrono::Utc::now().timestamp();
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let params = query_params(&req);

    let cookie_header = req
        .headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let mut session =
        SessionContext::from_cookie_header(&app.sessions, cookie_header.as_deref(), now);

    tracing::debug!(%method, %path, signed_in = session.is_signed_in(), "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app, &session, &params, now),
        ("GET", "/health") => text_response(200, "ok"),

        ("GET", "/search") => search(app, &session, &params, now, false),
        ("GET", "/search/results") => search(app, &session, &params, now, true),
        ("GET", "/search/local-govts") => {
            let state = params.get("state").map(String::as_str).unwrap_or("");
            html_response(local_govt_options(geos::local_govts_for(state), ""))
        }

        ("GET", "/login") => {
            let notice = notice_from_code(&params);
            html_response(pages::login_page(
                user_name(&session),
                notice.as_ref(),
                "",
                None,
            ))
        }
        ("POST", "/login") => {
            let fields = read_form(&mut req)?;
            login(app, &mut session, &fields)
        }

        ("GET", "/register") => html_response(pages::register_page(
            user_name(&session),
            None,
            &RegisterForm::default(),
            None,
        )),
        ("POST", "/register") => {
            let fields = read_form(&mut req)?;
            register(app, &session, &fields)
        }

        ("POST", "/logout") => {
            session.clear()?;
            redirect("/?notice=signed-out", session.set_cookie())
        }

        ("GET", "/properties/new") => {
            if !session.is_signed_in() {
                return redirect("/login", None);
            }
            html_response(pages::add_property_page(
                user_name(&session),
                None,
                &NewPropertyForm::default(),
                None,
            ))
        }
        ("POST", "/properties/new") => {
            let fields = read_form(&mut req)?;
            create_property(app, &mut session, &fields)
        }

        ("GET", p) if p.starts_with("/property/") => {
            let id = p.trim_start_matches("/property/");
            property(app, &session, id, now)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn user_name<'a>(session: &'a SessionContext<'_>) -> Option<&'a str> {
    session.get().map(|s| s.user.display_name())
}

fn home(
    app: &App,
    session: &SessionContext<'_>,
    params: &HashMap<String, String>,
    now: i64,
) -> ResultResp {
    let bearer = app.bearer(session.api_token());
    let fetched = app.listings.get_or_fetch(app.api.as_ref(), bearer, now);
    let (featured, notice): (Vec<Listing>, Option<Notice>) = match fetched {
        Ok(listings) => (
            listings.iter().take(FEATURED_LISTINGS).cloned().collect(),
            notice_from_code(params),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "home page listings unavailable");
            (Vec::new(), Some(fetch_notice(&err)))
        }
    };

    html_response(pages::home_page(
        user_name(session),
        notice.as_ref(),
        &featured,
    ))
}

fn search(
    app: &App,
    session: &SessionContext<'_>,
    params: &HashMap<String, String>,
    now: i64,
    fragment_only: bool,
) -> ResultResp {
    let bearer = app.bearer(session.api_token());
    let fetched = app.listings.get_or_fetch(app.api.as_ref(), bearer, now);
    let notice = fetched.as_ref().err().map(fetch_notice);

    let mut engine = ListingSearch::new();
    engine.finish_load(fetched);
    engine.apply(criteria_from_params(params));

    tracing::debug!(
        filtered = !engine.criteria().is_unfiltered(),
        visible = engine.visible_count(),
        total = engine.all_listings().len(),
        "search evaluated"
    );

    if fragment_only {
        // htmx swaps the fragment in place; surface a failed load inline.
        let markup = maud::html! {
            (crate::templates::notice_banner(notice.as_ref()))
            (pages::search_results(&engine))
        };
        return html_response(markup);
    }

    html_response(pages::search_page(
        user_name(session),
        notice.as_ref(),
        &engine,
    ))
}

fn property(app: &App, session: &SessionContext<'_>, id: &str, now: i64) -> ResultResp {
    if id.is_empty() || id.contains('/') {
        return Err(ServerError::NotFound);
    }

    let bearer = app.bearer(session.api_token());
    let id = RecordId(id.to_string());

    match app.listings.find(app.api.as_ref(), bearer, &id, now)? {
        Some(listing) => html_response(pages::property_page(user_name(session), &listing)),
        None => html_with_status(404, pages::property_not_found_page(user_name(session))),
    }
}

fn login(
    app: &App,
    session: &mut SessionContext<'_>,
    fields: &HashMap<String, String>,
) -> ResultResp {
    let form = LoginForm::from_fields(fields);

    if let Err(errors) = validate(&form) {
        return html_with_status(
            400,
            pages::login_page(None, None, &form.email, Some(&errors)),
        );
    }

    match app.api.login(&form) {
        Ok(resp) => {
            tracing::info!(email = %form.email, message = ?resp.message, "login succeeded");
            session.set(SessionData {
                user: resp.new_user,
                api_token: resp.token,
            })?;
            redirect("/?notice=signed-in", session.set_cookie())
        }
        Err(err) => {
            tracing::warn!(email = %form.email, error = %err, "login failed");
            let notice = Notice::error(err.user_message());
            html_with_status(
                failure_status(&err),
                pages::login_page(None, Some(&notice), &form.email, None),
            )
        }
    }
}

fn register(
    app: &App,
    session: &SessionContext<'_>,
    fields: &HashMap<String, String>,
) -> ResultResp {
    let form = RegisterForm::from_fields(fields);

    if let Err(errors) = validate(&form) {
        return html_with_status(
            400,
            pages::register_page(user_name(session), None, &form, Some(&errors)),
        );
    }

    match app.api.register(&form) {
        Ok(message) => {
            tracing::info!(email = %form.email, message = ?message, "registration accepted");
            redirect("/login?notice=registered", None)
        }
        Err(err) => {
            tracing::warn!(email = %form.email, error = %err, "registration failed");
            let notice = Notice::error(err.user_message());
            html_with_status(
                failure_status(&err),
                pages::register_page(user_name(session), Some(&notice), &form, None),
            )
        }
    }
}

fn create_property(
    app: &App,
    session: &mut SessionContext<'_>,
    fields: &HashMap<String, String>,
) -> ResultResp {
    let Some(token) = session.api_token().map(str::to_owned) else {
        return redirect("/login", None);
    };

    let form = NewPropertyForm::from_fields(fields);

    if let Err(errors) = validate(&form) {
        return html_with_status(
            400,
            pages::add_property_page(user_name(session), None, &form, Some(&errors)),
        );
    }

    match app.api.create_property(&token, &form) {
        Ok(message) => {
            tracing::info!(title = %form.title, message = ?message, "property submitted");
            app.listings.invalidate();
            redirect("/?notice=listed", None)
        }
        Err(err) if err.is_unauthorized() => {
            tracing::info!("property API rejected session token, signing out");
            session.clear()?;
            redirect("/login?notice=expired", session.set_cookie())
        }
        Err(err) => {
            tracing::warn!(title = %form.title, error = %err, "property submission failed");
            let notice = Notice::error(err.user_message());
            html_with_status(
                failure_status(&err),
                pages::add_property_page(user_name(session), Some(&notice), &form, None),
            )
        }
    }
}

fn fetch_notice(err: &ApiError) -> Notice {
    Notice::error(format!("Could not load listings. {}", err.user_message()))
}

/// Backend 4xx → the visitor's input was rejected; anything else → 502.
fn failure_status(err: &ApiError) -> u16 {
    match err {
        ApiError::Status { status, .. } if (400..500).contains(status) => *status,
        _ => 502,
    }
}

/// Confirmation banners after redirects. Only known codes render; the
/// query string never supplies notice text.
fn notice_from_code(params: &HashMap<String, String>) -> Option<Notice> {
    let text = match params.get("notice").map(String::as_str)? {
        "signed-in" => "Login successful. Welcome back!",
        "signed-out" => "You have been logged out.",
        "registered" => "Account created. Please log in.",
        "listed" => "Your property has been submitted.",
        "expired" => return Some(Notice::error("Your session has expired. Please log in again.")),
        _ => return None,
    };
    Some(Notice::success(text))
}

/// Unparseable, negative or empty price inputs count as "no bound".
pub fn criteria_from_params(params: &HashMap<String, String>) -> FilterCriteria {
    let text = |key: &str| params.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
    let price = |key: &str| {
        params
            .get(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0)
    };

    FilterCriteria {
        query: text("q"),
        state: text("state"),
        local_govt: text("lga"),
        min_price: price("min_price"),
        max_price: price("max_price"),
    }
}

fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
