use crate::router::handle;
use crate::tests::utils::{
    count, get, header, make_app, post_form, read_body, sample_listings, session_cookie, FakeApi,
    GOOD_PASSWORD, USER_TOKEN,
};
use std::sync::atomic::Ordering;

#[test]
fn login_page_loads_successfully() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let resp = handle(get("/login", None), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert_eq!(count(&body, "form input[name=email]"), 1);
    assert_eq!(count(&body, "form input[name=password]"), 1);
}

#[test]
fn login_sets_session_cookie_and_redirects() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let form = format!("email=Ada%40Example.com&password={GOOD_PASSWORD}");
    let resp = handle(post_form("/login", &form, None), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/?notice=signed-in"));
    let set_cookie = header(&resp, "set-cookie").unwrap();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));

    // the cookie carries the session to later requests
    let cookie = session_cookie(&resp);
    let body = read_body(handle(get("/?notice=signed-in", Some(&cookie)), &app).unwrap());
    assert!(body.contains("Ada Obi"));
    assert!(body.contains("Logout"));
    assert!(body.contains("Login successful"));

    // and listing fetches use the visitor's own token
    assert_eq!(
        api.bearers.lock().last().cloned().flatten().as_deref(),
        Some(USER_TOKEN)
    );
}

#[test]
fn signed_in_results_are_not_served_to_anonymous_visitors() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let form = format!("email=ada%40example.com&password={GOOD_PASSWORD}");
    let login = handle(post_form("/login", &form, None), &app).unwrap();
    let cookie = session_cookie(&login);

    handle(get("/search", Some(&cookie)), &app).unwrap();
    let body = read_body(handle(get("/search", None), &app).unwrap());

    assert_eq!(api.fetch_count(), 2);
    assert_eq!(
        *api.bearers.lock(),
        vec![Some(USER_TOKEN.to_string()), None]
    );
    assert_eq!(count(&body, ".listing-card"), 3);

    // both snapshots stay cached for their own audience
    handle(get("/search", Some(&cookie)), &app).unwrap();
    handle(get("/search?q=beach", None), &app).unwrap();
    assert_eq!(api.fetch_count(), 2);
}

#[test]
fn rejected_login_shows_backend_message() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let resp = handle(
        post_form("/login", "email=ada%40example.com&password=wrong", None),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 400);
    assert!(header(&resp, "set-cookie").is_none());
    let body = read_body(resp);
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains("ada@example.com"));
}

#[test]
fn invalid_login_form_never_reaches_the_api() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let resp = handle(post_form("/login", "email=not-an-email&password=", None), &app).unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(api.logins.load(Ordering::SeqCst), 0);
    let body = read_body(resp);
    assert_eq!(count(&body, ".field-error"), 2);
}

#[test]
fn logout_clears_the_session() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let form = format!("email=ada%40example.com&password={GOOD_PASSWORD}");
    let login = handle(post_form("/login", &form, None), &app).unwrap();
    let cookie = session_cookie(&login);

    let resp = handle(post_form("/logout", "", Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/?notice=signed-out"));
    assert!(header(&resp, "set-cookie").unwrap().contains("Max-Age=0"));

    // the old token is revoked server-side too
    let body = read_body(handle(get("/", Some(&cookie)), &app).unwrap());
    assert!(!body.contains("Ada Obi"));
    assert!(!body.contains("Logout"));
}

#[test]
fn unknown_session_cookie_is_ignored() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let resp = handle(get("/", Some("session=forged")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(!read_body(resp).contains("Logout"));
}

#[test]
fn register_mismatched_passwords_is_rejected() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let form = "fullName=Ada+Obi&email=ada%40example.com&phone=08012345678\
                &address=12+Aba+Road&password=secret1&confirmPassword=secret2";
    let resp = handle(post_form("/register", form, None), &app).unwrap();

    assert_eq!(resp.status(), 400);
    let body = read_body(resp);
    assert!(body.contains("Passwords do not match"));
    // entered values survive the round trip
    assert!(body.contains("12 Aba Road"));
}

#[test]
fn register_success_redirects_to_login() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let form = "fullName=Ada+Obi&email=ada%40example.com&phone=08012345678\
                &address=12+Aba+Road&password=secret1&confirmPassword=secret1";
    let resp = handle(post_form("/register", form, None), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(
        header(&resp, "location").as_deref(),
        Some("/login?notice=registered")
    );

    let body = read_body(handle(get("/login?notice=registered", None), &app).unwrap());
    assert!(body.contains("Account created. Please log in."));
}

#[test]
fn register_conflict_passes_backend_status_through() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let form = "fullName=Ada+Obi&email=taken%40example.com&phone=08012345678\
                &address=12+Aba+Road&password=secret1&confirmPassword=secret1";
    let resp = handle(post_form("/register", form, None), &app).unwrap();

    assert_eq!(resp.status(), 409);
    assert!(read_body(resp).contains("User already exists"));
}
