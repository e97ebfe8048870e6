use crate::router::handle;
use crate::tests::utils::{
    count, get, header, make_app, post_form, read_body, sample_listings, session_cookie, FakeApi,
    GOOD_PASSWORD, USER_TOKEN,
};
use crate::app::App;
use std::sync::Arc;

const VALID_LISTING: &str = "title=Garden+Duplex&description=Quiet+street&address=4+Elelenwo+Rd\
    &state=Rivers&localGovt=Obio%2FAkpor&price=1%2C800&bedrooms=3&bathrooms=2&area=1200\
    &images=https%3A%2F%2Fimg.test%2Fa.jpg%0Ahttps%3A%2F%2Fimg.test%2Fb.jpg";

fn signed_in() -> (Arc<FakeApi>, App, String) {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);
    let form = format!("email=ada%40example.com&password={GOOD_PASSWORD}");
    let resp = handle(post_form("/login", &form, None), &app).unwrap();
    let cookie = session_cookie(&resp);
    (api, app, cookie)
}

#[test]
fn add_property_requires_sign_in() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let resp = handle(get("/properties/new", None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));

    let resp = handle(post_form("/properties/new", VALID_LISTING, None), &app).unwrap();
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
    assert!(api.created.lock().is_empty());
}

#[test]
fn add_property_form_renders_for_signed_in_user() {
    let (_api, app, cookie) = signed_in();

    let body = read_body(handle(get("/properties/new", Some(&cookie)), &app).unwrap());
    assert_eq!(count(&body, "form input[name=title]"), 1);
    assert_eq!(count(&body, "form [name=images]"), 1);
}

#[test]
fn valid_listing_is_submitted_with_user_token() {
    let (api, app, cookie) = signed_in();

    handle(get("/search", Some(&cookie)), &app).unwrap();
    let fetches_before = api.fetch_count();

    let resp = handle(post_form("/properties/new", VALID_LISTING, Some(&cookie)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/?notice=listed"));

    {
        let created = api.created.lock();
        assert_eq!(created.len(), 1);
        let (bearer, form) = &created[0];
        assert_eq!(bearer, USER_TOKEN);
        assert_eq!(form.title, "Garden Duplex");
        assert_eq!(form.local_govt, "Obio/Akpor");
        assert_eq!(form.price, Some(1800));
        assert_eq!(form.images.len(), 2);
    }

    // the cached listings were dropped so the new one can show up
    handle(get("/search", Some(&cookie)), &app).unwrap();
    assert_eq!(api.fetch_count(), fetches_before + 1);
}

#[test]
fn invalid_listing_shows_field_errors() {
    let (api, app, cookie) = signed_in();

    let form = "title=&description=x&address=y&state=Lagos&localGovt=Bonny&price=0\
                &bedrooms=1&bathrooms=1&area=10&images=";
    let resp = handle(post_form("/properties/new", form, Some(&cookie)), &app).unwrap();

    assert_eq!(resp.status(), 400);
    let body = read_body(resp);
    assert!(count(&body, ".field-error") >= 4);
    assert!(api.created.lock().is_empty());
}

#[test]
fn too_many_images_are_rejected() {
    let (api, app, cookie) = signed_in();

    let images = (1..=5)
        .map(|i| format!("https%3A%2F%2Fimg.test%2F{i}.jpg"))
        .collect::<Vec<_>>()
        .join("%0A");
    let form = format!(
        "title=Loft&description=d&address=a&state=FCT&localGovt=Bwari&price=900\
         &bedrooms=1&bathrooms=1&area=500&images={images}"
    );
    let resp = handle(post_form("/properties/new", &form, Some(&cookie)), &app).unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(count(&read_body(resp), ".field-error"), 1);
    assert!(api.created.lock().is_empty());
}

#[test]
fn expired_token_signs_the_user_out() {
    let (api, app, cookie) = signed_in();
    *api.create_status.lock() = Some(401);

    let resp = handle(post_form("/properties/new", VALID_LISTING, Some(&cookie)), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(
        header(&resp, "location").as_deref(),
        Some("/login?notice=expired")
    );
    assert!(header(&resp, "set-cookie").unwrap().contains("Max-Age=0"));

    let resp = handle(get("/properties/new", Some(&cookie)), &app).unwrap();
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
}

#[test]
fn backend_rejection_keeps_the_form() {
    let (api, app, cookie) = signed_in();
    *api.create_status.lock() = Some(422);

    let resp = handle(post_form("/properties/new", VALID_LISTING, Some(&cookie)), &app).unwrap();

    assert_eq!(resp.status(), 422);
    let body = read_body(resp);
    assert!(body.contains("Listing rejected"));
    assert!(body.contains("Garden Duplex"));
}
