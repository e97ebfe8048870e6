use crate::router::handle;
use crate::tests::utils::{count, get, make_app, read_body, sample_listings, texts, FakeApi};

#[test]
fn detail_page_shows_listing() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/property/3", None), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Country Villa"));
    assert!(body.contains("Bonny"));
    assert_eq!(texts(&body, ".property .listing-price"), vec!["N1,500 / year"]);
    assert_eq!(count(&body, ".gallery img"), 1);
    assert!(body.contains("Contact Owner"));
}

#[test]
fn cards_link_to_detail_pages() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(handle(get("/search", None), &app).unwrap());
    assert_eq!(count(&body, "a[href=\"/property/2\"]"), 1);
}

#[test]
fn unknown_property_is_404() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/property/999", None), &app).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("Property not found"));
}

#[test]
fn unreachable_backend_is_an_upstream_error() {
    let api = FakeApi::unreachable();
    let app = make_app(&api);

    let err = handle(get("/property/1", None), &app).unwrap_err();
    assert_eq!(crate::responses::error_to_response(err).status(), 502);
}

#[test]
fn unknown_route_is_not_found() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let err = handle(get("/nope", None), &app).unwrap_err();
    assert_eq!(crate::responses::error_to_response(err).status(), 404);
}

#[test]
fn health_check_responds_ok() {
    let api = FakeApi::unreachable();
    let app = make_app(&api);

    let resp = handle(get("/health", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(read_body(resp), "ok");
}
