use crate::router::handle;
use crate::tests::utils::{
    count, get, listing, make_app, read_body, sample_listings, texts, FakeApi,
};

fn titles(body: &str) -> Vec<String> {
    texts(body, ".listing-card .listing-title")
}

#[test]
fn search_page_lists_everything_without_filters() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/search", None), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert_eq!(
        titles(&body),
        vec!["Modern Apartment", "Beach House", "Country Villa"]
    );
    assert_eq!(count(&body, "form#filters"), 1);
    assert!(body.contains("<html"));
}

#[test]
fn state_filter_keeps_source_order() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/search?state=Rivers", None), &app).unwrap();
    let body = read_body(resp);

    assert_eq!(titles(&body), vec!["Modern Apartment", "Country Villa"]);
    // picking a state fills the LGA select with that state's 23 areas
    assert_eq!(count(&body, "select#lga option"), 24);
}

#[test]
fn query_state_and_lga_combine() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/search?q=VILLA&state=Rivers&lga=Bonny", None), &app).unwrap();
    let body = read_body(resp);

    assert_eq!(titles(&body), vec!["Country Villa"]);
    assert_eq!(count(&body, "select#lga option[selected]"), 1);
    assert_eq!(texts(&body, "select#lga option[selected]"), vec!["Bonny"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(handle(get("/search?min_price=1500", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Beach House", "Country Villa"]);

    let body = read_body(
        handle(get("/search?min_price=1200&max_price=1500", None), &app).unwrap(),
    );
    assert_eq!(titles(&body), vec!["Modern Apartment", "Country Villa"]);
}

#[test]
fn zero_and_garbage_prices_do_not_filter() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(
        handle(get("/search?min_price=0&max_price=cheap", None), &app).unwrap(),
    );
    assert_eq!(count(&body, ".listing-card"), 3);
}

#[test]
fn lga_from_another_state_is_dropped() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(handle(get("/search?state=Lagos&lga=Eleme", None), &app).unwrap());

    assert_eq!(titles(&body), vec!["Beach House"]);
    assert_eq!(
        texts(&body, "select#lga option[selected]"),
        vec!["Local Government Area"]
    );
}

#[test]
fn no_matches_shows_empty_state() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(handle(get("/search?q=castle", None), &app).unwrap());

    assert_eq!(count(&body, ".listing-card"), 0);
    assert!(body.contains("No properties found. Try adjusting your filters."));
}

#[test]
fn encoded_query_is_decoded() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let body = read_body(handle(get("/search?q=modern%20apart", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Modern Apartment"]);
}

#[test]
fn failed_fetch_still_renders_controls() {
    let api = FakeApi::unreachable();
    let app = make_app(&api);

    let resp = handle(get("/search?state=Rivers", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert_eq!(count(&body, ".notice-error"), 1);
    assert!(body.contains("Could not reach the property service"));
    assert!(body.contains("No properties found"));
    assert_eq!(count(&body, "form#filters select[name=state]"), 1);
}

#[test]
fn results_fragment_is_partial_html() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    let resp = handle(get("/search/results?q=beach", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
    assert_eq!(count(&body, ".listing-card"), 1);
}

#[test]
fn local_govt_fragment_lists_state_options() {
    let api = FakeApi::with_listings(Vec::new());
    let app = make_app(&api);

    let body = read_body(handle(get("/search/local-govts?state=FCT", None), &app).unwrap());
    assert_eq!(count(&body, "option"), 7);
    assert!(body.contains("Abaji"));

    let body = read_body(handle(get("/search/local-govts?state=Atlantis", None), &app).unwrap());
    assert_eq!(count(&body, "option"), 1);
}

#[test]
fn listings_are_fetched_once_per_ttl() {
    let api = FakeApi::with_listings(sample_listings());
    let app = make_app(&api);

    handle(get("/search", None), &app).unwrap();
    handle(get("/search?q=beach", None), &app).unwrap();
    handle(get("/", None), &app).unwrap();

    assert_eq!(api.fetch_count(), 1);
}

#[test]
fn listings_with_missing_fields_still_render() {
    let mut listings = sample_listings();
    listings.push(
        serde_json::from_value(serde_json::json!({
            "_id": "4",
            "title": "Bare Flat",
            "price": "950",
            "images": null,
            "state": "Bayelsa",
            "localGovt": "Yenagoa"
        }))
        .unwrap(),
    );
    listings.push(listing("5", "Lagoon View", "Lagos", "Eti-Osa", 3000));
    let api = FakeApi::with_listings(listings);
    let app = make_app(&api);

    let body = read_body(handle(get("/search?state=Bayelsa", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Bare Flat"]);
}

#[test]
fn fractional_prices_respect_decimal_bounds() {
    let priced = |id: &str, title: &str, price: f64| -> crate::domain::Listing {
        serde_json::from_value(serde_json::json!({
            "_id": id, "title": title, "price": price, "state": "Rivers", "localGovt": "Eleme"
        }))
        .unwrap()
    };
    let api = FakeApi::with_listings(vec![
        priced("1", "Just Under", 1499.6),
        priced("2", "Just Over", 1500.4),
    ]);
    let app = make_app(&api);

    let body = read_body(handle(get("/search?min_price=1500", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Just Over"]);

    let body = read_body(handle(get("/search?max_price=1500", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Just Under"]);

    let body = read_body(handle(get("/search?max_price=1500.5", None), &app).unwrap());
    assert_eq!(titles(&body), vec!["Just Under", "Just Over"]);
    assert_eq!(
        count(&body, "form#filters input[name=max_price][value=\"1500.5\"]"),
        1
    );
}
