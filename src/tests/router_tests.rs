use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{listing, make_store, rated, seed};
use astra::Body;
use http::Method;
use serde_json::Value;
use std::io::Read;

fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap()
}

fn json_body(resp: &mut astra::Response) -> Value {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn text_body(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

fn springfield() -> Vec<Listing> {
    vec![
        rated("A Dental", "Springfield", "IL", 5.0, 2),
        rated("B Dental", "Springfield", "IL", 4.5, 200),
        {
            let mut c = listing("C Dental", "Springfield", "IL");
            c.review_count = Some(10);
            c
        },
    ]
}

#[test]
fn api_top_returns_ranked_json() {
    let store = make_store("api_top");
    seed(&store, &springfield());

    let mut resp = handle(get("/api/top?slug=springfield-il&n=10"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = json_body(&mut resp);
    assert_eq!(body["eligible_count"], 2);
    // The unrated listing never appears, whatever n says.
    let ranked = body["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|l| l["name"] != "C Dental"));
}

#[test]
fn api_top_unknown_locality_is_an_empty_success() {
    let store = make_store("api_top_empty");

    let mut resp = handle(get("/api/top?slug=nowhere-zz"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = json_body(&mut resp);
    assert_eq!(body["eligible_count"], 0);
    assert!(body["ranked"].as_array().unwrap().is_empty());
}

#[test]
fn api_top_malformed_slug_is_invalid() {
    let store = make_store("api_top_bad_slug");

    let err = handle(get("/api/top?slug=chicago"), &store)
        .err()
        .expect("expected an error");
    match err {
        ServerError::InvalidSlug(_) => {}
        other => panic!("expected InvalidSlug, got {other:?}"),
    }
}

#[test]
fn api_listings_filters_and_paginates() {
    let store = make_store("api_listings");

    let mut set: Vec<Listing> = (0..15)
        .map(|i| rated(&format!("TX Dental {i:02}"), "Houston", "TX", 4.0, 10))
        .collect();
    set.push(rated("Idaho Dental", "Boise", "ID", 4.0, 10));
    seed(&store, &set);

    let mut resp = handle(get("/api/listings?state=TX&page=1"), &store).unwrap();
    let body = json_body(&mut resp);

    assert_eq!(body["total"], 15);
    assert_eq!(body["items"].as_array().unwrap().len(), 12);
    assert_eq!(body["has_more"], true);

    // Page 2 extends page 1 rather than replacing it.
    let mut resp = handle(get("/api/listings?state=TX&page=2"), &store).unwrap();
    let body2 = json_body(&mut resp);
    assert_eq!(body2["items"].as_array().unwrap().len(), 15);
    assert_eq!(body2["has_more"], false);
    assert_eq!(
        body["items"].as_array().unwrap().as_slice(),
        &body2["items"].as_array().unwrap()[..12]
    );
}

#[test]
fn api_locality_reports_count_and_mean() {
    let store = make_store("api_locality");
    seed(
        &store,
        &[
            rated("A Dental", "Springfield", "IL", 5.0, 10),
            listing("B Dental", "Springfield", "IL"),
            rated("C Dental", "Springfield", "IL", 3.0, 5),
        ],
    );

    let mut resp = handle(get("/api/locality?slug=springfield-il"), &store).unwrap();
    let body = json_body(&mut resp);

    assert_eq!(body["city"], "Springfield");
    assert_eq!(body["count"], 3);
    assert_eq!(body["mean_rating"], 4.0);
}

#[test]
fn api_localities_lists_cities_with_slugs() {
    let store = make_store("api_localities");
    seed(
        &store,
        &[
            rated("A Dental", "Springfield", "IL", 4.0, 10),
            rated("B Dental", "Chicago", "IL", 4.0, 10),
        ],
    );

    let mut resp = handle(get("/api/localities?state=IL"), &store).unwrap();
    let body = json_body(&mut resp);

    assert_eq!(body["state_abbr"], "IL");
    let localities = body["localities"].as_array().unwrap();
    assert_eq!(localities.len(), 2);
    assert_eq!(localities[0]["slug"], "chicago-il");
}

#[test]
fn city_page_drops_top_10_claim_below_threshold() {
    let store = make_store("city_page");
    seed(&store, &springfield());

    let mut resp = handle(get("/city?slug=springfield-il"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = text_body(&mut resp);
    assert!(body.contains("Dentists in Springfield, IL"));
    assert!(!body.contains("Top 10"));
    assert!(body.contains("Ranked from 2 verified listings"));
}

#[test]
fn unknown_paths_are_not_found() {
    let store = make_store("not_found");

    let err = handle(get("/no-such-page"), &store)
        .err()
        .expect("expected an error");
    match err {
        ServerError::NotFound => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
