use crate::db::connection::Store;
use crate::db::listings;
use crate::directory;
use crate::domain::aggregate::{load_more, PAGE_SIZE};
use crate::domain::filter::{CategoryTable, QuerySpec};
use crate::domain::ranking::{RankingParams, TOP_LIST_THRESHOLD};
use crate::domain::slug;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;

pub fn handle(req: Request, store: &Store) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/city") => city_page(store, &params),
        ("GET", "/api/top") => api_top(store, &params),
        ("GET", "/api/listings") => api_listings(store, &params),
        ("GET", "/api/locality") => api_locality(store, &params),
        ("GET", "/api/localities") => api_localities(store, &params),
        _ => Err(ServerError::NotFound),
    }
}

fn require<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest(format!("missing '{key}' parameter")))
}

fn city_page(store: &Store, params: &HashMap<String, String>) -> ResultResp {
    let locality = slug::decode_locality_slug(require(params, "slug")?)?;
    let top = directory::get_ranked_top(
        store,
        &locality.city,
        &locality.state_abbr,
        TOP_LIST_THRESHOLD,
        &RankingParams::default(),
    )?;

    html_response(templates::pages::city_page(
        &locality.city,
        &locality.state_abbr,
        &top,
    ))
}

fn api_top(store: &Store, params: &HashMap<String, String>) -> ResultResp {
    let locality = slug::decode_locality_slug(require(params, "slug")?)?;
    let n = params
        .get("n")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(TOP_LIST_THRESHOLD);

    let top = directory::get_ranked_top(
        store,
        &locality.city,
        &locality.state_abbr,
        n,
        &RankingParams::default(),
    )?;

    json_response(&top)
}

fn api_listings(store: &Store, params: &HashMap<String, String>) -> ResultResp {
    let spec = QuerySpec {
        term: params.get("term").cloned(),
        region: params.get("state").cloned(),
        category: params.get("category").cloned(),
        tags: params
            .get("tags")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        page: params.get("page").and_then(|v| v.parse::<usize>().ok()),
    };

    let matches = directory::search_listings(store, &spec, &CategoryTable::bundled())?;
    let page = load_more(&matches, spec.page.unwrap_or(1), PAGE_SIZE);

    json_response(&page)
}

fn api_locality(store: &Store, params: &HashMap<String, String>) -> ResultResp {
    let locality = slug::decode_locality_slug(require(params, "slug")?)?;
    let aggregate =
        directory::get_locality_aggregate(store, &locality.city, &locality.state_abbr)?;

    json_response(&json!({
        "city": locality.city,
        "state_abbr": locality.state_abbr,
        "count": aggregate.count,
        "mean_rating": aggregate.mean_rating,
    }))
}

fn api_localities(store: &Store, params: &HashMap<String, String>) -> ResultResp {
    let state = require(params, "state")?;
    let rows = listings::localities_by_region(store, state)?;

    let localities: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "city": row.city,
                "slug": slug::locality_slug(&row.city, state),
                "count": row.listing_count,
                "mean_rating": row.mean_rating,
            })
        })
        .collect();

    json_response(&json!({ "state_abbr": state.to_uppercase(), "localities": localities }))
}

fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.replace('+', " "));
            }
        }
    }

    map
}
