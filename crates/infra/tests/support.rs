//! Shared helpers for `harvestmine-infra` integration tests.
//!
//! Starts one wiremock server per service and mounts the endpoints a sync
//! run touches.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEFAULT_TICKET: u32 = 37080;

/// Harvest with a working login and one day of entries at `/daily/{doy}/{year}`.
pub async fn harvest_server(day_of_year: u32, year: i32, entries: Value) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/who_am_i"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"id": 42, "email": "me@example.com"}})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/daily/{day_of_year}/{year}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "day_entries": entries })))
        .mount(&server)
        .await;

    server
}

/// Redmine with a user, the given activities and the listed issues.
pub async fn redmine_server(activities: Value, issues: &[u32]) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/current.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user": {"id": 5, "login": "jdoe"}})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/enumerations/time_entry_activities.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "time_entry_activities": activities })),
        )
        .mount(&server)
        .await;

    for issue in issues {
        Mock::given(method("GET"))
            .and(path(format!("/issues/{issue}.json")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"issue": {"id": issue, "subject": "Some work"}})),
            )
            .mount(&server)
            .await;
    }

    server
}

/// Standard Redmine activities used by most tests.
pub fn standard_activities() -> Value {
    json!([
        {"id": 9, "name": "Development"},
        {"id": 14, "name": "Meeting"}
    ])
}

/// JSON bodies of every request received on `route` with `verb`.
pub async fn bodies(server: &MockServer, verb: &str, route: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == verb && request.url.path() == route)
        .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
        .collect()
}
