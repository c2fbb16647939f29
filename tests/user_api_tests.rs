// SPDX-License-Identifier: MIT

//! User endpoint integration tests.

use axum::http::{Method, StatusCode};
use chrono::{Months, Utc};
use serde_json::json;

mod common;

fn user_body(first_name: &str, email: &str) -> serde_json::Value {
    json!({
        "first_name": first_name,
        "last_name": "Doe",
        "birthdate": "1990-01-01",
        "email": email,
    })
}

fn birthdate_years_ago(years: u32) -> String {
    Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(years * 12))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_user_returns_201_and_first_id() {
    let (app, _) = common::create_test_app();

    let body = common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john@example.com")),
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["first_name"], "John");
    assert_eq!(body["birthdate"], "1990-01-01");
    assert_eq!(body["email"], "john@example.com");
}

#[tokio::test]
async fn test_create_user_with_preset_id_is_rejected() {
    let (app, _) = common::create_test_app();

    let mut body = user_body("John", "john@example.com");
    body["id"] = json!(7);
    let error = common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(body),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(error["error"], "bad_request");
}

#[tokio::test]
async fn test_create_user_with_blank_name_is_rejected() {
    let (app, _) = common::create_test_app();

    let error = common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("", "john@example.com")),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(error["error"], "bad_request");
}

#[tokio::test]
async fn test_create_user_conflicts_on_contained_email() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john.doe@example.com")),
        StatusCode::CREATED,
    )
    .await;

    // The uniqueness guard is a substring match, so a fragment of a stored
    // email collides as well.
    let error = common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("Jane", "doe@example.com")),
        StatusCode::CONFLICT,
    )
    .await;

    assert_eq!(error["error"], "conflict");
}

#[tokio::test]
async fn test_get_user_by_id_and_details_alias() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john@example.com")),
        StatusCode::CREATED,
    )
    .await;

    let by_id =
        common::request_json(&app, Method::GET, "/v1/users/1", None, StatusCode::OK).await;
    let by_alias =
        common::request_json(&app, Method::GET, "/v1/users/details/1", None, StatusCode::OK)
            .await;
    assert_eq!(by_id, by_alias);
    assert_eq!(by_id["email"], "john@example.com");

    let missing = common::request(&app, Method::GET, "/v1/users/42", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_and_reduced_projections() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("Anna", "anna@alpha.org")),
        StatusCode::CREATED,
    )
    .await;
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("Bruno", "bruno@beta.net")),
        StatusCode::CREATED,
    )
    .await;

    let all = common::request_json(&app, Method::GET, "/v1/users", None, StatusCode::OK).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|u| u.get("email").is_some()));

    // Reduced projections: names without emails, emails without names.
    for uri in ["/v1/users/simple", "/v1/users/basic-info"] {
        let simple = common::request_json(&app, Method::GET, uri, None, StatusCode::OK).await;
        let simple = simple.as_array().unwrap();
        assert_eq!(simple.len(), 2);
        assert!(simple.iter().all(|u| u.get("first_name").is_some()));
        assert!(simple.iter().all(|u| u.get("email").is_none()));
    }

    for uri in ["/v1/users/search?email=ALPHA", "/v1/users/email?email=ALPHA"] {
        let hits = common::request_json(&app, Method::GET, uri, None, StatusCode::OK).await;
        let hits = hits.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["email"], "anna@alpha.org");
        assert_eq!(hits[0]["id"], 1);
        assert!(hits[0].get("first_name").is_none());
    }
}

#[tokio::test]
async fn test_update_user_keeps_absent_fields() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john@example.com")),
        StatusCode::CREATED,
    )
    .await;

    let updated = common::request_json(
        &app,
        Method::PUT,
        "/v1/users/1",
        Some(json!({ "last_name": "Smith" })),
        StatusCode::OK,
    )
    .await;

    assert_eq!(updated["last_name"], "Smith");
    assert_eq!(updated["first_name"], "John");
    assert_eq!(updated["email"], "john@example.com");
    assert_eq!(updated["birthdate"], "1990-01-01");

    let missing = common::request(
        &app,
        Method::PUT,
        "/v1/users/42",
        Some(json!({ "last_name": "Smith" })),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john@example.com")),
        StatusCode::CREATED,
    )
    .await;

    let deleted = common::request(&app, Method::DELETE, "/v1/users/1", None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = common::request(&app, Method::GET, "/v1/users/1", None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let unknown = common::request(&app, Method::DELETE, "/v1/users/42", None).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_with_trainings_is_blocked() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("John", "john@example.com")),
        StatusCode::CREATED,
    )
    .await;
    common::request_json(
        &app,
        Method::POST,
        "/v1/trainings",
        Some(json!({
            "user_id": 1,
            "start_time": "2024-01-01T08:00:00Z",
            "end_time": "2024-01-01T09:00:00Z",
            "activity_type": "RUNNING",
            "distance": 5.0,
            "average_speed": 10.0,
        })),
        StatusCode::CREATED,
    )
    .await;

    let error = common::request_json(
        &app,
        Method::DELETE,
        "/v1/users/1",
        None,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(error["error"], "conflict");

    // Still there.
    common::request_json(&app, Method::GET, "/v1/users/1", None, StatusCode::OK).await;
}

#[tokio::test]
async fn test_older_than_date_includes_boundary() {
    let (app, _) = common::create_test_app();
    common::request_json(
        &app,
        Method::POST,
        "/v1/users",
        Some(user_body("Anna", "anna@alpha.org")),
        StatusCode::CREATED,
    )
    .await;
    let mut younger = user_body("Bruno", "bruno@beta.net");
    younger["birthdate"] = json!("2010-06-01");
    common::request_json(&app, Method::POST, "/v1/users", Some(younger), StatusCode::CREATED)
        .await;

    let exact = common::request_json(
        &app,
        Method::GET,
        "/v1/users/older/1990-01-01",
        None,
        StatusCode::OK,
    )
    .await;
    let exact = exact.as_array().unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0]["email"], "anna@alpha.org");

    let later = common::request_json(
        &app,
        Method::GET,
        "/v1/users/older/2010-06-01",
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(later.as_array().unwrap().len(), 2);

    let malformed = common::request(&app, Method::GET, "/v1/users/older/not-a-date", None).await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_older_than_age_uses_todays_cutoff() {
    let (app, _) = common::create_test_app();

    let mut thirty = user_body("Anna", "anna@alpha.org");
    thirty["birthdate"] = json!(birthdate_years_ago(30));
    common::request_json(&app, Method::POST, "/v1/users", Some(thirty), StatusCode::CREATED)
        .await;

    let mut ten = user_body("Bruno", "bruno@beta.net");
    ten["birthdate"] = json!(birthdate_years_ago(10));
    common::request_json(&app, Method::POST, "/v1/users", Some(ten), StatusCode::CREATED).await;

    let hits = common::request_json(
        &app,
        Method::GET,
        "/v1/users/older-than/20",
        None,
        StatusCode::OK,
    )
    .await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["email"], "anna@alpha.org");
}
