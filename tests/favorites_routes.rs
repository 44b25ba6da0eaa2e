mod common;

use axum::Router;
use axum::http::StatusCode;
use common::{request, test_app};
use serde_json::{Value, json};
use std::fs;

async fn seed_user(app: &Router, name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/user",
        Some(json!({
            "name": name,
            "email": format!("{name}@rebels.io"),
            "password": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("user id missing")
}

async fn seed_planet(app: &Router, name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/planet",
        Some(json!({"name": name, "description": "seeded", "population": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("planet id missing")
}

async fn seed_people(app: &Router, name: &str, race: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/people",
        Some(json!({"name": name, "description": format!("{name} bio"), "race": race})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("people id missing")
}

async fn user_favs(app: &Router, user_id: i64) -> (StatusCode, Value) {
    request(app, "GET", "/user/favs", Some(json!({"user_id": user_id}))).await
}

#[tokio::test]
async fn favorite_for_unknown_user_persists_nothing() {
    let (app, db_path) = test_app("fav-unknown-user").await;

    let planet_id = seed_planet(&app, "Hoth").await;
    let (status, body) = request(
        &app,
        "POST",
        &format!("/fav/planet/{planet_id}"),
        Some(json!({"user_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    // a later user sees no leaked link rows
    let user_id = seed_user(&app, "wedge").await;
    let (status, favs) = user_favs(&app, user_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favs["favorite_planets"], json!([]));
    assert_eq!(favs["favorite_people"], json!([]));

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn favorite_for_unknown_target_is_rejected() {
    let (app, db_path) = test_app("fav-unknown-target").await;

    let user_id = seed_user(&app, "biggs").await;

    let (status, body) = request(
        &app,
        "POST",
        "/fav/planet/424242",
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");

    let (status, body) = request(
        &app,
        "POST",
        "/fav/people/424242",
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "People not found");

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn listing_favorites_joins_target_names() {
    let (app, db_path) = test_app("fav-listing").await;

    let user_id = seed_user(&app, "lando").await;
    let bespin = seed_planet(&app, "Bespin").await;
    let endor = seed_planet(&app, "Endor").await;
    let lobot = seed_people(&app, "Lobot", "Human").await;

    for planet_id in [bespin, endor] {
        let (status, _) = request(
            &app,
            "POST",
            &format!("/fav/planet/{planet_id}"),
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, body) = request(
        &app,
        "POST",
        &format!("/fav/people/{lobot}"),
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Fav person added");

    let (status, favs) = user_favs(&app, user_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        favs["favorite_planets"],
        json!([
            {"id": bespin, "name": "Bespin"},
            {"id": endor, "name": "Endor"},
        ])
    );
    assert_eq!(favs["favorite_people"], json!([{"id": lobot, "name": "Lobot"}]));

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn favorites_for_unknown_user_return_404() {
    let (app, db_path) = test_app("fav-list-unknown").await;

    let (status, body) = user_favs(&app, 7).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    // absent user_id behaves the same as an unknown one
    let (status, _) = request(&app, "GET", "/user/favs", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn deleting_missing_favorite_returns_404() {
    let (app, db_path) = test_app("fav-delete-missing").await;

    let user_id = seed_user(&app, "ackbar").await;
    let (status, body) = request(
        &app,
        "DELETE",
        "/fav/people/55",
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Fav person not found");

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn duplicate_favorites_are_deleted_one_at_a_time() {
    let (app, db_path) = test_app("fav-duplicates").await;

    let user_id = seed_user(&app, "mon").await;
    let planet_id = seed_planet(&app, "Chandrila").await;

    // the pair carries no uniqueness constraint
    for _ in 0..2 {
        let (status, _) = request(
            &app,
            "POST",
            &format!("/fav/planet/{planet_id}"),
            Some(json!({"user_id": user_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, favs) = user_favs(&app, user_id).await;
    assert_eq!(favs["favorite_planets"].as_array().map(Vec::len), Some(2));

    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/fav/planet/{planet_id}"),
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fav planet deleted");

    let (_, favs) = user_favs(&app, user_id).await;
    assert_eq!(favs["favorite_planets"].as_array().map(Vec::len), Some(1));

    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/fav/planet/{planet_id}"),
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/fav/planet/{planet_id}"),
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn deleting_a_planet_cascades_into_favorites() {
    let (app, db_path) = test_app("fav-cascade").await;

    let user_id = seed_user(&app, "hera").await;
    let planet_id = seed_planet(&app, "Ryloth").await;

    let (status, _) = request(
        &app,
        "POST",
        &format!("/fav/planet/{planet_id}"),
        Some(json!({"user_id": user_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = request(&app, "DELETE", &format!("/planet/{planet_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, favs) = user_favs(&app, user_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favs["favorite_planets"], json!([]));

    let _ = fs::remove_file(&db_path);
}
