use crate::error::ApiError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Body shared by every favorites route: `{"user_id": ...}`.
/// An absent user_id behaves like an unknown user.
#[derive(Debug, Deserialize)]
pub struct FavBody {
    pub user_id: Option<i64>,
}

/// GET /user/favs -> the caller's favorites, names joined from the target
/// tables. The user id arrives in the request body (legacy contract).
pub async fn get_user_favs(
    State(state): State<AppState>,
    Json(body): Json<FavBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body.user_id.ok_or(ApiError::NotFound("User"))?;
    let favs = state
        .store
        .list_favorites(user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(favs))
}

/// POST /fav/planet/{planet_id} -> 201 once the link row is committed.
pub async fn add_fav_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body.user_id.ok_or(ApiError::NotFound("User"))?;
    let fav = state.store.insert_fav_planet(user_id, planet_id).await?;
    info!(id = fav.id, user_id, planet_id, "favorite planet added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Favorite planet added" })),
    ))
}

/// POST /fav/people/{people_id} -> 201 once the link row is committed.
pub async fn add_fav_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
    Json(body): Json<FavBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body.user_id.ok_or(ApiError::NotFound("User"))?;
    let fav = state.store.insert_fav_people(user_id, people_id).await?;
    info!(id = fav.id, user_id, people_id, "favorite person added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Fav person added" })),
    ))
}

/// DELETE /fav/planet/{planet_id} -> 200, or 404 when no link matches.
/// With duplicate links only the oldest one is removed.
pub async fn delete_fav_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body.user_id.ok_or(ApiError::NotFound("Fav planet"))?;
    if !state.store.delete_fav_planet(user_id, planet_id).await? {
        return Err(ApiError::NotFound("Fav planet"));
    }
    Ok(Json(json!({ "message": "Fav planet deleted" })))
}

/// DELETE /fav/people/{people_id} -> 200, or 404 when no link matches.
pub async fn delete_fav_people(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
    Json(body): Json<FavBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = body.user_id.ok_or(ApiError::NotFound("Fav person"))?;
    if !state.store.delete_fav_people(user_id, people_id).await? {
        return Err(ApiError::NotFound("Fav person"));
    }
    Ok(Json(json!({ "message": "Fav person deleted" })))
}
