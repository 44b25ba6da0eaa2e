use crate::error::ApiError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct NewPlanetBody {
    pub name: Option<String>,
    pub description: Option<String>,
    // Must be present but is not a planet column; the legacy API accepted
    // and dropped it, so this stays a bare presence check.
    pub population: Option<Value>,
}

/// GET /planet
pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.list_planets().await?))
}

/// GET /planet/{id} -> the planet, or 404.
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let planet = state
        .store
        .get_planet(id)
        .await?
        .ok_or(ApiError::NotFound("Planet"))?;
    Ok(Json(planet))
}

/// POST /planet -> 201 with the stored planet.
pub async fn add_planet(
    State(state): State<AppState>,
    Json(body): Json<NewPlanetBody>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let description = body.description.ok_or(ApiError::MissingField("description"))?;
    if body.population.is_none() {
        return Err(ApiError::MissingField("population"));
    }

    let planet = state.store.insert_planet(&name, &description).await?;
    info!(id = planet.id, "planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}

/// DELETE /planet/{id} -> 204, or the legacy 200 `id not exist` body.
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete_planet(id).await? {
        return Ok(Json(json!({ "msg": "id not exist" })).into_response());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
