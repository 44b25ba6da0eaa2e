use crate::error::ApiError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct NewPeopleBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub race: Option<String>,
}

/// GET /people
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.list_people().await?))
}

/// GET /people/{id} -> the person, or 404.
pub async fn get_people(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let people = state
        .store
        .get_people(id)
        .await?
        .ok_or(ApiError::NotFound("People"))?;
    Ok(Json(people))
}

/// POST /people -> 201 with the stored person.
pub async fn add_people(
    State(state): State<AppState>,
    Json(body): Json<NewPeopleBody>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let description = body.description.ok_or(ApiError::MissingField("description"))?;
    let race = body.race.ok_or(ApiError::MissingField("race"))?;

    let people = state.store.insert_people(&name, &description, &race).await?;
    info!(id = people.id, "people created");
    Ok((StatusCode::CREATED, Json(people)))
}

/// DELETE /people/{id} -> 204, or the legacy 200 `id not exist` body.
pub async fn delete_people(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete_people(id).await? {
        return Ok(Json(json!({ "msg": "id not exist" })).into_response());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
