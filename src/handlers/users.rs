use crate::db::models::UserPublic;
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
pub struct NewUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// GET /users -> every user, password excluded.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let users: Vec<UserPublic> = state
        .store
        .list_users()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(users))
}

/// GET /user/{id} -> the user, or 404.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(UserPublic::from(user)))
}

/// POST /user -> 201 with the stored user.
/// Fields are presence-checked in contract order: name, email, password.
pub async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<NewUserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let email = body.email.ok_or(ApiError::MissingField("email"))?;
    let password = body.password.ok_or(ApiError::MissingField("password"))?;

    let user = state.store.insert_user(&name, &email, &password).await?;
    info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(UserPublic::from(user))))
}

/// DELETE /user/{id} -> 204, or the legacy 200 `id not exist` body.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete_user(id).await? {
        return Ok(Json(json!({ "msg": "id not exist" })).into_response());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
