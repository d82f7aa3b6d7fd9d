use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    db::open_session,
    error::ApiResult,
    state::AppState,
    users::{
        dto::{DeleteResponse, UserPayload},
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:user_id", put(update_user).delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<User>> {
    let mut session = open_session(&state.db).await?;
    let user = User::create(&mut session, &payload).await?;
    session.commit().await?;

    info!(user_id = user.id, username = %user.username, "user created");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let mut session = open_session(&state.db).await?;
    let users = User::list(&mut session).await?;
    session.commit().await?;
    Ok(Json(users))
}

/// Answers `null` rather than 404 when the id is unknown.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<Option<User>>> {
    let mut session = open_session(&state.db).await?;
    let user = User::update(&mut session, user_id, &payload).await?;
    session.commit().await?;

    match &user {
        Some(u) => info!(user_id = u.id, "user updated"),
        None => warn!(user_id, "update of unknown user"),
    }
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let mut session = open_session(&state.db).await?;
    let removed = User::delete(&mut session, user_id).await?;
    session.commit().await?;

    if removed {
        info!(user_id, "user deleted");
        Ok(Json(DeleteResponse::deleted()))
    } else {
        warn!(user_id, "delete of unknown user");
        Ok(Json(DeleteResponse::not_found()))
    }
}
