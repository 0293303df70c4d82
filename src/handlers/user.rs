//! User API handlers
//!
//! Each handler decodes its input, makes exactly one repository call, and
//! encodes the result.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::user::{repository, ListParams, Pagination, User, UserPayload};

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// Parse a path id: one or more ASCII digits that fit in an `i32`
pub fn parse_user_id(raw: &str) -> ApiResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id());
    }
    raw.parse::<i32>().map_err(|_| invalid_id())
}

fn invalid_id() -> ApiError {
    ApiError::ValidationError("Invalid user ID".to_string())
}

/// Resolve the `:id` path segment, treating undecodable segments as invalid ids
fn user_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i32> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "Rejected user id path");
        invalid_id()
    })?;
    parse_user_id(&raw)
}

/// `GET /user/:id`
pub async fn get_user(
    State(pool): State<PgPool>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    let user = repository::fetch_user(&pool, id).await?;

    Ok(Json(user))
}

/// `GET /users?start=&count=`
///
/// The query is read as raw pairs so that repeated keys or junk values never
/// reject the request.
pub async fn list_users(
    State(pool): State<PgPool>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<User>>> {
    let page = Pagination::from(ListParams::from_pairs(pairs));
    let users = repository::list_users(&pool, page.offset, page.limit).await?;

    Ok(Json(users))
}

/// `POST /user`
pub async fn create_user(
    State(pool): State<PgPool>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(payload) = payload?;
    let id = repository::create_user(&pool, &payload.name, payload.age).await?;

    tracing::info!(user_id = id, "User created");

    Ok((StatusCode::CREATED, Json(payload.into_user(id))))
}

/// `PUT /user/:id`
///
/// Responds with the record as submitted; it is not re-read from storage.
pub async fn update_user(
    State(pool): State<PgPool>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    let Json(payload) = payload?;
    let user = payload.into_user(id);

    repository::update_user(&pool, user.id, &user.name, user.age).await?;

    Ok(Json(user))
}

/// `DELETE /user/:id`
pub async fn delete_user(
    State(pool): State<PgPool>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = user_id(path)?;
    repository::delete_user(&pool, id).await?;

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(DeleteResponse { result: "success" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("0").unwrap(), 0);
        assert_eq!(parse_user_id("00042").unwrap(), 42);
        assert_eq!(parse_user_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_parse_user_id_rejects_non_digits() {
        for raw in ["", "-1", "+1", "abc", "1.5", " 1", "1 OR 1=1", "2147483648"] {
            let err = parse_user_id(raw).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "input {:?}", raw);
            assert_eq!(err.to_string(), "Invalid user ID");
        }
    }
}
