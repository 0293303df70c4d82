//! Data access for the `users` table
//!
//! Every function issues exactly one statement and binds all values as
//! parameters. The pool is borrowed; its lifecycle belongs to the caller.

use sqlx::PgPool;

use crate::user::model::User;

/// Outcome of a failed data-access call
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::Query(other),
        }
    }
}

/// Fetch a single user by id
pub async fn fetch_user(pool: &PgPool, id: i32) -> Result<User, RepositoryError> {
    tracing::debug!(user_id = id, "Fetching user");

    let user = sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(user)
}

/// Insert a user and return the id assigned by the database
pub async fn create_user(pool: &PgPool, name: &str, age: i32) -> Result<i32, RepositoryError> {
    let id: i32 = sqlx::query_scalar("INSERT INTO users (name, age) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(age)
        .fetch_one(pool)
        .await
        .map_err(RepositoryError::Query)?;

    tracing::debug!(user_id = id, "Created user");

    Ok(id)
}

/// Update a user's name and age.
///
/// Affected rows are not checked: updating a missing id succeeds.
pub async fn update_user(
    pool: &PgPool,
    id: i32,
    name: &str,
    age: i32,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("UPDATE users SET name = $1, age = $2 WHERE id = $3")
        .bind(name)
        .bind(age)
        .bind(id)
        .execute(pool)
        .await
        .map_err(RepositoryError::Query)?;

    tracing::debug!(user_id = id, rows = result.rows_affected(), "Updated user");

    Ok(())
}

/// Delete a user. Like [`update_user`], deleting a missing id succeeds.
pub async fn delete_user(pool: &PgPool, id: i32) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(RepositoryError::Query)?;

    tracing::debug!(user_id = id, rows = result.rows_affected(), "Deleted user");

    Ok(())
}

/// List users ordered by id, `limit` rows starting at `offset`
pub async fn list_users(
    pool: &PgPool,
    offset: i64,
    limit: i64,
) -> Result<Vec<User>, RepositoryError> {
    tracing::debug!(offset, limit, "Listing users");

    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, age FROM users ORDER BY id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(RepositoryError::Query)?;

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_other_driver_errors_map_to_query() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Query(_)));
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
