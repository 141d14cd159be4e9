//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use common::{AppError, AppResult};
use domain::{UserListResponse, UserRequest, UserResponse, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Query string for `GET /users`.
///
/// Supplying either parameter switches the response to the paginated
/// envelope. Values that are not positive integers fall back to defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Page number (1-indexed)
    pub page: Option<String>,
    /// Items per page, capped at 100
    pub page_size: Option<String>,
}

impl ListUsersQuery {
    fn is_paginated(&self) -> bool {
        present(&self.page).is_some() || present(&self.page_size).is_some()
    }

    fn page(&self) -> i64 {
        positive_or(&self.page, DEFAULT_PAGE_NUMBER)
    }

    fn page_size(&self) -> i64 {
        positive_or(&self.page_size, DEFAULT_PAGE_SIZE)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn positive_or(value: &Option<String>, default: i64) -> i64 {
    present(value)
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Body of `GET /users`: a bare array, or the paginated envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserListing {
    Simple(Vec<UserResponse>),
    Paged(UserListResponse),
}

/// Parse a path segment as a user id.
fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!(id = raw, error = %e, "invalid user ID");
        AppError::bad_request("Invalid user ID")
    })
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List users, optionally paginated
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users ordered by id; a UserListResponse envelope when page or page_size is given", body = Vec<UserResponse>),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UserListing>> {
    let listing = if query.is_paginated() {
        UserListing::Paged(
            state
                .user_service
                .list_users_paged(query.page(), query.page_size())
                .await?,
        )
    } else {
        UserListing::Simple(state.user_service.list_users().await?)
    };

    Ok(Json(listing))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with computed age", body = UserResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user's name and date of birth
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed ID or validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_user_id(&id)?;
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, page_size: Option<&str>) -> ListUsersQuery {
        ListUsersQuery {
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        }
    }

    #[test]
    fn test_paginated_when_either_param_present() {
        assert!(!query(None, None).is_paginated());
        assert!(!query(Some(""), Some("")).is_paginated());
        assert!(query(Some("2"), None).is_paginated());
        assert!(query(None, Some("5")).is_paginated());
        assert!(query(Some("abc"), None).is_paginated());
    }

    #[test]
    fn test_unusable_values_fall_back_to_defaults() {
        let q = query(Some("abc"), Some("-4"));
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 10);

        let q = query(Some("0"), Some("0"));
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 10);

        let q = query(Some("3"), Some("500"));
        assert_eq!(q.page(), 3);
        assert_eq!(q.page_size(), 500);
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("17").unwrap(), 17);
        assert!(matches!(parse_user_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_user_id(""), Err(AppError::BadRequest(_))));
    }
}
