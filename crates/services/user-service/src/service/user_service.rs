//! User service - Handles user-related business logic.
//!
//! Validates requests, converts between wire dates and calendar dates,
//! derives ages and does the pagination arithmetic. Storage outcomes arrive
//! already classified by the repository and pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::Span;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    first_validation_message, PageRequest, UserListResponse, UserRequest, UserResponse,
    SIMPLE_LIST_LIMIT,
};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user. The response carries no age.
    async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse>;

    /// Get user by ID with computed age
    async fn get_user(&self, id: i64) -> AppResult<UserResponse>;

    /// Unpaginated listing ordered by id, capped at `SIMPLE_LIST_LIMIT` rows
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;

    /// One page of users. Out-of-range arguments are clamped, not rejected.
    async fn list_users_paged(&self, page: i64, page_size: i64) -> AppResult<UserListResponse>;

    /// Replace name and birth date. The response carries no age.
    async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<UserResponse>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    span: Span,
}

impl UserManager {
    /// Create new user service instance logging under `span`
    pub fn new(repo: Arc<dyn UserRepository>, span: Span) -> Self {
        Self { repo, span }
    }

    /// Run structural validation, then parse the birth date.
    fn validate(&self, request: &UserRequest) -> AppResult<NaiveDate> {
        request.validate().map_err(|e| {
            let message = first_validation_message(&e);
            tracing::warn!(parent: &self.span, error = %message, "request validation failed");
            AppError::validation(message)
        })?;

        request.parsed_date_of_birth().map_err(|e| {
            tracing::warn!(parent: &self.span, error = %e, "failed to parse date of birth");
            AppError::from(e)
        })
    }

    fn log_failure(&self, operation: &'static str, id: Option<i64>, err: &AppError) {
        if err.is_not_found() {
            tracing::warn!(parent: &self.span, operation, user_id = id, "user not found");
        } else {
            tracing::error!(parent: &self.span, operation, user_id = id, error = %err, "user operation failed");
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        let date_of_birth = self.validate(&request)?;

        let id = self
            .repo
            .insert(request.name.clone(), date_of_birth)
            .await
            .inspect_err(|e| self.log_failure("create", None, e))?;

        tracing::info!(parent: &self.span, user_id = id, "user created");
        Ok(UserResponse::without_age(id, request.name, date_of_birth))
    }

    async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self
            .repo
            .find_by_id(id)
            .await
            .inspect_err(|e| self.log_failure("get", Some(id), e))?;

        Ok(UserResponse::with_age(&user, today()))
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let (users, _) = self
            .repo
            .find_page(0, SIMPLE_LIST_LIMIT)
            .await
            .inspect_err(|e| self.log_failure("list", None, e))?;

        let today = today();
        Ok(users
            .iter()
            .map(|user| UserResponse::with_age(user, today))
            .collect())
    }

    async fn list_users_paged(&self, page: i64, page_size: i64) -> AppResult<UserListResponse> {
        let request = PageRequest::new(page, page_size);

        let (users, total) = self
            .repo
            .find_page(request.offset(), request.limit())
            .await
            .inspect_err(|e| self.log_failure("list_paged", None, e))?;

        let today = today();
        Ok(UserListResponse {
            users: users
                .iter()
                .map(|user| UserResponse::with_age(user, today))
                .collect(),
            page: request.page(),
            page_size: request.page_size(),
            total,
            total_pages: request.total_pages(total),
        })
    }

    async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<UserResponse> {
        let date_of_birth = self.validate(&request)?;

        self.repo
            .update(id, request.name.clone(), date_of_birth)
            .await
            .inspect_err(|e| self.log_failure("update", Some(id), e))?;

        tracing::info!(parent: &self.span, user_id = id, "user updated");
        Ok(UserResponse::without_age(id, request.name, date_of_birth))
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo
            .delete(id)
            .await
            .inspect_err(|e| self.log_failure("delete", Some(id), e))?;

        tracing::info!(parent: &self.span, user_id = id, "user deleted");
        Ok(())
    }
}
