//! User repository implementation.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::Span;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity name used in not-found errors.
pub const USER_ENTITY: &str = "User";

const MAX_BIND: u64 = i64::MAX as u64;

/// User repository trait for dependency injection.
///
/// A lookup, update or delete that touches no row reports
/// [`AppError::NotFound`] rather than an empty success. Any other storage
/// failure surfaces as [`AppError::Database`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the store-assigned id
    async fn insert(&self, name: String, date_of_birth: NaiveDate) -> AppResult<i64>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// One page of users ordered by id, plus the total row count.
    ///
    /// The count and the page are two separate reads without a shared
    /// transaction.
    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<(Vec<User>, u64)>;

    /// Replace name and birth date
    async fn update(&self, id: i64, name: String, date_of_birth: NaiveDate) -> AppResult<()>;

    /// Delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
    span: Span,
}

impl UserStore {
    /// Create new repository instance logging under `span`
    pub fn new(db: DatabaseConnection, span: Span) -> Self {
        Self { db, span }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, name: String, date_of_birth: NaiveDate) -> AppResult<i64> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            dob: Set(date_of_birth),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = UserEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(parent: &self.span, user_id = result.last_insert_id, "user row inserted");
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found(USER_ENTITY)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<(Vec<User>, u64)> {
        let total = UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        // Drivers bind OFFSET and LIMIT as signed 64-bit integers.
        let offset = offset.min(MAX_BIND);
        let limit = limit.min(MAX_BIND);

        if offset >= total {
            tracing::debug!(parent: &self.span, offset, total, "page starts past the last row");
            return Ok((Vec::new(), total));
        }

        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(
            parent: &self.span,
            offset,
            limit,
            returned = models.len(),
            total,
            "user page fetched"
        );

        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn update(&self, id: i64, name: String, date_of_birth: NaiveDate) -> AppResult<()> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(name))
            .col_expr(user::Column::Dob, Expr::value(date_of_birth))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(USER_ENTITY));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(USER_ENTITY));
        }

        Ok(())
    }
}
