//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::date::{calculate_age, format_date, parse_date_of_birth, INVALID_DATE_MESSAGE};
use crate::error::DomainResult;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Age in whole years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        calculate_age(self.date_of_birth, today)
    }
}

/// Create/update payload. Updates replace both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRequest {
    /// Display name, 1 to 100 characters
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: String,
    /// Birth date as `YYYY-MM-DD`
    #[serde(alias = "dob")]
    #[validate(custom(function = "validate_date_of_birth", message = "invalid date format"))]
    #[cfg_attr(feature = "openapi", schema(example = "2000-01-01"))]
    pub date_of_birth: String,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Parsed birth date.
    pub fn parsed_date_of_birth(&self) -> DomainResult<NaiveDate> {
        parse_date_of_birth(&self.date_of_birth)
    }
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    parse_date_of_birth(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new(INVALID_DATE_MESSAGE))
}

/// User representation returned to clients.
///
/// `age` is only filled in on reads; create and update echo the stored
/// fields without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Birth date as `YYYY-MM-DD`
    pub date_of_birth: String,
    /// Age in whole years (reads only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl UserResponse {
    /// Response for a read, with `age` derived as of `today`.
    pub fn with_age(user: &User, today: NaiveDate) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            date_of_birth: format_date(user.date_of_birth),
            age: Some(user.age_on(today)),
        }
    }

    /// Response for a write, echoing the accepted fields.
    pub fn without_age(id: i64, name: String, date_of_birth: NaiveDate) -> Self {
        Self {
            id,
            name,
            date_of_birth: format_date(date_of_birth),
            age: None,
        }
    }
}

/// One page of users plus the numbers needed to fetch the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserListResponse {
    /// Users on this page, ordered by id
    pub users: Vec<UserResponse>,
    /// Current page (1-indexed)
    pub page: i64,
    /// Page size after clamping
    pub page_size: i64,
    /// Total number of users
    pub total: u64,
    /// Number of pages at this page size
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            name: "Alice".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_request_validates() {
        assert!(UserRequest::new("Alice", "2000-01-01").validate().is_ok());
    }

    #[test]
    fn test_request_rejects_empty_name() {
        let errors = UserRequest::new("", "2000-01-01").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_request_name_length_counts_characters() {
        assert!(UserRequest::new("é".repeat(100), "2000-01-01").validate().is_ok());
        assert!(UserRequest::new("a".repeat(101), "2000-01-01").validate().is_err());
    }

    #[test]
    fn test_request_rejects_bad_date() {
        let errors = UserRequest::new("Alice", "13/01/2020").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date_of_birth"));
    }

    #[test]
    fn test_request_accepts_dob_alias() {
        let request: UserRequest =
            serde_json::from_str(r#"{"name":"Bob","dob":"1990-05-10"}"#).unwrap();
        assert_eq!(request.date_of_birth, "1990-05-10");
    }

    #[test]
    fn test_response_with_age() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let response = UserResponse::with_age(&user(), today);
        assert_eq!(response.date_of_birth, "2000-01-01");
        assert_eq!(response.age, Some(26));
    }

    #[test]
    fn test_response_without_age_omits_field() {
        let u = user();
        let response = UserResponse::without_age(u.id, u.name, u.date_of_birth);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("age").is_none());
        assert_eq!(json["date_of_birth"], "2000-01-01");
    }
}
