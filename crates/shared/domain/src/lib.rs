//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, its request/response shapes, date handling and the
//! pagination arithmetic used by list endpoints.

pub mod constants;
pub mod date;
pub mod error;
pub mod pagination;
pub mod user;
pub mod validation;

pub use constants::*;
pub use date::{calculate_age, format_date, parse_date_of_birth};
pub use error::{DomainError, DomainResult};
pub use pagination::PageRequest;
pub use user::{User, UserListResponse, UserRequest, UserResponse};
pub use validation::first_validation_message;
