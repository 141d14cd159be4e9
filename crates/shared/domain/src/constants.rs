//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement (characters)
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum name length requirement (characters)
pub const MAX_NAME_LENGTH: u64 = 100;

/// Calendar date layout used on the wire and at the storage edge
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact length of a date rendered with [`DATE_FORMAT`]
pub const DATE_LENGTH: usize = 10;

// =============================================================================
// Pagination
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum allowed items per page
pub const MAX_PAGE_SIZE: i64 = 100;

/// Row cap for the unpaginated listing. Rows beyond it are silently dropped.
pub const SIMPLE_LIST_LIMIT: u64 = 10_000;
