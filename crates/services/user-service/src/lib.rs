//! User Service Library
//!
//! The persistence gateway and domain service behind the user API. The
//! transport crate wires these together in-process; nothing here knows
//! about HTTP.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::telemetry::component_span;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build the user service over an open database, each layer logging under
/// its own component span.
pub fn build_user_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(
        db.get_connection(),
        component_span("user_repository"),
    ));
    Arc::new(UserManager::new(user_repo, component_span("user_service")))
}
