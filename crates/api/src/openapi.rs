//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{UserListResponse, UserRequest, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserRequest,
            UserResponse,
            UserListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
