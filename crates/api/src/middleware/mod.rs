//! Middleware for request correlation, access logging and panic recovery.

mod panic;
mod request_id;

pub use panic::panic_response;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
