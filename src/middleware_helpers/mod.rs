pub mod request_id;
pub mod request_logging;

pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
pub use request_logging::request_logging_middleware;
