pub mod cors;
pub mod response;
pub mod timeout;

pub use cors::{cors_layer, preflight_no_content};
pub use response::{ApiResponse, ApiResult};
pub use timeout::handle_timeout_error;
