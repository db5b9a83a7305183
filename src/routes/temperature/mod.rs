mod handlers;
mod types;

pub use handlers::{add_temperature, list_temperatures};
pub use types::{coerce_number, MessageResponse, ReadingRequest, ReadingResponse};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_add_temperature, __path_list_temperatures};
