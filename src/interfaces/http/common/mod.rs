//! Shared HTTP plumbing: response envelope, outcome mapping, extractors

pub mod api_response;
pub mod validated_json;

pub use api_response::{respond, ApiResponse};
pub use validated_json::ValidatedJson;
