//! DTO for the hello endpoint.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}
