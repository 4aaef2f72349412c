//! Data Transfer Objects
//!
//! Response bodies of the activities service, as they arrive on the wire.

use indexmap::IndexMap;
use serde::Deserialize;

/// `GET /auth/status`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
}

/// `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Signup / unregister success body
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body. `detail` is usually a string but validation errors use a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// One entry of the `GET /activities` mapping
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// `GET /activities`: activity name to details, in server order
pub type ActivityCatalog = IndexMap<String, ActivityDetails>;
