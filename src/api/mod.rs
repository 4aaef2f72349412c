//! Activities API
//!
//! Wire contract of the activities service and the transport seam the
//! client is built on.
//!
//! ## Endpoints
//!
//! - `GET    /auth/status`                      - validate a bearer token
//! - `POST   /auth/login?username&password`     - obtain a token
//! - `POST   /auth/logout`                      - drop a token
//! - `GET    /activities`                       - full catalog
//! - `POST   /activities/{name}/signup?email`   - register a student
//! - `DELETE /activities/{name}/unregister?email` - remove a student

mod client;
pub mod dto;
mod error;
#[cfg(feature = "native")]
mod http;
mod transport;

pub use client::ActivitiesClient;
pub use error::ApiError;
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
