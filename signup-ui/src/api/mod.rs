//! Browser Platform Adapters
//!
//! `gloo-net` transport and `localStorage` token store for the client core.

mod storage;
mod transport;

pub use storage::LocalStorageTokenStore;
pub use transport::{get_api_base, GlooTransport};
