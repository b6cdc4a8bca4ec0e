//! Dispatch transport
//!
//! Delivers one `{ agentId, message }` envelope to the dispatch endpoint and
//! hands back the reply text.
//!
//! # Structure
//! - `types` - Wire body and error types
//! - `traits` - Dispatcher trait
//! - `reply` - Reply text extraction from the endpoint body
//! - `http` - reqwest-backed dispatcher

pub mod http;
pub mod reply;
pub mod traits;
pub mod types;

pub use http::HttpDispatcher;
pub use traits::Dispatcher;
pub use types::{DispatchBody, DispatchError};
