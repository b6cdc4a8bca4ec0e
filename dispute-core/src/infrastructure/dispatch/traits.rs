//! Dispatcher trait

use super::types::DispatchError;
use async_trait::async_trait;

/// Sends a combined message to a responder and returns its reply text.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Deliver `message` to the responder identified by `agent_id`.
    async fn dispatch(&self, agent_id: &str, message: &str) -> Result<String, DispatchError>;
}
