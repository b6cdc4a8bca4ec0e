pub mod dispute;
pub mod inputs;
pub mod payloads;
pub mod types;

pub use dispute::{Decision, DisputeStatus, Priority, RecommendedAction, RiskLevel};
pub use payloads::AgentPayload;
pub use types::{AgentRequest, Responder};
