//! Agent invocation core for card-dispute triage.
//!
//! [`agent::AgentClient`] sends an instruction plus context to a named
//! responder and parses the reply into a typed payload. The typed wrappers in
//! [`responders`] cover the five dispute responders, [`batch`] fans calls out
//! in parallel, and [`workflow`] strings them into the investigation and
//! resolution flows.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use application::{agent, batch, responders, workflow};
pub use config::{AgentsConfig, ConfigError};
pub use domain::{inputs, payloads};
pub use infrastructure::dispatch;
