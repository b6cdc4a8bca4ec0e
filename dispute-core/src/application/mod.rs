pub mod agent;
pub mod batch;
pub mod responders;
pub mod workflow;
