pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/agents/chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_KEY_ENV: &str = "AGENT_API_KEY";
pub const DEFAULT_ENV_PATH: &str = "config/.env";

pub const DEFAULT_MERCHANT_INTELLIGENCE_ID: &str = "merchant-intelligence";
pub const DEFAULT_EVIDENCE_CORRELATOR_ID: &str = "evidence-correlator";
pub const DEFAULT_RISK_SCORING_ID: &str = "risk-scoring";
pub const DEFAULT_CASE_MANAGER_ID: &str = "case-manager";
pub const DEFAULT_RESOLUTION_ID: &str = "resolution";

/// Environment variables recognised by the loader.
pub mod env {
    pub const ENDPOINT: &str = "AGENT_API_BASE_URL";
    pub const TIMEOUT_SECS: &str = "AGENT_TIMEOUT_SECS";
    pub const MERCHANT_INTELLIGENCE: &str = "MERCHANT_INTELLIGENCE_AGENT_ID";
    pub const EVIDENCE_CORRELATOR: &str = "EVIDENCE_CORRELATOR_AGENT_ID";
    pub const RISK_SCORING: &str = "RISK_SCORING_AGENT_ID";
    pub const CASE_MANAGER: &str = "CASE_MANAGER_AGENT_ID";
    pub const RESOLUTION: &str = "RESOLUTION_AGENT_ID";
}
