use super::defaults::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use super::error::ConfigError;
use crate::domain::Responder;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Responder identifiers addressed by the typed wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderIds {
    pub merchant_intelligence: String,
    pub evidence_correlator: String,
    pub risk_scoring: String,
    pub case_manager: String,
    pub resolution: String,
}

impl Default for ResponderIds {
    fn default() -> Self {
        Self {
            merchant_intelligence: Responder::MerchantIntelligence.default_id().to_string(),
            evidence_correlator: Responder::EvidenceCorrelator.default_id().to_string(),
            risk_scoring: Responder::RiskScoring.default_id().to_string(),
            case_manager: Responder::CaseManager.default_id().to_string(),
            resolution: Responder::Resolution.default_id().to_string(),
        }
    }
}

impl ResponderIds {
    pub fn get(&self, responder: Responder) -> &str {
        match responder {
            Responder::MerchantIntelligence => &self.merchant_intelligence,
            Responder::EvidenceCorrelator => &self.evidence_correlator,
            Responder::RiskScoring => &self.risk_scoring,
            Responder::CaseManager => &self.case_manager,
            Responder::Resolution => &self.resolution,
        }
    }

    pub(crate) fn slot_mut(&mut self, responder: Responder) -> &mut String {
        match responder {
            Responder::MerchantIntelligence => &mut self.merchant_intelligence,
            Responder::EvidenceCorrelator => &mut self.evidence_correlator,
            Responder::RiskScoring => &mut self.risk_scoring,
            Responder::CaseManager => &mut self.case_manager,
            Responder::Resolution => &mut self.resolution,
        }
    }
}

/// Read-only configuration for the agent facade.
///
/// Built once at startup (file, then environment, then command line) and
/// handed to [`AgentClient`](crate::agent::AgentClient) by value. Nothing in
/// the call path reads the process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AgentsConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub responders: ResponderIds,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            responders: ResponderIds::default(),
        }
    }
}

// Hand-written so the credential never reaches a log line.
impl fmt::Debug for AgentsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentsConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("responders", &self.responders)
            .finish()
    }
}

impl AgentsConfig {
    /// Load configuration from an optional TOML file, then apply overrides
    /// from the process environment (after loading `config/.env`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Defaults with environment overrides resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        super::loader::apply_env(Self::default(), DEFAULT_API_KEY_ENV, lookup)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_responder(mut self, responder: Responder, id: impl Into<String>) -> Self {
        *self.responders.slot_mut(responder) = id.into();
        self
    }

    pub fn responder_id(&self, responder: Responder) -> &str {
        self.responders.get(responder)
    }
}
