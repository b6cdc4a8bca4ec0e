use crate::config::defaults::{self, env};
use serde_json::{Map, Value};
use std::fmt;

/// The five logical responders the dispute workflow talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Responder {
    MerchantIntelligence,
    EvidenceCorrelator,
    RiskScoring,
    CaseManager,
    Resolution,
}

impl Responder {
    pub const ALL: [Responder; 5] = [
        Responder::MerchantIntelligence,
        Responder::EvidenceCorrelator,
        Responder::RiskScoring,
        Responder::CaseManager,
        Responder::Resolution,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Responder::MerchantIntelligence => "Merchant Intelligence Agent",
            Responder::EvidenceCorrelator => "Evidence Correlator Agent",
            Responder::RiskScoring => "Risk Scoring Agent",
            Responder::CaseManager => "Case Manager Agent",
            Responder::Resolution => "Resolution Agent",
        }
    }

    pub fn default_id(self) -> &'static str {
        match self {
            Responder::MerchantIntelligence => defaults::DEFAULT_MERCHANT_INTELLIGENCE_ID,
            Responder::EvidenceCorrelator => defaults::DEFAULT_EVIDENCE_CORRELATOR_ID,
            Responder::RiskScoring => defaults::DEFAULT_RISK_SCORING_ID,
            Responder::CaseManager => defaults::DEFAULT_CASE_MANAGER_ID,
            Responder::Resolution => defaults::DEFAULT_RESOLUTION_ID,
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Responder::MerchantIntelligence => env::MERCHANT_INTELLIGENCE,
            Responder::EvidenceCorrelator => env::EVIDENCE_CORRELATOR,
            Responder::RiskScoring => env::RISK_SCORING,
            Responder::CaseManager => env::CASE_MANAGER,
            Responder::Resolution => env::RESOLUTION,
        }
    }

    /// Key used under `[responders]` in the TOML file.
    pub fn config_key(self) -> &'static str {
        match self {
            Responder::MerchantIntelligence => "merchant_intelligence",
            Responder::EvidenceCorrelator => "evidence_correlator",
            Responder::RiskScoring => "risk_scoring",
            Responder::CaseManager => "case_manager",
            Responder::Resolution => "resolution",
        }
    }
}

impl fmt::Display for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One call to a responder: who to address, what to ask, and the data to
/// ask about.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRequest {
    /// Responder identifier as understood by the dispatch endpoint.
    pub agent_id: String,
    /// Name used in log lines; defaults to the identifier.
    pub display_name: String,
    pub instruction: String,
    pub context: Option<Map<String, Value>>,
}

impl AgentRequest {
    pub fn new(agent_id: impl Into<String>, instruction: impl Into<String>) -> Self {
        let agent_id = agent_id.into();
        Self {
            display_name: agent_id.clone(),
            agent_id,
            instruction: instruction.into(),
            context: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }
}
