use super::app::AgentsConfig;
use super::defaults::{DEFAULT_API_KEY_ENV, DEFAULT_ENV_PATH, env};
use super::error::ConfigError;
use crate::domain::Responder;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub responders: RawResponders,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawResponders {
    pub merchant_intelligence: Option<String>,
    pub evidence_correlator: Option<String>,
    pub risk_scoring: Option<String>,
    pub case_manager: Option<String>,
    pub resolution: Option<String>,
}

impl RawResponders {
    fn get(&self, responder: Responder) -> Option<&String> {
        match responder {
            Responder::MerchantIntelligence => self.merchant_intelligence.as_ref(),
            Responder::EvidenceCorrelator => self.evidence_correlator.as_ref(),
            Responder::RiskScoring => self.risk_scoring.as_ref(),
            Responder::CaseManager => self.case_manager.as_ref(),
            Responder::Resolution => self.resolution.as_ref(),
        }
    }
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(DEFAULT_ENV_PATH);
    });
}

/// Load configuration from an optional file and the process environment
pub fn load_config(path: Option<&Path>) -> Result<AgentsConfig, ConfigError> {
    ensure_env_loaded();
    let (config, api_key_env) = match path {
        Some(path) => read_config(path)?,
        None => (AgentsConfig::default(), DEFAULT_API_KEY_ENV.to_string()),
    };
    apply_env(config, &api_key_env, |key| std::env::var(key).ok())
}

fn read_config(path: &Path) -> Result<(AgentsConfig, String), ConfigError> {
    debug!(path = %path.display(), "Reading agent configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed, path)
}

fn validate_and_build(
    parsed: RawConfig,
    path: &Path,
) -> Result<(AgentsConfig, String), ConfigError> {
    let origin = path.display().to_string();
    let mut config = AgentsConfig::default();

    if let Some(endpoint) = parsed.endpoint {
        if endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint { origin });
        }
        config.endpoint = endpoint.trim().to_string();
    }

    if let Some(secs) = parsed.timeout_secs {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                origin,
                value: secs.to_string(),
            });
        }
        config.timeout = Duration::from_secs(secs);
    }

    for responder in Responder::ALL {
        if let Some(id) = parsed.responders.get(responder) {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyIdentifier {
                    origin: format!("{origin} [responders].{}", responder.config_key()),
                });
            }
            *config.responders.slot_mut(responder) = id.trim().to_string();
        }
    }

    let api_key_env = parsed
        .api_key_env
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    Ok((config, api_key_env))
}

/// Apply environment overrides on top of `config`.
///
/// Unset or blank variables leave the current value in place.
pub(super) fn apply_env<F>(
    mut config: AgentsConfig,
    api_key_env: &str,
    lookup: F,
) -> Result<AgentsConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(endpoint) = read(env::ENDPOINT) {
        debug!(env_var = env::ENDPOINT, "Overriding dispatch endpoint from environment");
        config.endpoint = endpoint.trim().to_string();
    }

    if let Some(raw) = read(env::TIMEOUT_SECS) {
        let secs = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::InvalidTimeout {
                origin: env::TIMEOUT_SECS.to_string(),
                value: raw.clone(),
            })?;
        config.timeout = Duration::from_secs(secs);
    }

    for responder in Responder::ALL {
        if let Some(id) = read(responder.env_var()) {
            debug!(
                responder = responder.display_name(),
                env_var = responder.env_var(),
                "Overriding responder identifier from environment"
            );
            *config.responders.slot_mut(responder) = id.trim().to_string();
        }
    }

    match read(api_key_env) {
        Some(key) => config.api_key = Some(key.trim().to_string()),
        None => debug!(env_var = api_key_env, "No agent API key configured"),
    }

    Ok(config)
}
