//! API token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{Result, SecaError};

/// Token resolution with fallback logic
pub struct TokenResolver {
    endpoint: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given endpoint
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (SECA_TOKEN, SECA_API_TOKEN - in order)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_with(cli_token, |name| std::env::var(name).ok())
    }

    fn resolve_with<F>(&self, cli_token: Option<&str>, lookup_env: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Some(token) = lookup_env(env_var).filter(|t| !t.is_empty()) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        Err(SecaError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        format!(
            "No API token found for endpoint '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      secactl --token <TOKEN>\n\
             2. Environment var:   export SECA_TOKEN=<TOKEN>  (also: SECA_API_TOKEN)\n\
             \n\
             Checked: env vars [{}]",
            self.endpoint, env_vars
        )
    }
}
