//! Run configuration from the environment.

use std::env;

use thiserror::Error;

/// Missing or empty required configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GitHub access token not provided. Set the GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("GitHub organization name not provided. Set the GITHUB_ORG environment variable")]
    MissingOrg,
}

/// Settings read once at startup and passed by reference from then on.
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal or organization access token.
    pub token: String,
    /// Organization login to audit.
    pub org: String,
}

impl Config {
    /// Read `GITHUB_TOKEN` and `GITHUB_ORG`. An empty value counts as missing.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable that is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let org = env::var("GITHUB_ORG")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingOrg)?;
        Ok(Self { token, org })
    }
}
