//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Built once at process start and handed to whichever collaborator needs
/// it; nothing in this crate reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API key for the metadata lookup client
    pub tmdb_api_key: String,
}

impl Config {
    /// Load configuration, reading a `.env` file first when one is present.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from already-populated environment variables.
    ///
    /// Errors when the TMDB credential is missing; the host process is
    /// expected to abort startup on that error.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            tmdb_api_key: env::var("TMDB_API_KEY").context("TMDB_API_KEY is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var is never mutated from two threads
    #[test]
    fn test_from_env_requires_credential() {
        unsafe { env::remove_var("TMDB_API_KEY") };
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TMDB_API_KEY"));

        unsafe { env::set_var("TMDB_API_KEY", "test-key") };
        let config = Config::from_env().expect("credential set");
        assert_eq!(config.tmdb_api_key, "test-key");

        unsafe { env::remove_var("TMDB_API_KEY") };
    }
}
