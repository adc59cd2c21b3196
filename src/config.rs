//! # Feature: Configuration System
//!
//! Resolves Discord credentials from CLI flags or named environment variables
//! and sets up process-wide logging, all before the first network call.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial flag/environment credential resolution

use anyhow::{Context, Result};
use env_logger::Env;
use log::LevelFilter;
use std::env;
use std::str::FromStr;

/// Validated credentials for one purge run
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
}

/// Raw credential options as given on the command line, before any
/// environment lookup has happened.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    pub discord_token: Option<String>,
    pub discord_token_var: Option<String>,
    pub discord_app_id: Option<String>,
    pub discord_app_id_var: Option<String>,
}

impl Config {
    /// Resolve credentials from the command-line options.
    ///
    /// Each credential has a direct option and a `-var` option naming an
    /// environment variable; when the `-var` option is set, the variable wins
    /// and the direct value is ignored. Both credentials must be non-empty
    /// after resolution, and the application ID must be a numeric snowflake.
    pub fn resolve(sources: &CredentialSources) -> Result<Self> {
        let discord_token = resolve_value(
            sources.discord_token.as_deref(),
            sources.discord_token_var.as_deref(),
        );
        let application_id = resolve_value(
            sources.discord_app_id.as_deref(),
            sources.discord_app_id_var.as_deref(),
        );

        if discord_token.is_empty() {
            anyhow::bail!(
                "Discord token is required - specify --discord-token or --discord-token-var"
            );
        }

        if application_id.is_empty() {
            anyhow::bail!(
                "Discord application ID is required - specify --discord-app-id or --discord-app-id-var"
            );
        }

        let application_id = application_id
            .parse::<u64>()
            .with_context(|| format!("Invalid Discord application ID '{application_id}'"))?;

        Ok(Config {
            discord_token,
            application_id,
        })
    }
}

/// Apply the variable-name-over-direct-value precedence for one credential.
/// An unset variable resolves to empty and is caught by the emptiness checks.
fn resolve_value(direct: Option<&str>, var_name: Option<&str>) -> String {
    match var_name {
        Some(name) if !name.is_empty() => env::var(name).unwrap_or_default(),
        _ => direct.unwrap_or_default().to_string(),
    }
}

/// Load a `.env` file from the working directory into the environment.
///
/// A missing file is fine; any other failure (unreadable file, bad syntax)
/// is fatal.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

/// Parse a `--log-level` value into a level filter.
pub fn parse_log_level(log_level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(log_level)
        .map_err(|_| anyhow::anyhow!("Failed to parse log level '{log_level}'"))
}

/// Initialize process-wide logging at the requested level.
///
/// Called once at startup. `RUST_LOG` still overrides the flag value, as
/// usual for `env_logger`.
pub fn init_logging(log_level: &str) -> Result<()> {
    let level = parse_log_level(log_level)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str())).init();

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
