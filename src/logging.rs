// ABOUTME: Logging configuration and structured logging setup for the fixture generator
// ABOUTME: Sends diagnostics to stderr so stdout carries only the confirmation line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Logging settings come from the environment and only affect diagnostics. The
//! generated document never depends on them.

use std::env;
use std::io;

use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::service_names;
use crate::errors::{FixtureError, FixtureResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log collectors
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to compact
    #[must_use]
    pub fn from_str_param(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // Quiet by default: a normal run prints nothing but the confirmation
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::HEALTH_EXPORT_FIXTURE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from `RUST_LOG`, `LOG_FORMAT` and
    /// `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_param(&value)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            ..defaults
        }
    }

    /// Directive string handed to the env filter
    #[must_use]
    pub fn filter_directive(&self) -> String {
        if self.level.contains('=') || self.level.contains(',') {
            self.level.clone()
        } else {
            format!("{}={}", service_names::HEALTH_EXPORT_FIXTURE, self.level)
        }
    }

    /// Env filter for this configuration
    ///
    /// An unparsable level falls back to the default level; the parse error is
    /// returned alongside so it can be reported once logging is up.
    #[must_use]
    pub fn env_filter(&self) -> (EnvFilter, Option<String>) {
        match EnvFilter::try_new(self.filter_directive()) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(Self::default().filter_directive()),
                Some(e.to_string()),
            ),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Logging`] if a subscriber is already installed
    pub fn init(&self) -> FixtureResult<()> {
        let (env_filter, rejected) = self.env_filter();
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| FixtureError::Logging {
            reason: e.to_string(),
        })?;

        if let Some(reason) = rejected {
            warn!(log.level = %self.level, %reason, "Invalid log level, using default");
        }
        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Health export fixture generator starting"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
            }
        });
        debug!("Configuration loaded: {config_summary}");
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> FixtureResult<()> {
    LoggingConfig::from_env().init()
}
