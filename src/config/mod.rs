// ABOUTME: Environment-driven configuration for the pace calculator
// ABOUTME: Reads output format and VDOT match strategy, falling back to defaults on bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use tracing::warn;
use vdot_core::constants::env_config;

use crate::formatters::OutputFormat;
use crate::intelligence::MatchStrategy;

/// Calculator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// How the report is rendered
    pub output_format: OutputFormat,
    /// Which qualifying VDOT row wins
    pub match_strategy: MatchStrategy,
}

impl CalculatorConfig {
    /// Load configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            output_format: env_or_default(env_config::OUTPUT_FORMAT),
            match_strategy: env_or_default(env_config::MATCH_STRATEGY),
        }
    }

    /// Override the output format
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Override the match strategy
    #[must_use]
    pub const fn with_match_strategy(mut self, match_strategy: MatchStrategy) -> Self {
        self.match_strategy = match_strategy;
        self
    }
}

fn env_or_default<T>(key: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!(key, value = %value, error = %e, "Ignoring invalid configuration value");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var(env_config::OUTPUT_FORMAT);
        env::remove_var(env_config::MATCH_STRATEGY);
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear();
        assert_eq!(CalculatorConfig::from_env(), CalculatorConfig::default());
    }

    #[test]
    #[serial]
    fn test_reads_env() {
        clear();
        env::set_var(env_config::OUTPUT_FORMAT, "json");
        env::set_var(env_config::MATCH_STRATEGY, "tightest");
        let config = CalculatorConfig::from_env();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.match_strategy, MatchStrategy::Tightest);
        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_env_falls_back() {
        clear();
        env::set_var(env_config::OUTPUT_FORMAT, "yaml");
        let config = CalculatorConfig::from_env();
        assert_eq!(config.output_format, OutputFormat::Text);
        clear();
    }

    #[test]
    fn test_overrides() {
        let config = CalculatorConfig::default()
            .with_output_format(OutputFormat::Json)
            .with_match_strategy(MatchStrategy::Tightest);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.match_strategy, MatchStrategy::Tightest);
    }
}
