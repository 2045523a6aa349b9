// ABOUTME: Collaborator call configuration with timeout and coaching fallback text
// ABOUTME: Loaded from defaults plus FUELWISE_COLLABORATOR_* environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;

use fuelwise_intelligence::ConfigError;
use serde::{Deserialize, Serialize};

use crate::constants::collaborators;

/// Limits and fallbacks for external collaborator calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorConfig {
    /// Upper bound on any single collaborator call
    pub timeout_secs: u64,
    /// Text shown when coaching advice cannot be produced
    pub coaching_fallback: String,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: collaborators::DEFAULT_TIMEOUT_SECS,
            coaching_fallback: collaborators::COACHING_FALLBACK.to_owned(),
        }
    }
}

impl CollaboratorConfig {
    /// Load from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for a non-numeric timeout and
    /// `ConfigError::ValueOutOfRange` for a zero timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = env::var("FUELWISE_COLLABORATOR_TIMEOUT_SECS") {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::Parse("Invalid FUELWISE_COLLABORATOR_TIMEOUT_SECS".to_owned())
            })?;
        }
        if let Ok(message) = env::var("FUELWISE_COACHING_FALLBACK") {
            if !message.trim().is_empty() {
                config.coaching_fallback = message;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "collaborator timeout must be at least one second",
            ));
        }
        Ok(())
    }

    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
