// ABOUTME: Engine configuration for goal adjustment, meal selection, and synthetic history
// ABOUTME: Orchestrates domain configs and provides env-driven loading with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Every tunable constant of the accounting engine lives here, grouped by domain:
//! - `goals` - training-day and step bonuses
//! - `meals` - next-meal hour cutoffs
//! - `history` - synthetic back-fill of past days
//!
//! Defaults reproduce the product behaviour exactly. Any field can be
//! overridden through a `FUELWISE_*` environment variable.

pub mod error;
pub mod goals;
pub mod history;
pub mod meals;

pub use error::ConfigError;
pub use goals::GoalAdjustmentConfig;
pub use history::{MacroSplitConfig, SyntheticHistoryConfig};
pub use meals::MealSelectionConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Situational goal modifiers
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Next-meal hour cutoffs
    pub meal_selection: MealSelectionConfig,
    /// Synthetic history generation
    pub synthetic_history: SyntheticHistoryConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every domain section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.goal_adjustment.validate()?;
        self.meal_selection.validate()?;
        self.synthetic_history.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_optional_env_var<T: FromStr>(
        env_var_name: &str,
        target: &mut Option<T>,
    ) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            let val = val.trim();
            *target = if val.is_empty() || val.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    val.parse()
                        .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?,
                )
            };
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let goals = &mut self.goal_adjustment;
        Self::apply_env_var(
            "FUELWISE_TRAINING_DAY_CALORIE_BONUS",
            &mut goals.training_day_calorie_bonus,
        )?;
        Self::apply_env_var(
            "FUELWISE_TRAINING_DAY_CARB_BONUS",
            &mut goals.training_day_carb_bonus,
        )?;
        Self::apply_env_var(
            "FUELWISE_STEP_BONUS_THRESHOLD",
            &mut goals.step_bonus_threshold,
        )?;
        Self::apply_env_var("FUELWISE_STEP_CARB_BONUS", &mut goals.step_carb_bonus)?;

        let meals = &mut self.meal_selection;
        Self::apply_env_var(
            "FUELWISE_BREAKFAST_CUTOFF_HOUR",
            &mut meals.breakfast_cutoff_hour,
        )?;
        Self::apply_env_var("FUELWISE_LUNCH_CUTOFF_HOUR", &mut meals.lunch_cutoff_hour)?;
        Self::apply_optional_env_var(
            "FUELWISE_DINNER_CUTOFF_HOUR",
            &mut meals.dinner_cutoff_hour,
        )?;

        let history = &mut self.synthetic_history;
        Self::apply_env_var("FUELWISE_SYNTHETIC_HISTORY", &mut history.enabled)?;
        Self::apply_env_var(
            "FUELWISE_SYNTHETIC_CALORIE_VARIANCE",
            &mut history.calorie_variance,
        )?;
        Self::apply_optional_env_var("FUELWISE_SYNTHETIC_SEED", &mut history.seed)?;

        Ok(self)
    }
}
