// ABOUTME: Goal adjustment configuration for situational target modifiers
// ABOUTME: Training-day calorie/carb bonuses and the step-count carb bonus threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Additive modifiers applied on top of the base goal profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Extra energy on a training day (kcal): 300
    pub training_day_calorie_bonus: f64,
    /// Extra carbohydrate on a training day (g): 50
    pub training_day_carb_bonus: f64,
    /// Steps that must be exceeded (strictly) to earn carbs: 10 000
    pub step_bonus_threshold: u32,
    /// Earned carbohydrate once the step threshold is exceeded (g): 30
    pub step_carb_bonus: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            training_day_calorie_bonus: 300.0,
            training_day_carb_bonus: 50.0,
            step_bonus_threshold: 10_000,
            step_carb_bonus: 30.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Validate that every bonus is a finite, non-negative amount
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a negative or non-finite bonus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bonuses = [
            self.training_day_calorie_bonus,
            self.training_day_carb_bonus,
            self.step_carb_bonus,
        ];
        if bonuses.iter().any(|b| !b.is_finite() || *b < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "goal adjustment bonuses must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
