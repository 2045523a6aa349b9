// ABOUTME: Synthetic history configuration for back-filling past days of the week
// ABOUTME: Variance, macro split ratios, and fixed micronutrient values for generated entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Share of a synthetic day's calories attributed to each macronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share: 0.30
    pub protein: f64,
    /// Carbohydrate share: 0.40
    pub carbs: f64,
    /// Fat share: 0.30
    pub fat: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        }
    }
}

/// Settings for placeholder entries on past days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticHistoryConfig {
    /// Generate placeholder days at all
    pub enabled: bool,
    /// Half-width of the uniform calorie multiplier (0.2 means 0.8..=1.2)
    pub calorie_variance: f64,
    /// Macro split ratios
    pub macro_split: MacroSplitConfig,
    /// Fiber on each generated entry (g)
    pub fiber_g: f64,
    /// Salt on each generated entry (mg)
    pub salt_mg: f64,
    /// Potassium on each generated entry (mg)
    pub potassium_mg: f64,
    /// Fixed RNG seed for reproducible demos
    pub seed: Option<u64>,
}

impl Default for SyntheticHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            calorie_variance: 0.2,
            macro_split: MacroSplitConfig::default(),
            fiber_g: 20.0,
            salt_mg: 2000.0,
            potassium_mg: 3000.0,
            seed: None,
        }
    }
}

impl SyntheticHistoryConfig {
    /// Validate the variance, the split ratios and the micronutrient amounts
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the variance is outside `[0, 1)`
    /// or a micronutrient is negative, and `ConfigError::InvalidWeights` if the
    /// macro split does not sum to 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.calorie_variance) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_variance must be in [0, 1)",
            ));
        }

        let split = &self.macro_split;
        let ratios = [split.protein, split.carbs, split.fat];
        if ratios.iter().any(|r| !(0.0..=1.0).contains(r)) {
            return Err(ConfigError::ValueOutOfRange(
                "macro split ratios must be between 0 and 1",
            ));
        }
        let sum: f64 = ratios.iter().sum();
        if (sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "macro split ratios must sum to 1.0",
            ));
        }

        if [self.fiber_g, self.salt_mg, self.potassium_mg]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "synthetic micronutrients must be non-negative",
            ));
        }
        Ok(())
    }
}
