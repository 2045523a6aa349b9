// ABOUTME: Meal selection configuration for the next-meal decision table
// ABOUTME: Breakfast and lunch hour cutoffs plus the optional dinner cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Hour cutoffs (exclusive, local 24h clock) for suggesting each meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelectionConfig {
    /// Breakfast is suggested only before this hour: 11
    pub breakfast_cutoff_hour: u32,
    /// Lunch is suggested only before this hour: 15
    pub lunch_cutoff_hour: u32,
    /// Dinner cutoff; `None` suggests an unlogged dinner at any hour
    ///
    /// Unset by default, which keeps the product behaviour of offering dinner
    /// even before dawn. Pending product-owner confirmation.
    pub dinner_cutoff_hour: Option<u32>,
}

impl Default for MealSelectionConfig {
    fn default() -> Self {
        Self {
            breakfast_cutoff_hour: 11,
            lunch_cutoff_hour: 15,
            dinner_cutoff_hour: None,
        }
    }
}

impl MealSelectionConfig {
    /// Validate cutoff ordering and bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a cutoff exceeds 24, or
    /// `ConfigError::InvalidRange` if the cutoffs are not in day order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakfast_cutoff_hour > 24 || self.lunch_cutoff_hour > 24 {
            return Err(ConfigError::ValueOutOfRange(
                "meal cutoff hours must be between 0 and 24",
            ));
        }
        if self.breakfast_cutoff_hour >= self.lunch_cutoff_hour {
            return Err(ConfigError::InvalidRange(
                "breakfast_cutoff_hour must be < lunch_cutoff_hour",
            ));
        }
        if let Some(dinner) = self.dinner_cutoff_hour {
            if dinner > 24 {
                return Err(ConfigError::ValueOutOfRange(
                    "dinner_cutoff_hour must be between 0 and 24",
                ));
            }
            if dinner < self.lunch_cutoff_hour {
                return Err(ConfigError::InvalidRange(
                    "dinner_cutoff_hour must be >= lunch_cutoff_hour",
                ));
            }
        }
        Ok(())
    }
}
