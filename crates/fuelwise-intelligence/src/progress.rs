// ABOUTME: Goal progress read model for every tracked nutrient and water
// ABOUTME: Consumed, target, remaining, and percent-of-target per nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelwise_core::models::{Nutrient, NutrientProfile};
use serde::Serialize;

/// Progress towards one nutrient target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProgress {
    /// Which nutrient
    pub nutrient: Nutrient,
    /// Amount logged so far
    pub consumed: f64,
    /// Effective target
    pub target: f64,
    /// `max(0, target - consumed)`
    pub remaining: f64,
    /// `consumed / target * 100`, or 0 when the target is 0
    pub percent: f64,
}

impl NutrientProgress {
    fn new(nutrient: Nutrient, consumed: f64, target: f64) -> Self {
        Self {
            nutrient,
            consumed,
            target,
            remaining: (target - consumed).max(0.0),
            percent: percent_of(consumed, target),
        }
    }

    /// Whether the target has been reached or passed
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.consumed >= self.target
    }
}

/// Water intake against the daily water goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaterProgress {
    /// Logged water (mL)
    pub consumed_ml: u32,
    /// Target (mL)
    pub target_ml: u32,
    /// Still to drink (mL)
    pub remaining_ml: u32,
}

impl WaterProgress {
    /// Water progress from the logged amount and the goal
    #[must_use]
    pub const fn new(consumed_ml: u32, target_ml: u32) -> Self {
        Self {
            consumed_ml,
            target_ml,
            remaining_ml: target_ml.saturating_sub(consumed_ml),
        }
    }

    /// Percent of the target, 0 when the target is 0
    #[must_use]
    pub fn percent(&self) -> f64 {
        percent_of(f64::from(self.consumed_ml), f64::from(self.target_ml))
    }
}

/// Progress on all seven nutrients plus water
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// One row per nutrient in `Nutrient::ALL` order
    pub nutrients: [NutrientProgress; 7],
    /// Water row
    pub water: WaterProgress,
}

impl GoalProgress {
    /// Row for a single nutrient
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> &NutrientProgress {
        // rows follow Nutrient::ALL, which is declaration order
        &self.nutrients[nutrient as usize]
    }
}

/// Compare intake totals against effective targets
///
/// Salt is reported the same way as every other nutrient; treating its
/// target as a ceiling is left to the presentation layer.
#[must_use]
pub fn goal_progress(totals: &NutrientProfile, targets: &NutrientProfile, water: WaterProgress) -> GoalProgress {
    GoalProgress {
        nutrients: Nutrient::ALL.map(|n| NutrientProgress::new(n, totals.get(n), targets.get(n))),
        water,
    }
}

fn percent_of(consumed: f64, target: f64) -> f64 {
    if target > 0.0 {
        consumed / target * 100.0
    } else {
        0.0
    }
}
