// ABOUTME: Goal adjuster deriving effective daily targets from the base goal profile
// ABOUTME: Applies additive training-day and step-count modifiers in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelwise_core::models::{EffectiveGoalProfile, GoalProfile};
use tracing::debug;

use crate::config::{EngineConfig, GoalAdjustmentConfig};

/// Derive the effective goals using the global engine configuration
#[must_use]
pub fn adjust_goals(base: &GoalProfile) -> EffectiveGoalProfile {
    adjust_goals_with(base, &EngineConfig::global().goal_adjustment)
}

/// Derive the effective goals from `base`
///
/// Modifiers are additive and applied in order:
/// 1. training day: calories and carbs bonus
/// 2. steps strictly above the threshold: earned carbs
///
/// `base` is never mutated and the result depends only on its value.
#[must_use]
pub fn adjust_goals_with(base: &GoalProfile, config: &GoalAdjustmentConfig) -> EffectiveGoalProfile {
    let mut targets = base.targets;

    if base.is_training_day {
        targets.calories += config.training_day_calorie_bonus;
        targets.carbs += config.training_day_carb_bonus;
    }

    if base.steps > config.step_bonus_threshold {
        targets.carbs += config.step_carb_bonus;
    }

    debug!(
        training_day = base.is_training_day,
        steps = base.steps,
        calories = targets.calories,
        carbs = targets.carbs,
        "Derived effective goals"
    );

    EffectiveGoalProfile::derived(targets)
}
