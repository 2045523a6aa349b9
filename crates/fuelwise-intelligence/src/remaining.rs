// ABOUTME: Remaining-macro calculator for meal-completion requests
// ABOUTME: Non-negative per-macro shortfall between intake totals and effective goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelwise_core::models::{NutrientProfile, RemainingMacros};

/// Macros still needed to reach `goals` given what `totals` already covers
///
/// Each of calories, protein, carbs and fat is `max(0, goal - total)`.
/// Pass an `&EffectiveGoalProfile` for `goals`; it dereferences to the
/// adjusted profile.
#[must_use]
pub fn remaining_macros(totals: &NutrientProfile, goals: &NutrientProfile) -> RemainingMacros {
    let shortfall = |goal: f64, total: f64| (goal - total).max(0.0);
    RemainingMacros {
        calories: shortfall(goals.calories, totals.calories),
        protein: shortfall(goals.protein, totals.protein),
        carbs: shortfall(goals.carbs, totals.carbs),
        fat: shortfall(goals.fat, totals.fat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelwise_core::models::EffectiveGoalProfile;

    #[test]
    fn test_shortfall_is_exact() {
        let goals = NutrientProfile::macros_only(2500.0, 180.0, 280.0, 70.0);
        let totals = NutrientProfile::macros_only(1200.0, 90.0, 150.0, 40.0);
        assert_eq!(
            remaining_macros(&totals, &goals),
            RemainingMacros {
                calories: 1300.0,
                protein: 90.0,
                carbs: 130.0,
                fat: 30.0,
            }
        );
    }

    #[test]
    fn test_over_target_clamps_to_zero() {
        let goals = NutrientProfile::macros_only(2000.0, 150.0, 200.0, 60.0);
        let totals = NutrientProfile::macros_only(2400.0, 150.0, 90.0, 75.0);
        let remaining = remaining_macros(&totals, &goals);
        assert_eq!(remaining.calories, 0.0);
        assert_eq!(remaining.protein, 0.0);
        assert_eq!(remaining.carbs, 110.0);
        assert_eq!(remaining.fat, 0.0);
        assert!(!remaining.is_satisfied());
    }

    #[test]
    fn test_zero_goals() {
        let remaining = remaining_macros(
            &NutrientProfile::macros_only(300.0, 10.0, 40.0, 9.0),
            &NutrientProfile::zero(),
        );
        assert_eq!(remaining, RemainingMacros::default());
        assert!(remaining.is_satisfied());
    }

    #[test]
    fn test_accepts_effective_profile() {
        let effective =
            EffectiveGoalProfile::derived(NutrientProfile::macros_only(1800.0, 120.0, 180.0, 60.0));
        let remaining = remaining_macros(&NutrientProfile::zero(), &effective);
        assert_eq!(remaining.calories, 1800.0);
    }
}
