// ABOUTME: Daily dashboard read model combining every per-day projection of a session
// ABOUTME: Effective goals, totals, per-slot breakdown, remaining macros, next meal, progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use fuelwise_core::models::{EffectiveGoalProfile, MealSlot, NutrientProfile, RemainingMacros};
use fuelwise_intelligence::GoalProgress;
use serde::Serialize;

use crate::session::NutritionSession;

/// Daily overview with key metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyDashboard {
    /// Hour the overview was computed for
    pub current_hour: u32,
    /// Number of entries logged today
    pub entry_count: usize,
    /// Targets after situational modifiers
    pub effective_goals: EffectiveGoalProfile,
    /// Everything logged today
    pub totals: NutrientProfile,
    /// Totals per meal slot that has entries
    pub by_slot: BTreeMap<MealSlot, NutrientProfile>,
    /// Macros still needed
    pub remaining: RemainingMacros,
    /// Suggested next meal
    pub next_meal: MealSlot,
    /// Per-nutrient and water progress
    pub progress: GoalProgress,
}

impl DailyDashboard {
    /// Compute the overview from the session's current state
    #[must_use]
    pub fn from_session(session: &NutritionSession, current_hour: u32) -> Self {
        Self {
            current_hour,
            entry_count: session.entries().len(),
            effective_goals: session.effective_goals(),
            totals: session.totals(),
            by_slot: session.totals_by_slot(),
            remaining: session.remaining(),
            next_meal: session.next_meal(current_hour),
            progress: session.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fuelwise_core::models::{GoalProfile, LogEntry};
    use fuelwise_intelligence::EngineConfig;

    #[test]
    fn test_dashboard_matches_session() {
        let mut session = NutritionSession::with_config(GoalProfile::default(), EngineConfig::default());
        let ts = Utc.with_ymd_and_hms(2025, 3, 12, 7, 45, 0).unwrap();
        session
            .add_entry(LogEntry::new(
                MealSlot::Breakfast,
                NutrientProfile::macros_only(450.0, 35.0, 50.0, 12.0),
                ts,
            ))
            .unwrap();

        let dashboard = session.dashboard(9);
        assert_eq!(dashboard.entry_count, 1);
        assert_eq!(dashboard.next_meal, MealSlot::Lunch);
        assert_eq!(dashboard.totals, session.totals());
        assert_eq!(dashboard.remaining, session.remaining());
        assert_eq!(dashboard.by_slot.len(), 1);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["next_meal"], "lunch");
        assert_eq!(json["by_slot"]["breakfast"]["calories"], 450.0);
    }
}
