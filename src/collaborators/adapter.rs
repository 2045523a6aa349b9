// ABOUTME: Boundary adapter turning collaborator meal analyses into log entries
// ABOUTME: Sanitises untrusted nutrient values before they reach the accounting core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use fuelwise_core::models::{LogEntry, MealSlot, NutrientProfile};
use tracing::{debug, warn};

use super::models::MealAnalysis;

impl MealAnalysis {
    /// Build the log entry for this analysis
    ///
    /// Negative or non-finite nutrient values are replaced with zero. Reported
    /// calories are kept as-is, even when zero. An unrecognised meal type
    /// becomes a snack.
    #[must_use]
    pub fn into_entry(
        self,
        timestamp: DateTime<Utc>,
        context_tags: BTreeSet<String>,
        images: Vec<String>,
    ) -> LogEntry {
        let nutrients = sanitize(self.nutrients);
        let meal_slot = self.meal_slot.parse().unwrap_or_else(|_| {
            debug!(reported = %self.meal_slot, "Unrecognised meal type, filing as snack");
            MealSlot::Snack
        });

        let mut entry = LogEntry::new(meal_slot, nutrients, timestamp)
            .with_inflammation_flags(self.inflammation_flags)
            .with_images(images);
        entry.context_tags = context_tags;
        if !self.insight.trim().is_empty() {
            entry = entry.with_insight(self.insight);
        }
        entry
    }
}

fn sanitize(reported: NutrientProfile) -> NutrientProfile {
    let nutrients = reported.clamped_non_negative();
    if nutrients != reported {
        warn!(?reported, "Clamped invalid nutrient values from meal analysis");
    }
    nutrients
}
