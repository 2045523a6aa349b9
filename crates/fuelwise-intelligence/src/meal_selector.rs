// ABOUTME: Next-meal selector choosing which meal slot to fill next
// ABOUTME: Fixed-priority decision table over logged slots and the current hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fuelwise_core::models::{LogEntry, MealSlot};

use crate::config::{EngineConfig, MealSelectionConfig};

/// Pick the next meal using the global engine configuration
#[must_use]
pub fn select_next_meal<'a, I>(entries: I, current_hour: u32) -> MealSlot
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    select_next_meal_with(entries, current_hour, &EngineConfig::global().meal_selection)
}

/// Pick the next meal slot to fill
///
/// First matching rule wins:
/// 1. no breakfast yet and before the breakfast cutoff: Breakfast
/// 2. no lunch yet and before the lunch cutoff: Lunch
/// 3. no dinner yet (and before the dinner cutoff, if one is set): Dinner
/// 4. Snack
///
/// With the default configuration rule 3 has no hour bound, so an unlogged
/// dinner is suggested even at 3 AM. Hours past 23 behave like late evening.
#[must_use]
pub fn select_next_meal_with<'a, I>(
    entries: I,
    current_hour: u32,
    config: &MealSelectionConfig,
) -> MealSlot
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let (mut has_breakfast, mut has_lunch, mut has_dinner) = (false, false, false);
    for entry in entries {
        match entry.meal_slot {
            MealSlot::Breakfast => has_breakfast = true,
            MealSlot::Lunch => has_lunch = true,
            MealSlot::Dinner => has_dinner = true,
            MealSlot::Snack => {}
        }
    }

    if !has_breakfast && current_hour < config.breakfast_cutoff_hour {
        return MealSlot::Breakfast;
    }
    if !has_lunch && current_hour < config.lunch_cutoff_hour {
        return MealSlot::Lunch;
    }
    let dinner_open = config
        .dinner_cutoff_hour
        .is_none_or(|cutoff| current_hour < cutoff);
    if !has_dinner && dinner_open {
        return MealSlot::Dinner;
    }
    MealSlot::Snack
}
