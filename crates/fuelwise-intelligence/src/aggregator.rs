// ABOUTME: Nutrient aggregation over collections of log entries
// ABOUTME: Field-wise totals for a day and per-meal-slot breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Aggregator
//!
//! Totals are plain field-wise sums. An empty collection yields the zero
//! profile, and entry order never affects the result.

use std::collections::BTreeMap;

use fuelwise_core::models::{LogEntry, MealSlot, NutrientProfile};

/// Sum every nutrient field over `entries`
///
/// Accepts anything that yields borrowed entries: a slice, a `Vec` reference,
/// or a filtered iterator.
#[must_use]
pub fn aggregate<'a, I>(entries: I) -> NutrientProfile
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    entries.into_iter().map(|entry| &entry.nutrients).sum()
}

/// Sum only the entries logged in `slot`
#[must_use]
pub fn aggregate_slot<'a, I>(entries: I, slot: MealSlot) -> NutrientProfile
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    aggregate(entries.into_iter().filter(|entry| entry.meal_slot == slot))
}

/// Totals grouped by meal slot
///
/// Only slots that have at least one entry appear in the map. Iteration order
/// follows the slot's day order (breakfast first).
#[must_use]
pub fn aggregate_by_slot<'a, I>(entries: I) -> BTreeMap<MealSlot, NutrientProfile>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut by_slot: BTreeMap<MealSlot, NutrientProfile> = BTreeMap::new();
    for entry in entries {
        *by_slot.entry(entry.meal_slot).or_default() += entry.nutrients;
    }
    by_slot
}
