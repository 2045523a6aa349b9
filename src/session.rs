// ABOUTME: Nutrition session context owning today's entries, goals, and water intake
// ABOUTME: Well-defined mutations plus read-only projections recomputed on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Session
//!
//! A [`NutritionSession`] is created at session start, changed only through
//! its mutation methods, and dropped at session end. It caches nothing:
//! effective goals, totals, remaining macros and the weekly log are derived
//! from the owned state each time they are read, so they cannot drift.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fuelwise_core::models::{
    EffectiveGoalProfile, GoalProfile, LogEntry, MealSlot, NutrientProfile, RemainingMacros,
};
use fuelwise_intelligence::{
    adjust_goals_with, aggregate, aggregate_by_slot, aggregate_slot, build_week_from,
    build_week_with, goal_progress, remaining_macros, select_next_meal_with, EngineConfig,
    GoalProgress, HistorySource, WaterProgress, WeeklyLog,
};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dashboard::DailyDashboard;
use crate::errors::{AppError, AppResult};

/// One user's in-memory nutrition state for a day
#[derive(Debug, Clone)]
pub struct NutritionSession {
    entries: Vec<LogEntry>,
    goals: GoalProfile,
    water_ml: u32,
    config: EngineConfig,
}

impl Default for NutritionSession {
    fn default() -> Self {
        Self::new(GoalProfile::default())
    }
}

impl NutritionSession {
    /// Session with the given goals and the global engine configuration
    #[must_use]
    pub fn new(goals: GoalProfile) -> Self {
        Self::with_config(goals, EngineConfig::global().clone())
    }

    /// Session with explicit engine configuration
    #[must_use]
    pub fn with_config(goals: GoalProfile, config: EngineConfig) -> Self {
        Self {
            entries: Vec::new(),
            goals,
            water_ml: 0,
            config,
        }
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    /// Today's entries in time order
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entry with the given id
    #[must_use]
    pub fn entry(&self, id: Uuid) -> Option<&LogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Base goal profile
    #[must_use]
    pub const fn goals(&self) -> &GoalProfile {
        &self.goals
    }

    /// Water logged today (mL)
    #[must_use]
    pub const fn water_ml(&self) -> u32 {
        self.water_ml
    }

    /// Engine configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add an entry, keeping entries ordered by timestamp
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if an entry with the same id is present.
    pub fn add_entry(&mut self, entry: LogEntry) -> AppResult<()> {
        if self.position(entry.id).is_some() {
            return Err(AppError::already_exists(format!("Entry {}", entry.id))
                .with_resource_id(entry.id.to_string()));
        }
        info!(
            entry_id = %entry.id,
            meal = %entry.meal_slot,
            calories = entry.nutrients.calories,
            "Entry added"
        );
        self.insert_sorted(entry);
        Ok(())
    }

    /// Replace the entry that has the same id as `entry`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no entry has that id.
    pub fn update_entry(&mut self, entry: LogEntry) -> AppResult<()> {
        let index = self.position(entry.id).ok_or_else(|| not_found(entry.id))?;
        self.entries.remove(index);
        info!(entry_id = %entry.id, meal = %entry.meal_slot, "Entry updated");
        self.insert_sorted(entry);
        Ok(())
    }

    /// Remove and return the entry with `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no entry has that id.
    pub fn remove_entry(&mut self, id: Uuid) -> AppResult<LogEntry> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        info!(entry_id = %id, "Entry removed");
        Ok(self.entries.remove(index))
    }

    /// Replace the base goal profile
    pub fn update_goals(&mut self, goals: GoalProfile) {
        info!(
            goal_type = %goals.goal_type,
            calories = goals.targets.calories,
            "Goals updated"
        );
        self.goals = goals;
    }

    /// Mark today as a training day (or not)
    pub fn set_training_day(&mut self, is_training_day: bool) {
        debug!(is_training_day, "Training day toggled");
        self.goals.is_training_day = is_training_day;
    }

    /// Record today's step count
    pub fn set_steps(&mut self, steps: u32) {
        debug!(steps, "Steps updated");
        self.goals.steps = steps;
    }

    /// Log water; returns the new daily total
    pub fn add_water(&mut self, ml: u32) -> u32 {
        self.water_ml = self.water_ml.saturating_add(ml);
        debug!(added_ml = ml, total_ml = self.water_ml, "Water logged");
        self.water_ml
    }

    /// Drop every entry and reset water; goals are kept
    pub fn clear_day(&mut self) {
        info!(removed = self.entries.len(), "Day cleared");
        self.entries.clear();
        self.water_ml = 0;
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn insert_sorted(&mut self, entry: LogEntry) {
        let index = self
            .entries
            .partition_point(|existing| existing.timestamp <= entry.timestamp);
        self.entries.insert(index, entry);
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// Targets after training-day and step modifiers
    #[must_use]
    pub fn effective_goals(&self) -> EffectiveGoalProfile {
        adjust_goals_with(&self.goals, &self.config.goal_adjustment)
    }

    /// Everything logged today
    #[must_use]
    pub fn totals(&self) -> NutrientProfile {
        aggregate(&self.entries)
    }

    /// Totals for one meal slot
    #[must_use]
    pub fn totals_for(&self, slot: MealSlot) -> NutrientProfile {
        aggregate_slot(&self.entries, slot)
    }

    /// Totals per meal slot that has entries
    #[must_use]
    pub fn totals_by_slot(&self) -> BTreeMap<MealSlot, NutrientProfile> {
        aggregate_by_slot(&self.entries)
    }

    /// Macros still needed to reach the effective goals
    #[must_use]
    pub fn remaining(&self) -> RemainingMacros {
        remaining_macros(&self.totals(), &self.effective_goals())
    }

    /// Meal slot to fill next at `current_hour`
    #[must_use]
    pub fn next_meal(&self, current_hour: u32) -> MealSlot {
        select_next_meal_with(&self.entries, current_hour, &self.config.meal_selection)
    }

    /// Per-nutrient and water progress against the effective goals
    #[must_use]
    pub fn progress(&self) -> GoalProgress {
        goal_progress(
            &self.totals(),
            &self.effective_goals(),
            WaterProgress::new(self.water_ml, self.goals.water_ml),
        )
    }

    /// Week around `today` with synthetic past days drawn from `rng`
    #[must_use]
    pub fn week<R: Rng>(&self, today: NaiveDate, rng: &mut R) -> WeeklyLog<'_> {
        build_week_with(
            today,
            &self.entries,
            &self.goals,
            rng,
            &self.config.synthetic_history,
        )
    }

    /// Week around `today` with past days from `history`
    #[must_use]
    pub fn week_from<H: HistorySource>(&self, today: NaiveDate, history: H) -> WeeklyLog<'_> {
        build_week_from(today, &self.entries, history)
    }

    /// Everything the daily overview shows, computed at `current_hour`
    #[must_use]
    pub fn dashboard(&self, current_hour: u32) -> DailyDashboard {
        DailyDashboard::from_session(self, current_hour)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Entry {id}")).with_resource_id(id.to_string())
}
