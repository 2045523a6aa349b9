// ABOUTME: Nutrition accounting engine: goal adjustment, aggregation, and weekly logs
// ABOUTME: Pure read-only projections over session entries and goals, configured via EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelwise Intelligence
//!
//! The computational core of Fuelwise. Every function here is a pure,
//! synchronous projection of a session's entries and goal profile; nothing
//! mutates its inputs, and nothing fails on well-formed input.
//!
//! Data flows one way:
//! entries -> [`aggregator`] -> {[`remaining`], [`weekly_log`]}, while the
//! [`goal_adjuster`] runs independently on the goal profile. The
//! [`remaining`] macros and the [`meal_selector`] result together form the
//! request for a recipe completion.

/// Engine configuration with environment overrides
pub mod config;

/// Nutrient totals over entry collections
pub mod aggregator;

/// Effective goals from the base profile and situational modifiers
pub mod goal_adjuster;

/// Remaining-macro shortfall
pub mod remaining;

/// Next meal slot decision table
pub mod meal_selector;

/// Past-day entry sources
pub mod history;

/// Monday-to-Sunday day summaries
pub mod weekly_log;

/// Per-nutrient progress read model
pub mod progress;

pub use aggregator::{aggregate, aggregate_by_slot, aggregate_slot};
pub use config::{ConfigError, EngineConfig};
pub use goal_adjuster::{adjust_goals, adjust_goals_with};
pub use history::{FallbackHistory, HistorySource, NoHistory, RecordedHistory, SyntheticHistory};
pub use meal_selector::{select_next_meal, select_next_meal_with};
pub use progress::{goal_progress, GoalProgress, NutrientProgress, WaterProgress};
pub use remaining::remaining_macros;
pub use weekly_log::{build_week, build_week_from, build_week_with, week_start, WeeklyLog};
