// ABOUTME: Core data models for the Fuelwise nutrition engine
// ABOUTME: Re-exports nutrient, log entry, goal, and day summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types shared between the engine and its callers.
//!
//! ## Design Principles
//!
//! - **Values, not handles**: nutrient profiles are `Copy` and compared by value
//! - **Derived stays derived**: `EffectiveGoalProfile` has no public mutators
//! - **Lenient on input**: missing micro-nutrients deserialize as zero
//!
//! ## Core Models
//!
//! - `NutrientProfile`: seven nutrient quantities used for targets and intake
//! - `LogEntry`: one logged food item or meal assigned to a `MealSlot`
//! - `GoalProfile`: base targets plus training-day and step-count modifiers
//! - `DaySummary`: one calendar day of entries inside a weekly log

mod day;
mod entry;
mod goals;
mod nutrients;

pub use day::DaySummary;
pub use entry::{LogEntry, MealSlot};
pub use goals::{EffectiveGoalProfile, GoalProfile, GoalType};
pub use nutrients::{Nutrient, NutrientProfile, RemainingMacros};
