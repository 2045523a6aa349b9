// ABOUTME: Core types and constants for the Fuelwise nutrition engine
// ABOUTME: Foundation crate with nutrient profiles, log entries, goals, and model errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelwise Core
//!
//! Foundation crate providing the shared value types for the Fuelwise
//! goal-adjustment and macro-accounting engine. Everything here is plain data:
//! the algorithms that derive totals, effective goals, and weekly summaries
//! live in `fuelwise-intelligence`.
//!
//! ## Modules
//!
//! - **models**: `NutrientProfile`, `LogEntry`, `MealSlot`, `GoalProfile`,
//!   `EffectiveGoalProfile`, `RemainingMacros`, and `DaySummary`
//! - **constants**: Energy densities, default goal targets, and day labels
//! - **errors**: `ModelError` for parsing and validating domain values

/// Nutrition constants (energy densities, default targets, labels)
pub mod constants;

/// Errors raised while parsing or validating domain values
pub mod errors;

/// Core data models for nutrition logging and goal tracking
pub mod models;

pub use errors::ModelError;
