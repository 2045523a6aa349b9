// ABOUTME: Error types for parsing and validating Fuelwise domain values
// ABOUTME: Covers unknown meal slots, unknown goal types, and invalid nutrient amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Model-level error types.
//!
//! The aggregation and derivation algorithms are total functions and never
//! produce these errors. They are raised only at the edges, when a string or
//! an externally supplied number is turned into a domain value.

use thiserror::Error;

/// Errors produced while constructing domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Meal slot string did not match breakfast/lunch/dinner/snack
    #[error("Unknown meal slot: {0}")]
    UnknownMealSlot(String),

    /// Goal type string did not match recomposition/cut/bulk
    #[error("Unknown goal type: {0}")]
    UnknownGoalType(String),

    /// A nutrient amount was negative, NaN, or infinite
    #[error("Invalid amount for {field}: {value}")]
    InvalidNutrient {
        /// Name of the offending field
        field: &'static str,
        /// Value that failed validation
        value: f64,
    },
}
