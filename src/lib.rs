// ABOUTME: Main library entry point for the Fuelwise nutrition accounting engine
// ABOUTME: Session context, collaborator interfaces, error handling, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelwise
//!
//! Goal adjustment and macro accounting for a single user's nutrition day.
//! The pure algorithms live in `fuelwise-intelligence` and the value types in
//! `fuelwise-core`; this crate wires them into a session that owns today's
//! state and into the async boundary towards hosted AI collaborators.
//!
//! ## Architecture
//!
//! - **Session**: owns entries, goals and water; every read is derived fresh
//! - **Collaborators**: async traits for meal analysis, coaching and recipes
//! - **Snapshot**: JSON persistence of a day's state
//! - **Errors / Logging**: unified `AppError` and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::{TimeZone, Utc};
//! use fuelwise::models::{GoalProfile, LogEntry, MealSlot, NutrientProfile};
//! use fuelwise::session::NutritionSession;
//! use fuelwise::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let mut session = NutritionSession::new(GoalProfile::default().with_training_day(true));
//!     let breakfast = LogEntry::new(
//!         MealSlot::Breakfast,
//!         NutrientProfile::macros_only(450.0, 35.0, 50.0, 12.0),
//!         Utc.with_ymd_and_hms(2025, 3, 12, 8, 0, 0).unwrap(),
//!     );
//!     session.add_entry(breakfast)?;
//!     println!("{:?}", session.remaining());
//!     Ok(())
//! }
//! ```

/// External AI collaborator interfaces and orchestration
pub mod collaborators;

/// Application constants
pub mod constants;

/// Daily overview read model
pub mod dashboard;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Nutrition session context
pub mod session;

/// JSON persistence of session state
pub mod snapshot;

pub use fuelwise_core::models;
pub use fuelwise_intelligence as intelligence;
