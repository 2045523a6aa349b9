// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, fixed timestamps, and session builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fuelwise`

use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fuelwise::intelligence::EngineConfig;
use fuelwise::models::{GoalProfile, LogEntry, MealSlot, NutrientProfile};
use fuelwise::session::NutritionSession;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wednesday 12 March 2025, the reference day for most tests
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

/// Timestamp on the reference day
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, hour, minute, 0).unwrap()
}

/// Entry with macros only
pub fn meal(slot: MealSlot, hour: u32, calories: f64, protein: f64, carbs: f64, fat: f64) -> LogEntry {
    LogEntry::new(
        slot,
        NutrientProfile::macros_only(calories, protein, carbs, fat),
        at(hour, 0),
    )
}

/// 2200 kcal / 180 P / 200 C / 70 F base goals
pub fn base_goals() -> GoalProfile {
    GoalProfile::new(NutrientProfile::macros_only(2200.0, 180.0, 200.0, 70.0))
}

/// Session with base goals and default engine configuration
pub fn create_test_session() -> NutritionSession {
    init_test_logging();
    NutritionSession::with_config(base_goals(), EngineConfig::default())
}

/// Session with 1200 kcal / 90 P / 150 C / 40 F logged before mid-afternoon
pub fn create_session_with_meals() -> NutritionSession {
    let mut session = create_test_session();
    session
        .add_entry(meal(MealSlot::Breakfast, 8, 400.0, 30.0, 50.0, 12.0))
        .unwrap();
    session
        .add_entry(meal(MealSlot::Lunch, 12, 500.0, 40.0, 60.0, 18.0))
        .unwrap();
    session
        .add_entry(meal(MealSlot::Snack, 15, 300.0, 20.0, 40.0, 10.0))
        .unwrap();
    session
}
