// ABOUTME: Tests for environment-driven engine and collaborator configuration
// ABOUTME: Validates overrides, parse failures, and range checks for every tunable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use std::env;

use fuelwise::collaborators::CollaboratorConfig;
use fuelwise::errors::{AppError, ErrorCode};
use fuelwise::intelligence::{ConfigError, EngineConfig};
use serial_test::serial;

const ENGINE_VARS: &[&str] = &[
    "FUELWISE_TRAINING_DAY_CALORIE_BONUS",
    "FUELWISE_TRAINING_DAY_CARB_BONUS",
    "FUELWISE_STEP_BONUS_THRESHOLD",
    "FUELWISE_STEP_CARB_BONUS",
    "FUELWISE_BREAKFAST_CUTOFF_HOUR",
    "FUELWISE_LUNCH_CUTOFF_HOUR",
    "FUELWISE_DINNER_CUTOFF_HOUR",
    "FUELWISE_SYNTHETIC_HISTORY",
    "FUELWISE_SYNTHETIC_CALORIE_VARIANCE",
    "FUELWISE_SYNTHETIC_SEED",
    "FUELWISE_COLLABORATOR_TIMEOUT_SECS",
    "FUELWISE_COACHING_FALLBACK",
];

fn clear_env() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_env();
    assert_eq!(EngineConfig::load().unwrap(), EngineConfig::default());
    assert_eq!(
        CollaboratorConfig::from_env().unwrap(),
        CollaboratorConfig::default()
    );
}

#[test]
#[serial]
fn test_goal_adjustment_overrides() {
    clear_env();
    env::set_var("FUELWISE_TRAINING_DAY_CALORIE_BONUS", "250");
    env::set_var("FUELWISE_STEP_BONUS_THRESHOLD", "12000");
    env::set_var("FUELWISE_STEP_CARB_BONUS", "25.5");

    let config = EngineConfig::load().unwrap();
    assert_eq!(config.goal_adjustment.training_day_calorie_bonus, 250.0);
    assert_eq!(config.goal_adjustment.step_bonus_threshold, 12_000);
    assert_eq!(config.goal_adjustment.step_carb_bonus, 25.5);
    assert_eq!(config.goal_adjustment.training_day_carb_bonus, 50.0);
    clear_env();
}

#[test]
#[serial]
fn test_meal_and_history_overrides() {
    clear_env();
    env::set_var("FUELWISE_DINNER_CUTOFF_HOUR", "22");
    env::set_var("FUELWISE_SYNTHETIC_HISTORY", "false");
    env::set_var("FUELWISE_SYNTHETIC_SEED", "42");

    let config = EngineConfig::load().unwrap();
    assert_eq!(config.meal_selection.dinner_cutoff_hour, Some(22));
    assert!(!config.synthetic_history.enabled);
    assert_eq!(config.synthetic_history.seed, Some(42));

    env::set_var("FUELWISE_DINNER_CUTOFF_HOUR", "none");
    let config = EngineConfig::load().unwrap();
    assert_eq!(config.meal_selection.dinner_cutoff_hour, None);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_rejected() {
    clear_env();
    env::set_var("FUELWISE_LUNCH_CUTOFF_HOUR", "noon");
    assert!(matches!(EngineConfig::load(), Err(ConfigError::Parse(_))));
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_override_rejected() {
    clear_env();
    env::set_var("FUELWISE_SYNTHETIC_CALORIE_VARIANCE", "1.5");
    let err = EngineConfig::load().unwrap_err();
    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigError);

    clear_env();
    env::set_var("FUELWISE_BREAKFAST_CUTOFF_HOUR", "16");
    assert!(EngineConfig::load().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_collaborator_overrides() {
    clear_env();
    env::set_var("FUELWISE_COLLABORATOR_TIMEOUT_SECS", "5");
    env::set_var("FUELWISE_COACHING_FALLBACK", "Try again soon.");
    let config = CollaboratorConfig::from_env().unwrap();
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.coaching_fallback, "Try again soon.");

    env::set_var("FUELWISE_COLLABORATOR_TIMEOUT_SECS", "0");
    assert!(matches!(
        CollaboratorConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_env();
}
