// ABOUTME: Integration tests for weekly log assembly from a live session
// ABOUTME: Verifies today's live view, synthetic and recorded history, and reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use common::{create_session_with_meals, create_test_session, meal, test_day};
use fuelwise::intelligence::{
    EngineConfig, HistorySource, NoHistory, RecordedHistory, SyntheticHistory,
};
use fuelwise::models::{LogEntry, MealSlot, NutrientProfile};
use fuelwise::session::NutritionSession;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_week_runs_monday_to_sunday() {
    let session = create_session_with_meals();
    let mut rng = StdRng::seed_from_u64(11);
    let week = session.week(test_day(), &mut rng);

    let days = week.days();
    assert_eq!(days[0].date.weekday(), Weekday::Mon);
    assert_eq!(days[6].date.weekday(), Weekday::Sun);
    let labels: Vec<&str> = days.iter().map(|d| d.day_label).collect();
    assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(week.today_index(), 2);
}

#[test]
fn test_today_reflects_live_entries() {
    let mut session = create_session_with_meals();
    let mut rng = StdRng::seed_from_u64(3);

    let calories_before = session.week(test_day(), &mut rng).current_day().totals().calories;
    assert_eq!(calories_before, 1200.0);

    session
        .add_entry(meal(MealSlot::Dinner, 19, 650.0, 45.0, 60.0, 22.0))
        .unwrap();
    let week = session.week(test_day(), &mut rng);
    assert_eq!(week.current_day().totals().calories, 1850.0);
    assert_eq!(week.current_day().entries.len(), session.entries().len());
}

#[test]
fn test_past_days_synthesized_future_days_empty() {
    let session = create_test_session();
    let mut rng = StdRng::seed_from_u64(21);
    let week = session.week(test_day(), &mut rng);

    for day in &week.days()[..2] {
        assert_eq!(day.entries.len(), 1);
        let entry = &day.entries[0];
        assert_eq!(entry.meal_slot, MealSlot::Snack);
        assert!((1760.0..=2640.0).contains(&entry.nutrients.calories));
    }
    assert!(week.current_day().is_empty());
    for day in &week.days()[3..] {
        assert!(day.is_empty());
    }
}

#[test]
fn test_sunday_has_full_past_week() {
    let session = create_test_session();
    let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let week = session.week(sunday, &mut rng);

    assert_eq!(week.today_index(), 6);
    assert!(week.days()[..6].iter().all(|d| d.entries.len() == 1));
}

#[test]
fn test_synthetic_history_can_be_disabled() {
    let mut config = EngineConfig::default();
    config.synthetic_history.enabled = false;
    let session = NutritionSession::with_config(common::base_goals(), config);

    let mut rng = StdRng::seed_from_u64(1);
    let week = session.week(test_day(), &mut rng);
    assert!(week.days().iter().all(|d| d.is_empty()));
    assert_eq!(week.daily_calories(), [0.0; 7]);
}

#[test]
fn test_same_seed_same_week() {
    let session = create_session_with_meals();
    let first = session
        .week(test_day(), &mut StdRng::seed_from_u64(99))
        .into_owned();
    let second = session
        .week(test_day(), &mut StdRng::seed_from_u64(99))
        .into_owned();
    assert_eq!(first.daily_calories(), second.daily_calories());
}

#[test]
fn test_recorded_history_preferred_over_synthetic() {
    let session = create_session_with_meals();
    let monday_lunch = LogEntry::new(
        MealSlot::Lunch,
        NutrientProfile::macros_only(720.0, 48.0, 80.0, 22.0),
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap(),
    );
    let recorded: RecordedHistory = std::iter::once(monday_lunch).collect();
    let synthetic = SyntheticHistory::seeded(
        session.goals(),
        session.config().synthetic_history.clone(),
        8,
    );

    let week = session.week_from(test_day(), recorded.or(synthetic));
    assert_eq!(week.days()[0].totals().calories, 720.0);
    assert_eq!(week.days()[1].entries.len(), 1);
    assert_eq!(week.days()[1].entries[0].meal_slot, MealSlot::Snack);
    assert_eq!(week.current_day().totals().calories, 1200.0);
}

#[test]
fn test_without_history_only_today_has_data() {
    let session = create_session_with_meals();
    let week = session.week_from(test_day(), NoHistory);
    assert_eq!(
        week.daily_calories(),
        [0.0, 0.0, 1200.0, 0.0, 0.0, 0.0, 0.0]
    );
}

#[test]
fn test_week_serializes_day_labels() {
    let session = create_session_with_meals();
    let week = session.week_from(test_day(), NoHistory);
    let json = serde_json::to_value(&week).unwrap();
    assert_eq!(json["days"][2]["day_label"], "Wed");
    assert_eq!(json["days"][2]["entries"].as_array().unwrap().len(), 3);
}
