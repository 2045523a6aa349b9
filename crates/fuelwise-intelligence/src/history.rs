// ABOUTME: Pluggable history sources for past days of the weekly log
// ABOUTME: Seedable synthetic placeholder generator, recorded in-memory history, and empty history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! History Sources
//!
//! The weekly log asks a [`HistorySource`] for every past day of the week.
//! Real persisted history plugs in through [`RecordedHistory`]; the
//! [`SyntheticHistory`] generator only exists to keep demo charts non-empty
//! and carries no analytical meaning.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use fuelwise_core::constants::energy;
use fuelwise_core::models::{GoalProfile, LogEntry, MealSlot, NutrientProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Builder;

use crate::config::SyntheticHistoryConfig;

/// Supplies entries for days before today
pub trait HistorySource {
    /// Entries logged on `day`, or `None` when nothing is known about it
    fn entries_for(&mut self, day: NaiveDate) -> Option<Vec<LogEntry>>;

    /// Consult `fallback` for days this source knows nothing about
    fn or<F>(self, fallback: F) -> FallbackHistory<Self, F>
    where
        Self: Sized,
        F: HistorySource,
    {
        FallbackHistory {
            primary: self,
            fallback,
        }
    }
}

impl<H: HistorySource + ?Sized> HistorySource for &mut H {
    fn entries_for(&mut self, day: NaiveDate) -> Option<Vec<LogEntry>> {
        (**self).entries_for(day)
    }
}

/// Past days stay empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistorySource for NoHistory {
    fn entries_for(&mut self, _day: NaiveDate) -> Option<Vec<LogEntry>> {
        None
    }
}

/// Previously logged entries keyed by calendar day
#[derive(Debug, Clone, Default)]
pub struct RecordedHistory {
    days: BTreeMap<NaiveDate, Vec<LogEntry>>,
}

impl RecordedHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File an entry under the day of its timestamp
    pub fn record(&mut self, entry: LogEntry) {
        self.days.entry(entry.date()).or_default().push(entry);
    }

    /// Number of days with at least one entry
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

impl FromIterator<LogEntry> for RecordedHistory {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.record(entry);
        }
        history
    }
}

impl HistorySource for RecordedHistory {
    fn entries_for(&mut self, day: NaiveDate) -> Option<Vec<LogEntry>> {
        self.days.get(&day).cloned()
    }
}

/// Tries `primary` first and falls back for unknown days
#[derive(Debug, Clone)]
pub struct FallbackHistory<P, F> {
    primary: P,
    fallback: F,
}

impl<P: HistorySource, F: HistorySource> HistorySource for FallbackHistory<P, F> {
    fn entries_for(&mut self, day: NaiveDate) -> Option<Vec<LogEntry>> {
        self.primary
            .entries_for(day)
            .or_else(|| self.fallback.entries_for(day))
    }
}

/// Generates one placeholder snack per past day
///
/// The day's calories are the base goal scaled by a uniform factor in
/// `1 ± calorie_variance`, rounded to whole kcal, and split into macros with
/// the configured ratios. Entry ids come from the same RNG, so a seeded
/// generator reproduces identical weeks.
#[derive(Debug, Clone)]
pub struct SyntheticHistory<R = StdRng> {
    base_calories: f64,
    config: SyntheticHistoryConfig,
    rng: R,
}

impl<R: Rng> SyntheticHistory<R> {
    /// Generator around an existing RNG (pass `&mut rng` to keep ownership)
    #[must_use]
    pub fn new(goals: &GoalProfile, config: SyntheticHistoryConfig, rng: R) -> Self {
        Self {
            base_calories: goals.targets.calories,
            config,
            rng,
        }
    }

    /// Build the placeholder entry for `day`
    pub fn synthesize(&mut self, day: NaiveDate) -> LogEntry {
        // non-finite variance collapses to the exact goal
        let variance = if self.config.calorie_variance.is_finite() {
            self.config.calorie_variance.abs()
        } else {
            0.0
        };
        let factor = 1.0 + self.rng.gen_range(-variance..=variance);
        let daily_calories = (self.base_calories * factor).round();

        let split = &self.config.macro_split;
        let nutrients = NutrientProfile::macros_only(
            daily_calories,
            (daily_calories * split.protein / energy::KCAL_PER_GRAM_PROTEIN).round(),
            (daily_calories * split.carbs / energy::KCAL_PER_GRAM_CARBS).round(),
            (daily_calories * split.fat / energy::KCAL_PER_GRAM_FAT).round(),
        )
        .with_micros(
            self.config.fiber_g,
            self.config.salt_mg,
            self.config.potassium_mg,
        );

        let noon = day.and_time(NaiveTime::MIN) + Duration::hours(12);
        let id = Builder::from_random_bytes(self.rng.gen()).into_uuid();

        debug!(%day, calories = daily_calories, "Synthesized placeholder history");
        LogEntry::new(MealSlot::Snack, nutrients, Utc.from_utc_datetime(&noon)).with_id(id)
    }
}

impl SyntheticHistory<StdRng> {
    /// Generator with a fixed seed for reproducible output
    #[must_use]
    pub fn seeded(goals: &GoalProfile, config: SyntheticHistoryConfig, seed: u64) -> Self {
        Self::new(goals, config, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from `config.seed`, or from OS entropy when unset
    #[must_use]
    pub fn from_config(goals: &GoalProfile, config: SyntheticHistoryConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(goals, config, rng)
    }
}

impl<R: Rng> HistorySource for SyntheticHistory<R> {
    fn entries_for(&mut self, day: NaiveDate) -> Option<Vec<LogEntry>> {
        Some(vec![self.synthesize(day)])
    }
}
