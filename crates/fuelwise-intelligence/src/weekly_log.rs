// ABOUTME: Weekly log builder assembling Monday-to-Sunday day summaries
// ABOUTME: Today borrows live entries, future days are empty, past days come from a history source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly Log Builder
//!
//! A [`WeeklyLog`] is rebuilt from source state every time it is needed. The
//! current day's summary borrows the caller's live entry slice, so the log
//! can never drift from the session it was built from.

use std::array;

use chrono::{Datelike, Days, Duration, NaiveDate};
use fuelwise_core::constants::{DAYS_PER_WEEK, DAY_LABELS};
use fuelwise_core::models::{DaySummary, GoalProfile, LogEntry};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, SyntheticHistoryConfig};
use crate::history::{HistorySource, NoHistory, SyntheticHistory};

/// Monday of the ISO week containing `day`
#[must_use]
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Seven day summaries, Monday first
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyLog<'a> {
    today: NaiveDate,
    days: [DaySummary<'a>; DAYS_PER_WEEK],
}

impl<'a> WeeklyLog<'a> {
    /// The day the log was built around
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Summaries in Monday..Sunday order
    #[must_use]
    pub const fn days(&self) -> &[DaySummary<'a>; DAYS_PER_WEEK] {
        &self.days
    }

    /// Position of today within the week (0 = Monday)
    #[must_use]
    pub fn today_index(&self) -> usize {
        self.today.weekday().num_days_from_monday() as usize
    }

    /// Today's summary, a view over the live entries
    #[must_use]
    pub fn current_day(&self) -> &DaySummary<'a> {
        &self.days[self.today_index()]
    }

    /// Summary for a calendar day in this week
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DaySummary<'a>> {
        self.days.iter().find(|summary| summary.date == date)
    }

    /// Calories per day for the weekly chart
    #[must_use]
    pub fn daily_calories(&self) -> [f64; DAYS_PER_WEEK] {
        array::from_fn(|i| self.days[i].totals().calories)
    }

    /// Detach every day from the live entries
    #[must_use]
    pub fn into_owned(self) -> WeeklyLog<'static> {
        WeeklyLog {
            today: self.today,
            days: self.days.map(DaySummary::into_owned),
        }
    }
}

/// Build the week around `today` with the global synthetic-history settings
///
/// Past days get one synthetic placeholder each unless synthetic history is
/// disabled, in which case they stay empty.
#[must_use]
pub fn build_week<'a, R: Rng>(
    today: NaiveDate,
    live_entries: &'a [LogEntry],
    goals: &GoalProfile,
    rng: &mut R,
) -> WeeklyLog<'a> {
    build_week_with(
        today,
        live_entries,
        goals,
        rng,
        &EngineConfig::global().synthetic_history,
    )
}

/// Build the week with explicit synthetic-history settings
#[must_use]
pub fn build_week_with<'a, R: Rng>(
    today: NaiveDate,
    live_entries: &'a [LogEntry],
    goals: &GoalProfile,
    rng: &mut R,
    config: &SyntheticHistoryConfig,
) -> WeeklyLog<'a> {
    if config.enabled {
        let mut synthetic = SyntheticHistory::new(goals, config.clone(), rng);
        build_week_from(today, live_entries, &mut synthetic)
    } else {
        build_week_from(today, live_entries, &mut NoHistory)
    }
}

/// Build the week, asking `history` for each day before `today`
///
/// Days after `today` are always empty and `today` is always exactly
/// `live_entries`. A past day the source knows nothing about is empty.
#[must_use]
pub fn build_week_from<'a, H>(
    today: NaiveDate,
    live_entries: &'a [LogEntry],
    mut history: H,
) -> WeeklyLog<'a>
where
    H: HistorySource,
{
    let monday = week_start(today);

    let days = array::from_fn(|offset| {
        let date = monday + Days::new(offset as u64);
        let label = DAY_LABELS[offset];

        if date > today {
            DaySummary::empty(date, label)
        } else if date == today {
            DaySummary::borrowed(date, label, live_entries)
        } else {
            history
                .entries_for(date)
                .map_or_else(|| DaySummary::empty(date, label), |entries| {
                    DaySummary::owned(date, label, entries)
                })
        }
    });

    debug!(%today, %monday, live = live_entries.len(), "Built weekly log");
    WeeklyLog { today, days }
}
