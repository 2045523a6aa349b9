// ABOUTME: Per-day summary of log entries inside a weekly log
// ABOUTME: DaySummary borrows live entries for today and owns back-filled entries otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Serialize;

use super::entry::LogEntry;
use super::nutrients::NutrientProfile;

/// One calendar day of a weekly log
///
/// `entries` is a `Cow` so the current day can borrow the session's live
/// entry list instead of snapshotting it, while past days own whatever the
/// history source produced.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary<'a> {
    /// Calendar day
    pub date: NaiveDate,
    /// Short weekday label ("Mon" .. "Sun")
    pub day_label: &'static str,
    /// Entries for the day, ordered by time
    pub entries: Cow<'a, [LogEntry]>,
}

impl<'a> DaySummary<'a> {
    /// Day with no entries
    #[must_use]
    pub const fn empty(date: NaiveDate, day_label: &'static str) -> Self {
        Self {
            date,
            day_label,
            entries: Cow::Borrowed(&[]),
        }
    }

    /// Day that views an existing entry slice
    #[must_use]
    pub const fn borrowed(date: NaiveDate, day_label: &'static str, entries: &'a [LogEntry]) -> Self {
        Self {
            date,
            day_label,
            entries: Cow::Borrowed(entries),
        }
    }

    /// Day that owns its entries; they are sorted by timestamp
    #[must_use]
    pub fn owned(date: NaiveDate, day_label: &'static str, mut entries: Vec<LogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        Self {
            date,
            day_label,
            entries: Cow::Owned(entries),
        }
    }

    /// Whether no food was logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry's nutrients
    #[must_use]
    pub fn totals(&self) -> NutrientProfile {
        self.entries.iter().map(|entry| &entry.nutrients).sum()
    }

    /// Detach from the borrowed source
    #[must_use]
    pub fn into_owned(self) -> DaySummary<'static> {
        DaySummary {
            date: self.date,
            day_label: self.day_label,
            entries: Cow::Owned(self.entries.into_owned()),
        }
    }
}
