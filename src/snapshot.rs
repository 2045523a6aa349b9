// ABOUTME: Serializable snapshot of a nutrition session for loading and saving day state
// ABOUTME: Goals, entries and water round-trip through JSON and rebuild a validated session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use fuelwise_core::models::{GoalProfile, LogEntry};
use fuelwise_intelligence::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::session::NutritionSession;

/// Day state as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Base goal profile
    #[serde(default)]
    pub goals: GoalProfile,
    /// Logged entries in any order
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    /// Water logged today (mL)
    #[serde(default)]
    pub water_ml: u32,
}

impl SessionSnapshot {
    /// Capture the current state of a session
    #[must_use]
    pub fn capture(session: &NutritionSession) -> Self {
        Self {
            goals: *session.goals(),
            entries: session.entries().to_vec(),
            water_ml: session.water_ml(),
        }
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read snapshot {}: {e}", path.display()))
                .with_source(e)
        })?;
        Self::from_json(&text)
    }

    /// Write the snapshot as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| {
            AppError::internal(format!("Cannot write snapshot {}: {e}", path.display()))
                .with_source(e)
        })
    }

    /// Rebuild a session, validating every entry on the way in
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for entries with negative or non-finite values
    /// and `ResourceAlreadyExists` for duplicate entry ids.
    pub fn into_session(self, config: EngineConfig) -> AppResult<NutritionSession> {
        let mut session = NutritionSession::with_config(self.goals, config);
        for mut entry in self.entries {
            entry.nutrients = entry.nutrients.validated()?;
            session.add_entry(entry)?;
        }
        session.add_water(self.water_ml);
        info!(entries = session.entries().len(), "Session restored from snapshot");
        Ok(session)
    }
}
