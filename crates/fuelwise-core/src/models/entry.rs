// ABOUTME: Food log entry model and meal slot enumeration
// ABOUTME: LogEntry carries a nutrient payload, slot, timestamp, tags, flags, and images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nutrients::NutrientProfile;
use crate::errors::ModelError;

/// Meal category a log entry is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealSlot {
    /// Every slot in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse a slot, falling back to `Snack` for anything unrecognised
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Snack)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            _ => Err(ModelError::UnknownMealSlot(s.to_owned())),
        }
    }
}

/// One logged food item or meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Opaque identifier, unique within the owning session
    pub id: Uuid,
    /// Nutrient payload (estimated upstream, trusted as given)
    pub nutrients: NutrientProfile,
    /// Meal slot the entry belongs to
    pub meal_slot: MealSlot,
    /// When the food was eaten
    pub timestamp: DateTime<Utc>,
    /// Free-form context supplied by the user ("post-workout", "eating out")
    #[serde(default)]
    pub context_tags: BTreeSet<String>,
    /// Inflammation flags reported by meal analysis ("seed oils", "added sugar")
    #[serde(default)]
    pub inflammation_flags: BTreeSet<String>,
    /// Short textual insight from meal analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    /// References to photos attached to the entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_refs: Vec<String>,
}

impl LogEntry {
    /// Create an entry with a fresh random id and no tags, flags, or images
    #[must_use]
    pub fn new(meal_slot: MealSlot, nutrients: NutrientProfile, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nutrients,
            meal_slot,
            timestamp,
            context_tags: BTreeSet::new(),
            inflammation_flags: BTreeSet::new(),
            insight: None,
            image_refs: Vec::new(),
        }
    }

    /// Replace the generated id
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Attach context tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Attach inflammation flags
    #[must_use]
    pub fn with_inflammation_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inflammation_flags
            .extend(flags.into_iter().map(Into::into));
        self
    }

    /// Attach an insight string
    #[must_use]
    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    /// Attach image references
    #[must_use]
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.image_refs = images;
        self
    }

    /// Calendar day (UTC) the entry falls on
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_slot_parse() {
        assert_eq!("Breakfast".parse::<MealSlot>(), Ok(MealSlot::Breakfast));
        assert_eq!(" dinner ".parse::<MealSlot>(), Ok(MealSlot::Dinner));
        assert_eq!(
            "brunch".parse::<MealSlot>(),
            Err(ModelError::UnknownMealSlot("brunch".to_owned()))
        );
        assert_eq!(MealSlot::from_str_lossy("brunch"), MealSlot::Snack);
    }

    #[test]
    fn test_meal_slot_serde_is_snake_case() {
        let json = serde_json::to_string(&MealSlot::Lunch).unwrap();
        assert_eq!(json, "\"lunch\"");
    }

    #[test]
    fn test_entry_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "7f1c2a34-9f0e-4a0c-9a59-2a3d5f0d1e11",
            "nutrients": {"calories": 420, "protein": 32, "carbs": 40, "fat": 14},
            "meal_slot": "lunch",
            "timestamp": "2025-03-12T12:30:00Z"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.meal_slot, MealSlot::Lunch);
        assert!(entry.context_tags.is_empty());
        assert!(entry.insight.is_none());
        assert_eq!(entry.nutrients.fiber, 0.0);
    }

    #[test]
    fn test_builders_collect_tags_and_flags() {
        let entry = LogEntry::new(MealSlot::Snack, NutrientProfile::zero(), Utc::now())
            .with_tags(["post-workout", "home"])
            .with_inflammation_flags(["added sugar"])
            .with_insight("Good protein density");
        assert_eq!(entry.context_tags.len(), 2);
        assert!(entry.inflammation_flags.contains("added sugar"));
        assert_eq!(entry.insight.as_deref(), Some("Good protein density"));
    }
}
