// ABOUTME: Request and response types exchanged with external AI collaborators
// ABOUTME: Meal analysis, coaching advice, and recipe completion payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use fuelwise_core::models::{EffectiveGoalProfile, LogEntry, MealSlot, NutrientProfile, RemainingMacros};
use serde::{Deserialize, Serialize};

/// Free text and photos describing a meal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAnalysisRequest {
    /// What the user typed
    pub text: String,
    /// Image references (paths, URLs, or encoded blobs owned by the caller)
    #[serde(default)]
    pub images: Vec<String>,
    /// Context tags chosen by the user ("post-workout", "restaurant")
    #[serde(default)]
    pub context_tags: BTreeSet<String>,
}

impl MealAnalysisRequest {
    /// Text-only request
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach context tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach image references
    #[must_use]
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }
}

/// Best-effort estimate returned by the meal-analysis collaborator
///
/// Values are trusted as given except for the sanitising done by
/// [`MealAnalysis::into_entry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Estimated nutrients
    pub nutrients: NutrientProfile,
    /// Meal type as the model named it ("breakfast", "Snacks", ...)
    pub meal_slot: String,
    /// Inflammation-related labels
    #[serde(default)]
    pub inflammation_flags: Vec<String>,
    /// Short insight about the meal
    #[serde(default)]
    pub insight: String,
}

/// Everything the coaching collaborator needs
#[derive(Debug, Clone, Serialize)]
pub struct CoachingRequest<'a> {
    /// Today's entries
    pub entries: &'a [LogEntry],
    /// Targets after situational modifiers
    pub goals: EffectiveGoalProfile,
}

/// Everything the recipe collaborator needs to complete the day
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRequest<'a> {
    /// Today's entries
    pub entries: &'a [LogEntry],
    /// Targets after situational modifiers
    pub goals: EffectiveGoalProfile,
    /// Macros still needed today
    pub remaining: RemainingMacros,
    /// Ingredients the user has at hand
    pub inventory: Vec<String>,
    /// Optional craving ("something spicy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub craving: Option<String>,
    /// Meal slot the recipe should fill
    pub next_meal: MealSlot,
}

/// One ingredient line of a suggested recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Free-form amount ("150 g", "1 cup")
    #[serde(default)]
    pub quantity: String,
}

/// Structured recipe returned by the recipe collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    /// Recipe title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Ingredients in use order
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Estimated nutrients for one serving
    pub macros: NutrientProfile,
}
