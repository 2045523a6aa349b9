// ABOUTME: Goal profile models for daily nutrient targets
// ABOUTME: GoalProfile with training/step modifiers, GoalType, and read-only EffectiveGoalProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::nutrients::NutrientProfile;
use crate::constants::default_goals;
use crate::errors::ModelError;

/// Body-composition direction the user is working towards
///
/// Informational only: the goal adjuster does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Lose fat while gaining muscle at maintenance calories
    #[default]
    Recomposition,
    /// Caloric deficit
    Cut,
    /// Caloric surplus
    Bulk,
}

impl GoalType {
    /// Lowercase name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recomposition => "recomposition",
            Self::Cut => "cut",
            Self::Bulk => "bulk",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recomposition" | "recomp" => Ok(Self::Recomposition),
            "cut" => Ok(Self::Cut),
            "bulk" => Ok(Self::Bulk),
            _ => Err(ModelError::UnknownGoalType(s.to_owned())),
        }
    }
}

/// User-edited daily goals
///
/// One instance lives in each session and is mutated in place by user edits.
/// Situational modifiers (`is_training_day`, `steps`) are applied on read by
/// the goal adjuster; they never change `targets`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Base nutrient targets before modifiers
    #[serde(flatten)]
    pub targets: NutrientProfile,
    /// Body-composition direction
    #[serde(default, rename = "type")]
    pub goal_type: GoalType,
    /// Whether today is a training day
    #[serde(default)]
    pub is_training_day: bool,
    /// Steps walked today
    #[serde(default)]
    pub steps: u32,
    /// Daily water target (mL), tracked outside the nutrient profile
    #[serde(default = "default_water_ml")]
    pub water_ml: u32,
}

const fn default_water_ml() -> u32 {
    default_goals::WATER_ML
}

impl GoalProfile {
    /// Goal profile with the given base targets and no modifiers
    #[must_use]
    pub const fn new(targets: NutrientProfile) -> Self {
        Self {
            targets,
            goal_type: GoalType::Recomposition,
            is_training_day: false,
            steps: 0,
            water_ml: default_goals::WATER_ML,
        }
    }

    /// Set the goal type
    #[must_use]
    pub const fn with_goal_type(mut self, goal_type: GoalType) -> Self {
        self.goal_type = goal_type;
        self
    }

    /// Mark today as a training day (or not)
    #[must_use]
    pub const fn with_training_day(mut self, is_training_day: bool) -> Self {
        self.is_training_day = is_training_day;
        self
    }

    /// Set today's step count
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the water target
    #[must_use]
    pub const fn with_water_ml(mut self, water_ml: u32) -> Self {
        self.water_ml = water_ml;
        self
    }
}

impl Default for GoalProfile {
    fn default() -> Self {
        Self::new(
            NutrientProfile::macros_only(
                default_goals::CALORIES,
                default_goals::PROTEIN_G,
                default_goals::CARBS_G,
                default_goals::FAT_G,
            )
            .with_micros(
                default_goals::FIBER_G,
                default_goals::SALT_MG,
                default_goals::POTASSIUM_MG,
            ),
        )
    }
}

/// Daily targets after situational modifiers
///
/// Always derived from a `GoalProfile`, never stored or edited. The wrapped
/// profile is reachable only through `Deref` and `nutrients()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EffectiveGoalProfile(NutrientProfile);

impl EffectiveGoalProfile {
    /// Wrap an adjusted profile; called by the goal adjuster
    #[must_use]
    pub const fn derived(nutrients: NutrientProfile) -> Self {
        Self(nutrients)
    }

    /// The adjusted targets
    #[must_use]
    pub const fn nutrients(&self) -> &NutrientProfile {
        &self.0
    }
}

impl Deref for EffectiveGoalProfile {
    type Target = NutrientProfile;

    fn deref(&self) -> &NutrientProfile {
        &self.0
    }
}
