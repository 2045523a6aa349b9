// ABOUTME: Nutrient profile value type used for goals, intake, and totals
// ABOUTME: NutrientProfile arithmetic, Nutrient field selector, and RemainingMacros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Seven nutrient quantities in fixed units
///
/// Calories are kcal; protein, carbs, fat, and fiber are grams; salt and
/// potassium are milligrams. The same shape is used as a goal target and as
/// the payload of a log entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g), zero when the source omitted it
    #[serde(default)]
    pub fiber: f64,
    /// Salt (mg), zero when the source omitted it
    #[serde(default)]
    pub salt: f64,
    /// Potassium (mg), zero when the source omitted it
    #[serde(default)]
    pub potassium: f64,
}

impl NutrientProfile {
    /// The all-zero profile
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            salt: 0.0,
            potassium: 0.0,
        }
    }

    /// Profile with macronutrients set and micro-nutrients at zero
    #[must_use]
    pub const fn macros_only(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber: 0.0,
            salt: 0.0,
            potassium: 0.0,
        }
    }

    /// Set the micro-nutrient fields
    #[must_use]
    pub const fn with_micros(mut self, fiber: f64, salt: f64, potassium: f64) -> Self {
        self.fiber = fiber;
        self.salt = salt;
        self.potassium = potassium;
        self
    }

    /// Read a single field
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Salt => self.salt,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Check that every field is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidNutrient` naming the first failing field.
    pub fn validated(self) -> Result<Self, ModelError> {
        for nutrient in Nutrient::ALL {
            let value = self.get(nutrient);
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidNutrient {
                    field: nutrient.as_str(),
                    value,
                });
            }
        }
        Ok(self)
    }

    /// Replace negative or non-finite fields with zero
    #[must_use]
    pub fn clamped_non_negative(self) -> Self {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            calories: clamp(self.calories),
            protein: clamp(self.protein),
            carbs: clamp(self.carbs),
            fat: clamp(self.fat),
            fiber: clamp(self.fiber),
            salt: clamp(self.salt),
            potassium: clamp(self.potassium),
        }
    }
}

impl Add for NutrientProfile {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
            salt: self.salt + rhs.salt,
            potassium: self.potassium + rhs.potassium,
        }
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutrientProfile {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Field selector over `NutrientProfile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
    /// Fiber (g)
    Fiber,
    /// Salt (mg)
    Salt,
    /// Potassium (mg)
    Potassium,
}

impl Nutrient {
    /// Every nutrient in declaration order
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
        Self::Salt,
        Self::Potassium,
    ];

    /// Field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
            Self::Salt => "salt",
            Self::Potassium => "potassium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrients still needed to reach the effective goal
///
/// Each field is `max(0, goal - total)`; an over-target nutrient reports zero,
/// never a deficit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RemainingMacros {
    /// Energy still needed (kcal)
    pub calories: f64,
    /// Protein still needed (g)
    pub protein: f64,
    /// Carbohydrates still needed (g)
    pub carbs: f64,
    /// Fat still needed (g)
    pub fat: f64,
}

impl RemainingMacros {
    /// True when every macro goal has been met
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.calories <= 0.0 && self.protein <= 0.0 && self.carbs <= 0.0 && self.fat <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_micros_deserialize_as_zero() {
        let json = r#"{"calories": 500, "protein": 30, "carbs": 60, "fat": 12}"#;
        let profile: NutrientProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, NutrientProfile::macros_only(500.0, 30.0, 60.0, 12.0));
    }

    #[test]
    fn test_sum_of_borrowed_profiles() {
        let profiles = [
            NutrientProfile::macros_only(100.0, 10.0, 5.0, 2.0).with_micros(1.0, 50.0, 100.0),
            NutrientProfile::macros_only(200.0, 5.0, 30.0, 4.0),
        ];
        let total: NutrientProfile = profiles.iter().sum();
        assert_eq!(total.calories, 300.0);
        assert_eq!(total.protein, 15.0);
        assert_eq!(total.salt, 50.0);
    }

    #[test]
    fn test_validated_rejects_negative_and_nan() {
        let negative = NutrientProfile::macros_only(100.0, -1.0, 0.0, 0.0);
        assert_eq!(
            negative.validated(),
            Err(ModelError::InvalidNutrient {
                field: "protein",
                value: -1.0
            })
        );
        assert!(NutrientProfile::macros_only(f64::NAN, 0.0, 0.0, 0.0)
            .validated()
            .is_err());
        assert!(NutrientProfile::zero().validated().is_ok());
    }

    #[test]
    fn test_clamped_non_negative() {
        let clamped = NutrientProfile::macros_only(-50.0, 20.0, f64::INFINITY, 3.0)
            .clamped_non_negative();
        assert_eq!(clamped, NutrientProfile::macros_only(0.0, 20.0, 0.0, 3.0));
    }
}
