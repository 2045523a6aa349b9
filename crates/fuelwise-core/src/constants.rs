// ABOUTME: Nutrition constants shared by the Fuelwise engine crates
// ABOUTME: Energy densities per macronutrient, default goal targets, and weekday labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared nutrition constants.

/// Atwater energy densities (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Targets a fresh session starts with before the user edits them
pub mod default_goals {
    /// Daily energy target (kcal)
    pub const CALORIES: f64 = 2200.0;
    /// Daily protein target (g)
    pub const PROTEIN_G: f64 = 180.0;
    /// Daily carbohydrate target (g)
    pub const CARBS_G: f64 = 200.0;
    /// Daily fat target (g)
    pub const FAT_G: f64 = 70.0;
    /// Daily fiber target (g)
    pub const FIBER_G: f64 = 30.0;
    /// Daily salt ceiling (mg)
    pub const SALT_MG: f64 = 2300.0;
    /// Daily potassium target (mg)
    pub const POTASSIUM_MG: f64 = 3500.0;
    /// Daily water target (mL)
    pub const WATER_ML: u32 = 2500;
}

/// Short weekday labels, Monday first
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Number of days in a weekly log
pub const DAYS_PER_WEEK: usize = 7;
