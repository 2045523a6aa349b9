// ABOUTME: Service provider interface for the external AI collaborators
// ABOUTME: Async traits for meal analysis, coaching advice, and recipe completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Collaborator Service Provider Interface
//!
//! Meal analysis, coaching and recipe generation are delegated to hosted
//! models. This module defines only the boundary: the traits a client must
//! implement, the payloads that cross it, and the orchestration in
//! [`service`] that keeps the accounting core pure.
//!
//! ## Example: Logging an analysed meal
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use fuelwise::collaborators::{log_analyzed_meal, CollaboratorConfig, MealAnalysisRequest, MealAnalyzer};
//! use fuelwise::session::NutritionSession;
//!
//! async fn example(session: &mut NutritionSession, analyzer: &dyn MealAnalyzer) {
//!     let request = MealAnalysisRequest::text("two eggs and toast");
//!     let config = CollaboratorConfig::default();
//!     let id = log_analyzed_meal(session, analyzer, request, Utc::now(), &config).await;
//! }
//! ```

mod adapter;
/// Collaborator call configuration
pub mod config;
/// Payload types
pub mod models;
/// Orchestration of collaborator calls around a session
pub mod service;

pub use config::CollaboratorConfig;
pub use models::{
    CoachingRequest, MealAnalysis, MealAnalysisRequest, RecipeIngredient, RecipeRequest,
    RecipeSuggestion,
};
pub use service::{coaching_advice, log_analyzed_meal, request_recipe};

use async_trait::async_trait;

use crate::errors::AppError;

/// Turns free text and photos into a nutrient estimate
#[async_trait]
pub trait MealAnalyzer: Send + Sync {
    /// Analyse one meal description
    async fn analyze(&self, request: &MealAnalysisRequest) -> Result<MealAnalysis, AppError>;
}

/// Produces free-text coaching about the day so far
#[async_trait]
pub trait CoachingAdvisor: Send + Sync {
    /// Advice for the current entries and effective goals
    async fn advise(&self, request: &CoachingRequest<'_>) -> Result<String, AppError>;
}

/// Suggests a recipe that fills the remaining macros
#[async_trait]
pub trait RecipeCompleter: Send + Sync {
    /// Recipe for the requested meal slot
    async fn complete(&self, request: &RecipeRequest<'_>) -> Result<RecipeSuggestion, AppError>;
}
