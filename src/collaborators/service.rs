// ABOUTME: Orchestrates collaborator calls around a nutrition session
// ABOUTME: Timeouts, error mapping, coaching fallback, and recipe request assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;

use chrono::{DateTime, Utc};
use tokio::time::timeout;
use tracing::{info, warn};
use uuid::Uuid;

use super::config::CollaboratorConfig;
use super::models::{CoachingRequest, MealAnalysisRequest, RecipeRequest, RecipeSuggestion};
use super::{CoachingAdvisor, MealAnalyzer, RecipeCompleter};
use crate::constants::collaborators;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::session::NutritionSession;

/// Await `call`, failing with a retryable error once the timeout elapses
async fn bounded<T, F>(service: &'static str, config: &CollaboratorConfig, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    timeout(config.timeout(), call)
        .await
        .unwrap_or_else(|_| Err(AppError::external_timeout(service, config.timeout_secs)))
}

/// Re-label a collaborator failure as an external-service error
fn as_external(service: &'static str, error: AppError) -> AppError {
    match error.code {
        ErrorCode::ExternalServiceError | ErrorCode::ExternalServiceUnavailable => error,
        _ => AppError::external_service(service, error.message.clone()).with_source(error),
    }
}

/// Analyse a meal and add the resulting entry to the session
///
/// The session is only touched after a successful analysis; on any failure
/// it is left exactly as it was.
///
/// # Errors
///
/// Returns an external-service error if the analyzer fails or times out, or
/// `ResourceAlreadyExists` if the analyzer's entry id collides.
pub async fn log_analyzed_meal(
    session: &mut NutritionSession,
    analyzer: &dyn MealAnalyzer,
    request: MealAnalysisRequest,
    timestamp: DateTime<Utc>,
    config: &CollaboratorConfig,
) -> AppResult<Uuid> {
    let analysis = bounded(collaborators::MEAL_ANALYSIS, config, analyzer.analyze(&request))
        .await
        .map_err(|e| as_external(collaborators::MEAL_ANALYSIS, e))
        .inspect_err(|e| warn!(error = %e, "Meal analysis failed"))?;

    let entry = analysis.into_entry(timestamp, request.context_tags, request.images);
    let id = entry.id;
    session.add_entry(entry)?;
    Ok(id)
}

/// Coaching advice for the session, or the configured fallback text
///
/// Never fails: timeouts, collaborator errors and blank answers all yield
/// `config.coaching_fallback`.
pub async fn coaching_advice(
    session: &NutritionSession,
    advisor: &dyn CoachingAdvisor,
    config: &CollaboratorConfig,
) -> String {
    let request = CoachingRequest {
        entries: session.entries(),
        goals: session.effective_goals(),
    };

    match bounded(collaborators::COACHING, config, advisor.advise(&request)).await {
        Ok(advice) if !advice.trim().is_empty() => advice,
        Ok(_) => {
            warn!("Coaching collaborator returned no text, using fallback");
            config.coaching_fallback.clone()
        }
        Err(e) => {
            warn!(error = %e, "Coaching collaborator failed, using fallback");
            config.coaching_fallback.clone()
        }
    }
}

/// Assemble the recipe-completion payload for the session
///
/// Remaining macros and the next meal slot are computed fresh from the
/// session at `current_hour`.
#[must_use]
pub fn recipe_request(
    session: &NutritionSession,
    inventory: Vec<String>,
    craving: Option<String>,
    current_hour: u32,
) -> RecipeRequest<'_> {
    RecipeRequest {
        entries: session.entries(),
        goals: session.effective_goals(),
        remaining: session.remaining(),
        inventory,
        craving: craving.filter(|c| !c.trim().is_empty()),
        next_meal: session.next_meal(current_hour),
    }
}

/// Ask the recipe collaborator to fill the rest of the day
///
/// # Errors
///
/// Returns an external-service error if the completer fails or times out.
pub async fn request_recipe(
    session: &NutritionSession,
    completer: &dyn RecipeCompleter,
    inventory: Vec<String>,
    craving: Option<String>,
    current_hour: u32,
    config: &CollaboratorConfig,
) -> AppResult<RecipeSuggestion> {
    let request = recipe_request(session, inventory, craving, current_hour);

    let recipe = bounded(collaborators::RECIPE, config, completer.complete(&request))
        .await
        .map_err(|e| as_external(collaborators::RECIPE, e))
        .inspect_err(|e| warn!(error = %e, "Recipe completion failed"))?;

    info!(
        title = %recipe.title,
        meal = %request.next_meal,
        remaining_kcal = request.remaining.calories,
        "Recipe suggested"
    );
    Ok(recipe)
}
