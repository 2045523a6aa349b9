// ABOUTME: Integration tests for collaborator orchestration around a session
// ABOUTME: Uses in-process fakes to cover success, failure, timeout and fallback paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use common::{at, create_session_with_meals, create_test_session};
use fuelwise::collaborators::service::recipe_request;
use fuelwise::collaborators::{
    coaching_advice, log_analyzed_meal, request_recipe, CoachingAdvisor, CoachingRequest,
    CollaboratorConfig, MealAnalysis, MealAnalysisRequest, MealAnalyzer, RecipeCompleter,
    RecipeIngredient, RecipeRequest, RecipeSuggestion,
};
use fuelwise::errors::{AppError, ErrorCode};
use fuelwise::models::{MealSlot, NutrientProfile};

struct FixedAnalyzer(MealAnalysis);

#[async_trait]
impl MealAnalyzer for FixedAnalyzer {
    async fn analyze(&self, _request: &MealAnalysisRequest) -> Result<MealAnalysis, AppError> {
        Ok(self.0.clone())
    }
}

struct FailingAnalyzer;

#[async_trait]
impl MealAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _request: &MealAnalysisRequest) -> Result<MealAnalysis, AppError> {
        Err(AppError::invalid_input("model returned malformed JSON"))
    }
}

struct SlowAnalyzer;

#[async_trait]
impl MealAnalyzer for SlowAnalyzer {
    async fn analyze(&self, _request: &MealAnalysisRequest) -> Result<MealAnalysis, AppError> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Ok(oatmeal())
    }
}

struct ScriptedAdvisor(Result<String, ErrorCode>);

#[async_trait]
impl CoachingAdvisor for ScriptedAdvisor {
    async fn advise(&self, _request: &CoachingRequest<'_>) -> Result<String, AppError> {
        self.0
            .clone()
            .map_err(|code| AppError::new(code, "advisor unavailable"))
    }
}

#[derive(Default)]
struct RecordingCompleter {
    seen: Mutex<Option<(MealSlot, f64, Option<String>)>>,
}

#[async_trait]
impl RecipeCompleter for RecordingCompleter {
    async fn complete(&self, request: &RecipeRequest<'_>) -> Result<RecipeSuggestion, AppError> {
        *self.seen.lock().unwrap() = Some((
            request.next_meal,
            request.remaining.protein,
            request.craving.clone(),
        ));
        Ok(RecipeSuggestion {
            title: "Salmon rice bowl".to_owned(),
            description: "Fills the remaining protein and carbs".to_owned(),
            ingredients: vec![RecipeIngredient {
                name: "salmon".to_owned(),
                quantity: "200 g".to_owned(),
            }],
            instructions: vec!["Cook rice".to_owned(), "Sear salmon".to_owned()],
            macros: NutrientProfile::macros_only(850.0, 55.0, 90.0, 28.0),
        })
    }
}

fn oatmeal() -> MealAnalysis {
    MealAnalysis {
        nutrients: NutrientProfile::macros_only(380.0, 14.0, 62.0, 8.0),
        meal_slot: "breakfast".to_owned(),
        inflammation_flags: vec!["gluten".to_owned()],
        insight: "Good fibre start".to_owned(),
    }
}

fn fast_config() -> CollaboratorConfig {
    CollaboratorConfig {
        timeout_secs: 1,
        ..CollaboratorConfig::default()
    }
}

#[tokio::test]
async fn test_analyzed_meal_is_logged() {
    let mut session = create_test_session();
    let request = MealAnalysisRequest::text("oatmeal with berries").with_tags(["home", "quick"]);

    let id = log_analyzed_meal(
        &mut session,
        &FixedAnalyzer(oatmeal()),
        request,
        at(7, 30),
        &fast_config(),
    )
    .await
    .unwrap();

    let entry = session.entry(id).unwrap();
    assert_eq!(entry.meal_slot, MealSlot::Breakfast);
    assert_eq!(entry.nutrients.calories, 380.0);
    assert!(entry.context_tags.contains("home"));
    assert!(entry.inflammation_flags.contains("gluten"));
    assert_eq!(entry.insight.as_deref(), Some("Good fibre start"));
    assert_eq!(session.remaining().calories, 2200.0 - 380.0);
}

#[tokio::test]
async fn test_failed_analysis_leaves_session_untouched() {
    let mut session = create_session_with_meals();
    let before = session.entries().to_vec();

    let err = log_analyzed_meal(
        &mut session,
        &FailingAnalyzer,
        MealAnalysisRequest::text("mystery stew"),
        at(18, 0),
        &fast_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(session.entries(), before.as_slice());
}

#[tokio::test]
async fn test_slow_analysis_times_out() {
    let mut session = create_test_session();

    let err = log_analyzed_meal(
        &mut session,
        &SlowAnalyzer,
        MealAnalysisRequest::text("oatmeal"),
        at(7, 0),
        &fast_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.code.is_retryable());
    assert!(session.entries().is_empty());
}

#[tokio::test]
async fn test_coaching_falls_back_on_failure_or_blank() {
    let session = create_session_with_meals();
    let config = fast_config();

    let advice = coaching_advice(
        &session,
        &ScriptedAdvisor(Ok("Add protein at dinner".to_owned())),
        &config,
    )
    .await;
    assert_eq!(advice, "Add protein at dinner");

    let advice = coaching_advice(&session, &ScriptedAdvisor(Ok("   ".to_owned())), &config).await;
    assert_eq!(advice, config.coaching_fallback);

    let advice = coaching_advice(
        &session,
        &ScriptedAdvisor(Err(ErrorCode::ExternalServiceUnavailable)),
        &config,
    )
    .await;
    assert_eq!(advice, config.coaching_fallback);
}

#[tokio::test]
async fn test_recipe_request_carries_remaining_and_next_meal() {
    let mut session = create_session_with_meals();
    session.set_training_day(true);
    let completer = RecordingCompleter::default();

    let recipe = request_recipe(
        &session,
        &completer,
        vec!["salmon".to_owned(), "rice".to_owned()],
        Some("something warm".to_owned()),
        17,
        &fast_config(),
    )
    .await
    .unwrap();

    assert_eq!(recipe.title, "Salmon rice bowl");
    let seen = completer.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.0, MealSlot::Dinner);
    assert_eq!(seen.1, 90.0);
    assert_eq!(seen.2.as_deref(), Some("something warm"));
}

#[test]
fn test_blank_craving_is_dropped() {
    let session = create_session_with_meals();
    let request = recipe_request(&session, Vec::new(), Some("  ".to_owned()), 16);
    assert!(request.craving.is_none());
    assert_eq!(request.remaining.calories, 1000.0);
    assert_eq!(request.entries.len(), 3);
}
