// ABOUTME: Application-wide constants for service identity and collaborator defaults
// ABOUTME: Service names, collaborator labels, and fallback messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const FUELWISE: &str = "fuelwise";
}

/// Names of the external collaborators, used in logs and error context
pub mod collaborators {
    /// Multimodal meal analysis
    pub const MEAL_ANALYSIS: &str = "meal_analysis";
    /// Coaching advice generation
    pub const COACHING: &str = "coaching";
    /// Recipe completion
    pub const RECIPE: &str = "recipe";

    /// Seconds to wait for any collaborator response
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Shown in place of coaching advice when the collaborator fails
    pub const COACHING_FALLBACK: &str =
        "Coaching is unavailable right now. Keep logging your meals and check back later.";
}
