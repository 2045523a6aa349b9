// ABOUTME: Command-line driver that loads a day snapshot and prints the dashboard and week
// ABOUTME: Applies training-day, step and water overrides before computing projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fuelwise demo driver.
//!
//! Usage:
//! ```bash
//! # Empty day with default goals
//! cargo run --bin fuelwise-demo
//!
//! # Load a saved day and evaluate it at 14:00 on a training day
//! cargo run --bin fuelwise-demo -- --input day.json --hour 14 --training-day --steps 11000
//!
//! # Reproducible synthetic history
//! cargo run --bin fuelwise-demo -- --date 2025-03-12 --seed 7
//!
//! # Only real data in the weekly log
//! cargo run --bin fuelwise-demo -- --no-synthetic
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Timelike, Utc};
use clap::{value_parser, Parser};
use fuelwise::intelligence::{EngineConfig, NoHistory, SyntheticHistory};
use fuelwise::logging;
use fuelwise::snapshot::SessionSnapshot;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fuelwise-demo",
    about = "Fuelwise nutrition accounting demo",
    long_about = "Load a day of nutrition entries and print the daily dashboard and weekly log as JSON"
)]
struct DemoArgs {
    /// Session snapshot to load (JSON); an empty day is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the (possibly modified) snapshot back to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Day treated as today (YYYY-MM-DD, default: current UTC date)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Hour of day used for meal selection (default: current UTC hour)
    #[arg(long, value_parser = value_parser!(u32).range(0..24))]
    hour: Option<u32>,

    /// Mark today as a training day
    #[arg(long)]
    training_day: bool,

    /// Step count for today
    #[arg(long)]
    steps: Option<u32>,

    /// Additional water to log (mL)
    #[arg(long, default_value = "0")]
    water: u32,

    /// Random seed for reproducible synthetic history
    #[arg(long)]
    seed: Option<u64>,

    /// Leave past days without data empty instead of synthesizing them
    #[arg(long)]
    no_synthetic: bool,
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    logging::init_from_env()?;

    let mut config = EngineConfig::load().context("Invalid engine configuration")?;
    if args.no_synthetic {
        config.synthetic_history.enabled = false;
    }
    if let Some(seed) = args.seed {
        config.synthetic_history.seed = Some(seed);
    }

    let snapshot = match &args.input {
        Some(path) => SessionSnapshot::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SessionSnapshot::default(),
    };
    let mut session = snapshot.into_session(config)?;

    if args.training_day {
        session.set_training_day(true);
    }
    if let Some(steps) = args.steps {
        session.set_steps(steps);
    }
    if args.water > 0 {
        session.add_water(args.water);
    }

    let now = Utc::now();
    let today = args.date.unwrap_or_else(|| now.date_naive());
    let hour = args.hour.unwrap_or_else(|| now.hour());

    let synthetic = &session.config().synthetic_history;
    let week = if synthetic.enabled {
        session.week_from(
            today,
            SyntheticHistory::from_config(session.goals(), synthetic.clone()),
        )
    } else {
        session.week_from(today, NoHistory)
    };
    let dashboard = session.dashboard(hour);

    info!(
        %today,
        hour,
        entries = dashboard.entry_count,
        next_meal = %dashboard.next_meal,
        "Day evaluated"
    );

    let report = json!({
        "date": today,
        "dashboard": dashboard,
        "daily_calories": week.daily_calories(),
        "week": week,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = &args.save {
        SessionSnapshot::capture(&session).save(path)?;
        info!(path = %path.display(), "Snapshot saved");
    }

    Ok(())
}
