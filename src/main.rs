use clap::Parser;
use std::path::Path;

use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::Result;
use nutri_plan_rs::interface::{collect_profile, display_daily_plan, display_targets, display_weekly_plan};
use nutri_plan_rs::planner::{PlanGenerator, derive_profile};
use nutri_plan_rs::pool::load_meals;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file, cli.json),
        Command::Weekly => cmd_weekly(&cli.file, cli.json),
        Command::Targets => cmd_targets(&cli.file),
    }
}

/// Generate and display a single-day plan.
fn cmd_plan(file_path: &str, json: bool) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    let input = collect_profile(&pool)?;
    let profile = derive_profile(&input);

    let mut generator = PlanGenerator::new();
    let plan = generator.daily_plan(&profile, &pool);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_targets(&profile);
        display_daily_plan(&plan);
    }

    Ok(())
}

/// Generate and display a seven-day plan.
fn cmd_weekly(file_path: &str, json: bool) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    let input = collect_profile(&pool)?;
    let profile = derive_profile(&input);

    let mut generator = PlanGenerator::new();
    let plan = generator.weekly_plan(&profile, &pool);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_targets(&profile);
        display_weekly_plan(&plan);
    }

    Ok(())
}

/// Derive and display nutrition targets only.
///
/// The pool is optional here; it only feeds allergy-term matching.
fn cmd_targets(file_path: &str) -> Result<()> {
    let pool = if Path::new(file_path).exists() {
        load_meals(file_path)?
    } else {
        Vec::new()
    };

    let input = collect_profile(&pool)?;
    let profile = derive_profile(&input);
    display_targets(&profile);

    Ok(())
}

fn load_pool(file_path: &str) -> Result<Option<Vec<nutri_plan_rs::MealCandidate>>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Meal pool file not found: {}", file_path);
        eprintln!("Provide a .json or .csv meal pool with --file.");
        return Ok(None);
    }

    let pool = load_meals(path)?;
    if pool.is_empty() {
        println!("Meal pool is empty; nothing to plan with.");
        return Ok(None);
    }

    println!("Loaded {} meals", pool.len());
    Ok(Some(pool))
}
