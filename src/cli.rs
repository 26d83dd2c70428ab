use clap::{Parser, Subcommand};

/// NutriPlan — derives nutrition targets and assembles daily or weekly meal plans.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal pool file (.json or .csv).
    #[arg(short, long, default_value = "meals.json")]
    pub file: String,

    /// Print generated plans as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a single-day meal plan.
    Plan,

    /// Generate a seven-day meal plan with cross-day variety.
    Weekly,

    /// Derive and display nutrition targets without building a plan.
    Targets,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
