pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod pool;

pub use error::{PlanError, Result};
pub use models::{DailyPlan, MealCandidate, MealSlot, NutritionProfile, ProfileInput, WeeklyPlan};
pub use planner::PlanGenerator;
