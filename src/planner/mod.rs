pub mod constants;
pub mod filter;
pub mod generate;
pub mod scoring;
pub mod selection;
pub mod targets;
pub mod usage;

pub use constants::*;
pub use filter::filter_by_preference;
pub use generate::PlanGenerator;
pub use scoring::{protein_density_bonus, score_meal};
pub use selection::select_for_slot;
pub use targets::{bmi, bmr, derive_profile, macro_targets, target_calories, tdee};
pub use usage::UsageTracker;
