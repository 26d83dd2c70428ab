use serde::{Deserialize, Serialize};

/// Raw biometrics and preferences supplied by the caller.
///
/// Allergies tolerate both a native JSON array and an encoded string cell,
/// matching how upstream stores serialize them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: u32,

    pub height_cm: f64,

    pub weight_kg: f64,

    pub gender: String,

    pub activity_level: String,

    pub health_goal: String,

    #[serde(default)]
    pub dietary_preference: String,

    #[serde(default, deserialize_with = "crate::models::meal::list_or_encoded")]
    pub allergies: Vec<String>,
}

/// Gram targets for the three macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTargets {
    /// Scale all three targets by a slot weight.
    pub fn scaled(&self, weight: f64) -> MacroTargets {
        MacroTargets {
            protein_g: self.protein_g * weight,
            carbs_g: self.carbs_g * weight,
            fat_g: self.fat_g * weight,
        }
    }
}

/// A physiological profile with derived energy and macro targets.
///
/// Targets are computed once by `planner::targets::derive_profile` and are
/// immutable for the duration of a plan run.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionProfile {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: String,
    pub activity_level: String,
    pub health_goal: String,
    pub dietary_preference: String,
    pub allergies: Vec<String>,
    pub bmi: f64,
    pub target_calories: f64,
    pub macros: MacroTargets,
}
