use tracing::debug;

use crate::models::{MacroTargets, NutritionProfile, ProfileInput};
use crate::planner::constants::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, MUSCLE_GAIN_SURPLUS,
    WEIGHT_LOSS_CAL_FLOOR, WEIGHT_LOSS_DEFICIT, activity_multiplier, macro_ratios,
};

/// Body Mass Index from height and weight.
///
/// Returns 0 for non-positive heights rather than dividing by zero.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let h_m = height_cm / 100.0;
    if h_m <= 0.0 {
        return 0.0;
    }
    weight_kg / (h_m * h_m)
}

/// Basal Metabolic Rate via the Mifflin-St Jeor equation.
///
/// Any gender value other than "male" takes the female branch.
pub fn bmr(age: u32, height_cm: f64, weight_kg: f64, gender: &str) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    if gender.eq_ignore_ascii_case("male") {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Total Daily Energy Expenditure from BMR and an activity level.
pub fn tdee(bmr: f64, activity_level: &str) -> f64 {
    let val = bmr * activity_multiplier(activity_level);
    debug!(tdee = val, activity_level, "TDEE calculated");
    val
}

/// Daily calorie target adjusted for a health goal.
///
/// Unrecognized goals leave TDEE unchanged.
pub fn target_calories(tdee: f64, health_goal: &str) -> f64 {
    let val = match health_goal {
        "weight_loss" => (tdee - WEIGHT_LOSS_DEFICIT).max(WEIGHT_LOSS_CAL_FLOOR),
        "muscle_gain" => tdee + MUSCLE_GAIN_SURPLUS,
        _ => tdee,
    };
    debug!(health_goal, calories = val, "target calories");
    val
}

/// Gram-based macro targets from a calorie target and preference.
///
/// Rounded to the nearest whole gram.
pub fn macro_targets(target_calories: f64, dietary_preference: &str) -> MacroTargets {
    let ratios = macro_ratios(dietary_preference);
    let macros = MacroTargets {
        protein_g: (target_calories * ratios.protein / KCAL_PER_G_PROTEIN).round(),
        carbs_g: (target_calories * ratios.carbs / KCAL_PER_G_CARBS).round(),
        fat_g: (target_calories * ratios.fat / KCAL_PER_G_FAT).round(),
    };
    debug!(?macros, dietary_preference, "macros calculated");
    macros
}

/// Derive the full nutrition profile from raw biometrics.
///
/// Runs bmi -> bmr -> tdee -> target calories -> macros and freezes the
/// results; generators treat the returned profile as immutable.
pub fn derive_profile(input: &ProfileInput) -> NutritionProfile {
    let bmi_val = bmi(input.height_cm, input.weight_kg);
    let bmr_val = bmr(input.age, input.height_cm, input.weight_kg, &input.gender);
    let tdee_val = tdee(bmr_val, &input.activity_level);
    let calories = target_calories(tdee_val, &input.health_goal);
    let macros = macro_targets(calories, &input.dietary_preference);

    NutritionProfile {
        age: input.age,
        height_cm: input.height_cm,
        weight_kg: input.weight_kg,
        gender: input.gender.clone(),
        activity_level: input.activity_level.clone(),
        health_goal: input.health_goal.clone(),
        dietary_preference: input.dietary_preference.clone(),
        allergies: input.allergies.clone(),
        bmi: bmi_val,
        target_calories: calories,
        macros,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let val = bmi(175.0, 75.0);
        assert!((val - 24.489795918367346).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert_eq!(bmi(0.0, 75.0), 0.0);
        assert_eq!(bmi(-10.0, 75.0), 0.0);
    }

    #[test]
    fn test_bmr_male_female() {
        // male: 10*75 + 6.25*175 - 5*30 + 5
        assert!((bmr(30, 175.0, 75.0, "male") - 1698.75).abs() < 1e-9);
        // female branch subtracts 161
        assert!((bmr(30, 175.0, 75.0, "female") - 1532.75).abs() < 1e-9);
        // anything other than "male" takes the female branch
        assert!((bmr(30, 175.0, 75.0, "other") - 1532.75).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_unknown_activity_defaults() {
        assert!((tdee(1000.0, "unknown") - 1200.0).abs() < 1e-9);
        assert!((tdee(1000.0, "very_active") - 1725.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_calories_goals() {
        assert_eq!(target_calories(2500.0, "weight_loss"), 2000.0);
        // floor kicks in when the deficit would dip below 1200
        assert_eq!(target_calories(1500.0, "weight_loss"), 1200.0);
        assert_eq!(target_calories(2500.0, "muscle_gain"), 2800.0);
        assert_eq!(target_calories(2500.0, "maintain"), 2500.0);
        assert_eq!(target_calories(2500.0, "whatever"), 2500.0);
    }

    #[test]
    fn test_macro_targets_keto() {
        let macros = macro_targets(2000.0, "keto");
        assert_eq!(macros.protein_g, 150.0);
        assert_eq!(macros.carbs_g, 50.0);
        assert_eq!(macros.fat_g, 133.0);
    }

    #[test]
    fn test_derive_profile_freezes_targets() {
        let input = ProfileInput {
            age: 30,
            height_cm: 175.0,
            weight_kg: 75.0,
            gender: "male".to_string(),
            activity_level: "moderately_active".to_string(),
            health_goal: "maintain".to_string(),
            dietary_preference: "balanced".to_string(),
            allergies: vec![],
        };
        let profile = derive_profile(&input);
        assert!((profile.target_calories - 2633.0625).abs() < 1e-9);
        assert_eq!(profile.macros.protein_g, 197.0);
        assert_eq!(profile.macros.carbs_g, 263.0);
        assert_eq!(profile.macros.fat_g, 88.0);
    }
}
