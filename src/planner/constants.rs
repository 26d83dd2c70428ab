use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealSlot;

/// Calories per gram of each macronutrient (Atwater factors).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calorie floor applied under a weight-loss goal.
pub const WEIGHT_LOSS_CAL_FLOOR: f64 = 1200.0;

/// Daily deficit for weight loss and surplus for muscle gain.
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Activity multiplier applied to unknown activity levels.
pub const DEFAULT_ACTIVITY_MULT: f64 = 1.2;

/// The preference string exempt from tag filtering and scored with
/// protein-weighted deviations.
pub const HIGH_PROTEIN_PREF: &str = "high-protein";

/// Maximum contribution of calorie proximity to a meal's score.
pub const CAL_SCORE_MAX: f64 = 30.0;

/// Maximum contribution of macro proximity to a meal's score.
pub const MACRO_SCORE_MAX: f64 = 50.0;

/// Deviation weights under the high-protein scoring regime.
pub const HP_PROTEIN_WEIGHT: f64 = 3.0;
pub const HP_CARB_WEIGHT: f64 = 0.5;

/// Protein-density bonus tiers: protein calories as a share of total.
pub const PROTEIN_PCT_HIGH: f64 = 0.35;
pub const PROTEIN_PCT_MID: f64 = 0.30;
pub const PROTEIN_BONUS_HIGH: f64 = 20.0;
pub const PROTEIN_BONUS_MID: f64 = 10.0;

/// Flat score bonus for a candidate not yet used this week in its slot.
pub const UNUSED_MEAL_BONUS: f64 = 0.5;

/// Days in a weekly plan.
pub const PLAN_DAYS: usize = 7;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("sedentary", 1.2);
    m.insert("lightly_active", 1.375);
    m.insert("moderately_active", 1.55);
    m.insert("very_active", 1.725);
    m.insert("extremely_active", 1.9);
    m
});

/// Get the TDEE multiplier for an activity level (case-insensitive).
///
/// Unknown levels fall back to the sedentary multiplier.
pub fn activity_multiplier(level: &str) -> f64 {
    ACTIVITY_MULTIPLIERS
        .get(level.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_ACTIVITY_MULT)
}

/// Share of daily calories and macros allotted to each slot.
///
/// The four weights sum to 1.0.
pub const fn slot_weight(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.35,
        MealSlot::Snack => 0.05,
    }
}

/// Calorie share of protein/carbs/fat for a dietary preference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Ratio presets keyed by preference; anything unrecognized gets the
/// balanced default.
pub fn macro_ratios(dietary_preference: &str) -> MacroRatios {
    match dietary_preference {
        "keto" => MacroRatios {
            protein: 0.3,
            carbs: 0.1,
            fat: 0.6,
        },
        HIGH_PROTEIN_PREF => MacroRatios {
            protein: 0.4,
            carbs: 0.3,
            fat: 0.3,
        },
        _ => MacroRatios {
            protein: 0.3,
            carbs: 0.4,
            fat: 0.3,
        },
    }
}
