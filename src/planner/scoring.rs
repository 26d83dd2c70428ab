use rand::Rng;
use tracing::trace;

use crate::models::{MacroTargets, MealCandidate};
use crate::planner::constants::{
    CAL_SCORE_MAX, HIGH_PROTEIN_PREF, HP_CARB_WEIGHT, HP_PROTEIN_WEIGHT, MACRO_SCORE_MAX,
    PROTEIN_BONUS_HIGH, PROTEIN_BONUS_MID, PROTEIN_PCT_HIGH, PROTEIN_PCT_MID,
};

/// Score one meal against a slot's calorie and macro budget; higher is better.
///
/// Under "high-protein", protein deviation is weighted x3 and carb
/// deviation x0.5 (in the deviation sum and its denominator alike), and a
/// protein-density bonus is added. The uniform jitter in [0, 1) exists
/// only to break exact ties between otherwise identical candidates.
pub fn score_meal<R: Rng>(
    meal: &MealCandidate,
    calorie_budget: f64,
    macro_budget: &MacroTargets,
    preference: &str,
    rng: &mut R,
) -> f64 {
    let cal_diff = (meal.calories - calorie_budget).abs();
    let cal_score = (CAL_SCORE_MAX - CAL_SCORE_MAX * cal_diff / calorie_budget.max(1.0)).max(0.0);

    let p_diff = (meal.protein - macro_budget.protein_g).abs();
    let c_diff = (meal.carbs - macro_budget.carbs_g).abs();
    let f_diff = (meal.fat - macro_budget.fat_g).abs();

    let (deviation, denom, bonus) = if preference == HIGH_PROTEIN_PREF {
        let deviation = HP_PROTEIN_WEIGHT * p_diff + HP_CARB_WEIGHT * c_diff + f_diff;
        let denom = HP_PROTEIN_WEIGHT * macro_budget.protein_g
            + HP_CARB_WEIGHT * macro_budget.carbs_g
            + macro_budget.fat_g.max(1.0);
        (deviation, denom, protein_density_bonus(meal))
    } else {
        let deviation = p_diff + c_diff + f_diff;
        let denom = macro_budget.protein_g + macro_budget.carbs_g + macro_budget.fat_g.max(1.0);
        (deviation, denom, 0.0)
    };
    let macro_score = (MACRO_SCORE_MAX - MACRO_SCORE_MAX * deviation / denom).max(0.0);

    let jitter: f64 = rng.r#gen();
    let score = cal_score + macro_score + bonus + jitter;
    trace!(meal = %meal.name, score, "score meal");
    score
}

/// Bonus for protein-dense meals: +20 at >= 35% of calories from protein,
/// +10 at >= 30%.
pub fn protein_density_bonus(meal: &MealCandidate) -> f64 {
    let pct = meal.protein_pct();
    if pct >= PROTEIN_PCT_HIGH {
        PROTEIN_BONUS_HIGH
    } else if pct >= PROTEIN_PCT_MID {
        PROTEIN_BONUS_MID
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;
    use rand::rngs::mock::StepRng;

    fn meal(cal: f64, protein: f64, carbs: f64, fat: f64) -> MealCandidate {
        MealCandidate {
            id: 0,
            name: "Test Meal".to_string(),
            meal_type: MealSlot::Lunch,
            calories: cal,
            protein,
            carbs,
            fat,
            dietary_tags: vec![],
            ingredients: vec![],
        }
    }

    fn budget() -> MacroTargets {
        MacroTargets {
            protein_g: 40.0,
            carbs_g: 60.0,
            fat_g: 20.0,
        }
    }

    // StepRng::new(0, 0) makes the jitter a constant 0.0.
    fn rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_perfect_match_scores_full_marks() {
        let m = meal(600.0, 40.0, 60.0, 20.0);
        let score = score_meal(&m, 600.0, &budget(), "balanced", &mut rng());
        assert!((score - (CAL_SCORE_MAX + MACRO_SCORE_MAX)).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_distance_lowers_score() {
        let near = meal(580.0, 40.0, 60.0, 20.0);
        let far = meal(300.0, 40.0, 60.0, 20.0);
        let s_near = score_meal(&near, 600.0, &budget(), "balanced", &mut rng());
        let s_far = score_meal(&far, 600.0, &budget(), "balanced", &mut rng());
        assert!(s_near > s_far);
    }

    #[test]
    fn test_scores_never_go_negative() {
        let wild = meal(5000.0, 300.0, 500.0, 200.0);
        let score = score_meal(&wild, 100.0, &budget(), "balanced", &mut rng());
        assert!(score >= 0.0);
    }

    #[test]
    fn test_high_protein_density_bonus_tiers() {
        // 45g protein * 4 / 500 cal = 0.36 -> top tier
        assert_eq!(protein_density_bonus(&meal(500.0, 45.0, 30.0, 10.0)), 20.0);
        // 40g * 4 / 500 = 0.32 -> mid tier
        assert_eq!(protein_density_bonus(&meal(500.0, 40.0, 30.0, 10.0)), 10.0);
        // 20g * 4 / 500 = 0.16 -> none
        assert_eq!(protein_density_bonus(&meal(500.0, 20.0, 30.0, 10.0)), 0.0);
    }

    #[test]
    fn test_high_protein_bonus_is_exactly_twenty() {
        // both meals sit 5g from the protein budget, so their weighted
        // deviations are identical; only the density bonus differs
        let dense = meal(500.0, 45.0, 40.0, 15.0); // 45*4/500 = 0.36
        let sparse = meal(500.0, 35.0, 40.0, 15.0); // 35*4/500 = 0.28
        let b = MacroTargets {
            protein_g: 40.0,
            carbs_g: 40.0,
            fat_g: 15.0,
        };
        let s_dense = score_meal(&dense, 500.0, &b, "high-protein", &mut rng());
        let s_sparse = score_meal(&sparse, 500.0, &b, "high-protein", &mut rng());
        assert!((s_dense - s_sparse - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_only_applies_under_high_protein() {
        let dense = meal(500.0, 50.0, 30.0, 15.0);
        let b = budget();
        let default_score = score_meal(&dense, 500.0, &b, "balanced", &mut rng());
        // without the bonus the score is capped at cal + macro maxima
        assert!(default_score <= CAL_SCORE_MAX + MACRO_SCORE_MAX);
    }

    #[test]
    fn test_jitter_stays_below_one() {
        let m = meal(600.0, 40.0, 60.0, 20.0);
        let mut live_rng = rand::thread_rng();
        let score = score_meal(&m, 600.0, &budget(), "balanced", &mut live_rng);
        // perfect match: everything but jitter is exactly 80
        assert!(score >= CAL_SCORE_MAX + MACRO_SCORE_MAX);
        assert!(score < CAL_SCORE_MAX + MACRO_SCORE_MAX + 1.0);
    }
}
