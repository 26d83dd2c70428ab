use rand::Rng;
use tracing::{debug, warn};

use crate::models::{MacroTargets, MealCandidate, MealSlot};
use crate::planner::scoring::score_meal;

/// Pick the best-scoring meal of the given slot type from a pool.
///
/// Returns `None` when the pool holds no candidate of that type at all,
/// which signals the caller to fall back to an unfiltered source.
pub fn select_for_slot<'a, R: Rng>(
    pool: &[&'a MealCandidate],
    slot: MealSlot,
    calorie_budget: f64,
    macro_budget: &MacroTargets,
    preference: &str,
    rng: &mut R,
) -> Option<&'a MealCandidate> {
    let mut best: Option<(&MealCandidate, f64)> = None;
    for meal in pool.iter().copied().filter(|m| m.meal_type == slot) {
        let score = score_meal(meal, calorie_budget, macro_budget, preference, rng);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((meal, score));
        }
    }

    match best {
        Some((meal, score)) => {
            debug!(slot = %slot, meal = %meal.name, score, "selected meal");
            Some(meal)
        }
        None => {
            warn!(slot = %slot, "no candidates for slot");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn meal(name: &str, slot: MealSlot, cal: f64, protein: f64, carbs: f64, fat: f64) -> MealCandidate {
        MealCandidate {
            id: 0,
            name: name.to_string(),
            meal_type: slot,
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
            protein_g: 30.0,
            carbs_g: 50.0,
            fat_g: 15.0,
        }
    }

    #[test]
    fn test_restricts_to_slot_type() {
        let breakfast = meal("Oatmeal", MealSlot::Breakfast, 400.0, 30.0, 50.0, 15.0);
        let dinner = meal("Curry", MealSlot::Dinner, 400.0, 30.0, 50.0, 15.0);
        let pool: Vec<&MealCandidate> = vec![&breakfast, &dinner];

        let mut rng = StepRng::new(0, 0);
        let picked =
            select_for_slot(&pool, MealSlot::Breakfast, 400.0, &budget(), "", &mut rng).unwrap();
        assert_eq!(picked.name, "Oatmeal");
    }

    #[test]
    fn test_none_when_type_absent() {
        let lunch = meal("Wrap", MealSlot::Lunch, 400.0, 30.0, 50.0, 15.0);
        let pool: Vec<&MealCandidate> = vec![&lunch];

        let mut rng = StepRng::new(0, 0);
        assert!(select_for_slot(&pool, MealSlot::Snack, 100.0, &budget(), "", &mut rng).is_none());
    }

    #[test]
    fn test_argmax_prefers_closer_match() {
        let close = meal("On Budget", MealSlot::Lunch, 410.0, 31.0, 49.0, 15.0);
        let off = meal("Off Budget", MealSlot::Lunch, 900.0, 10.0, 120.0, 40.0);
        let pool: Vec<&MealCandidate> = vec![&off, &close];

        let mut rng = StepRng::new(0, 0);
        let picked =
            select_for_slot(&pool, MealSlot::Lunch, 400.0, &budget(), "", &mut rng).unwrap();
        assert_eq!(picked.name, "On Budget");
    }
}
