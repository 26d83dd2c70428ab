use tracing::debug;

use crate::models::MealCandidate;
use crate::planner::constants::HIGH_PROTEIN_PREF;

/// Narrow a meal pool to candidates compatible with a dietary preference
/// and free of allergenic ingredients. Input order is preserved.
///
/// "high-protein" is exempt from tag matching: protein adequacy is
/// enforced by the scorer, not by filtering.
pub fn filter_by_preference<'a>(
    pool: &'a [MealCandidate],
    preference: &str,
    allergies: &[String],
) -> Vec<&'a MealCandidate> {
    let out: Vec<&MealCandidate> = pool
        .iter()
        .filter(|m| matches_preference(m, preference) && !excluded_by_allergy(m, allergies))
        .collect();
    debug!(
        preference,
        before = pool.len(),
        after = out.len(),
        "filtered meals"
    );
    out
}

fn matches_preference(meal: &MealCandidate, preference: &str) -> bool {
    if preference.is_empty() || preference == "none" || preference == HIGH_PROTEIN_PREF {
        return true;
    }
    meal.has_tag(preference)
}

fn excluded_by_allergy(meal: &MealCandidate, allergies: &[String]) -> bool {
    allergies.iter().any(|a| meal.contains_allergen(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    fn meal(name: &str, tags: &[&str], ingredients: &[&str]) -> MealCandidate {
        MealCandidate {
            id: 0,
            name: name.to_string(),
            meal_type: MealSlot::Lunch,
            calories: 400.0,
            protein: 25.0,
            carbs: 40.0,
            fat: 12.0,
            dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn test_tag_match_required_for_named_preference() {
        let pool = vec![
            meal("Tofu Bowl", &["vegan"], &["tofu"]),
            meal("Steak Plate", &[], &["beef"]),
        ];
        let kept = filter_by_preference(&pool, "vegan", &[]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Tofu Bowl");
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let pool = vec![meal("Greek Salad", &["Vegetarian"], &["feta"])];
        assert_eq!(filter_by_preference(&pool, "vegetarian", &[]).len(), 1);
    }

    #[test]
    fn test_empty_and_none_pass_everything() {
        let pool = vec![
            meal("A", &["keto"], &[]),
            meal("B", &[], &[]),
        ];
        assert_eq!(filter_by_preference(&pool, "", &[]).len(), 2);
        assert_eq!(filter_by_preference(&pool, "none", &[]).len(), 2);
    }

    #[test]
    fn test_high_protein_exempt_from_tag_matching() {
        let pool = vec![meal("Untagged Chicken", &[], &["chicken"])];
        assert_eq!(filter_by_preference(&pool, "high-protein", &[]).len(), 1);
    }

    #[test]
    fn test_allergy_substring_excludes() {
        let pool = vec![
            meal("Pad Thai", &[], &["rice noodles", "Peanut sauce"]),
            meal("Fried Rice", &[], &["rice", "egg"]),
        ];
        let kept = filter_by_preference(&pool, "", &["peanut".to_string()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Fried Rice");
    }

    #[test]
    fn test_input_order_preserved() {
        let pool = vec![
            meal("First", &["vegan"], &[]),
            meal("Second", &["vegan"], &[]),
            meal("Third", &["vegan"], &[]),
        ];
        let kept = filter_by_preference(&pool, "vegan", &[]);
        let names: Vec<&str> = kept.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
