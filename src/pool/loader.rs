use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{MealCandidate, MealSlot};
use crate::models::meal::decode_list;

/// Load a meal pool from a fixture file, dispatching on extension.
///
/// `.csv` goes through the row adapter; anything else is parsed as a JSON
/// array of candidates. Either way the result is deduplicated by
/// case-insensitive name, last occurrence winning, and the engine only
/// ever sees canonical `MealCandidate`s.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MealCandidate>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let meals = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };
    let meals = dedup_by_name(meals);
    info!(count = meals.len(), path = %path.display(), "loaded meal pool");
    Ok(meals)
}

fn load_json(path: &Path) -> Result<Vec<MealCandidate>> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<MealCandidate> = serde_json::from_str(&content)?;
    Ok(meals)
}

/// One CSV record; tag and ingredient cells hold encoded lists.
#[derive(Debug, Deserialize)]
struct MealRow {
    #[serde(default)]
    id: Option<u32>,
    name: String,
    meal_type: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    #[serde(default)]
    dietary_tags: String,
    #[serde(default)]
    ingredients: String,
}

fn load_csv(path: &Path) -> Result<Vec<MealCandidate>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut meals = Vec::new();

    for (index, record) in reader.deserialize::<MealRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                warn!(line = index + 2, %err, "skipping malformed meal row");
                continue;
            }
        };
        let meal_type: MealSlot = match row.meal_type.parse() {
            Ok(slot) => slot,
            Err(err) => {
                warn!(meal = %row.name, %err, "skipping meal with unknown type");
                continue;
            }
        };

        meals.push(MealCandidate {
            id: row.id.unwrap_or(index as u32 + 1),
            name: row.name,
            meal_type,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
            dietary_tags: decode_list(&row.dietary_tags),
            ingredients: decode_list(&row.ingredients),
        });
    }

    Ok(meals)
}

/// Deduplicate by lowercase name, last occurrence wins, order preserved.
fn dedup_by_name(meals: Vec<MealCandidate>) -> Vec<MealCandidate> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<MealCandidate> = Vec::new();
    for meal in meals {
        match seen.get(&meal.key()) {
            Some(&i) => out[i] = meal,
            None => {
                seen.insert(meal.key(), out.len());
                out.push(meal);
            }
        }
    }
    out
}
