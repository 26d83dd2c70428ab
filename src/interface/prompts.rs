use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{MealCandidate, ProfileInput};

const GENDERS: [&str; 2] = ["male", "female"];

const ACTIVITY_LEVELS: [&str; 5] = [
    "sedentary",
    "lightly_active",
    "moderately_active",
    "very_active",
    "extremely_active",
];

const HEALTH_GOALS: [&str; 3] = ["maintain", "weight_loss", "muscle_gain"];

const DIETARY_PREFERENCES: [&str; 8] = [
    "balanced",
    "keto",
    "high-protein",
    "vegetarian",
    "vegan",
    "paleo",
    "mediterranean",
    "none",
];

/// Collect a full profile interactively.
///
/// The meal pool supplies the ingredient vocabulary used to fuzzy-match
/// typed allergy terms; an empty pool just skips the matching step.
pub fn collect_profile(pool: &[MealCandidate]) -> Result<ProfileInput> {
    let age = prompt_number::<u32>("Age", "30")?;
    let height_cm = prompt_number::<f64>("Height (cm)", "175")?;
    let weight_kg = prompt_number::<f64>("Weight (kg)", "75")?;

    let gender = prompt_choice("Gender", &GENDERS)?;
    let activity_level = prompt_choice("Activity level", &ACTIVITY_LEVELS)?;
    let health_goal = prompt_choice("Health goal", &HEALTH_GOALS)?;
    let dietary_preference = prompt_choice("Dietary preference", &DIETARY_PREFERENCES)?;

    let allergies = prompt_allergies(pool)?;

    Ok(ProfileInput {
        age,
        height_cm,
        weight_kg,
        gender,
        activity_level,
        health_goal,
        dietary_preference,
        allergies,
    })
}

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_choice(prompt: &str, options: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for allergy terms with fuzzy matching against the pool's
/// ingredient vocabulary.
pub fn prompt_allergies(pool: &[MealCandidate]) -> Result<Vec<String>> {
    let vocabulary: Vec<String> = pool
        .iter()
        .flat_map(|m| m.ingredients.iter())
        .map(|i| i.to_lowercase())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let mut allergies = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an allergy (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        // exact ingredient hit needs no confirmation
        if vocabulary.iter().any(|v| v.contains(&input)) {
            println!("Added: {}", input);
            allergies.push(input);
            continue;
        }

        // fuzzy match against the vocabulary
        let mut candidates: Vec<(&String, f64)> = vocabulary
            .iter()
            .map(|v| (v, jaro_winkler(v, &input)))
            .filter(|(_, score)| *score > 0.85)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((best, _)) = candidates.first() {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", best))
                .default(true)
                .interact()?;
            if confirm {
                println!("Added: {}", best);
                allergies.push((*best).clone());
                continue;
            }
        }

        // keep the raw term; the filter treats it as a substring anyway
        println!("Added (not in ingredient list): {}", input);
        allergies.push(input);
    }

    Ok(allergies)
}
