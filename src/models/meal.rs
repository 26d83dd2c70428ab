use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// One of the four meal positions in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// All slots in plan order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            other => Err(format!("unknown meal type: {}", other)),
        }
    }
}

/// A candidate meal with nutrition data and classification tags.
///
/// `dietary_tags` and `ingredients` tolerate both native JSON arrays and
/// string cells holding an encoded list; a bad encoding decodes to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCandidate {
    #[serde(default)]
    pub id: u32,

    pub name: String,

    pub meal_type: MealSlot,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    #[serde(default, deserialize_with = "list_or_encoded")]
    pub dietary_tags: Vec<String>,

    #[serde(default, deserialize_with = "list_or_encoded")]
    pub ingredients: Vec<String>,
}

impl MealCandidate {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Fraction of calories supplied by protein.
    #[inline]
    pub fn protein_pct(&self) -> f64 {
        (self.protein * 4.0) / self.calories.max(1.0)
    }

    /// Whether the meal carries the given dietary tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.dietary_tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Whether any ingredient contains the given term (case-insensitive substring).
    pub fn contains_allergen(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.ingredients
            .iter()
            .any(|ing| ing.to_lowercase().contains(&term))
    }

    /// Basic validation: non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

/// Decode a string cell holding an encoded list of strings.
///
/// Fixtures sometimes carry python-style reprs (`['a', 'b']`), so a failed
/// JSON parse retries with single quotes swapped for double quotes.
pub fn decode_list(raw: &str) -> Vec<String> {
    if let Ok(v) = serde_json::from_str::<Vec<String>>(raw) {
        return v;
    }
    let swapped = raw.replace('\'', "\"");
    serde_json::from_str::<Vec<String>>(&swapped).unwrap_or_default()
}

pub(crate) fn list_or_encoded<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Encoded(String),
    }

    match Raw::deserialize(deserializer) {
        Ok(Raw::List(v)) => Ok(v),
        Ok(Raw::Encoded(s)) => Ok(decode_list(&s)),
        Err(_) => Ok(Vec::new()),
    }
}
