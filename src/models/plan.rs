use chrono::NaiveDate;
use serde::Serialize;

use crate::models::meal::{MealCandidate, MealSlot};

/// One meal bound to one slot, carrying a snapshot of its nutrition fields.
///
/// Decoupled from the source candidate after selection.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAssignment {
    pub slot: MealSlot,
    pub meal_id: u32,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl SlotAssignment {
    pub fn from_meal(slot: MealSlot, meal: &MealCandidate) -> Self {
        Self {
            slot,
            meal_id: meal.id,
            name: meal.name.clone(),
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
        }
    }
}

/// Summed nutrition over the filled slots of a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailyTotals {
    pub fn add(&mut self, assignment: &SlotAssignment) {
        self.calories += assignment.calories;
        self.protein += assignment.protein;
        self.carbs += assignment.carbs;
        self.fat += assignment.fat;
    }

    /// Each field rounded to one decimal place.
    pub fn rounded(self) -> DailyTotals {
        DailyTotals {
            calories: round1(self.calories),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
        }
    }
}

/// A single day's plan: assigned slots in fixed order plus summed totals.
///
/// A slot with no viable candidate is omitted, so `meals` may hold fewer
/// than four entries.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub meals: Vec<SlotAssignment>,
    pub daily_totals: DailyTotals,
}

impl DailyPlan {
    /// The assignment for a given slot, if filled.
    pub fn slot(&self, slot: MealSlot) -> Option<&SlotAssignment> {
        self.meals.iter().find(|a| a.slot == slot)
    }
}

/// Seven consecutive daily plans.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlan {
    pub days: Vec<DailyPlan>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
