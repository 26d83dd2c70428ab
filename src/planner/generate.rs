use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::models::{
    DailyPlan, DailyTotals, MacroTargets, MealCandidate, MealSlot, NutritionProfile,
    SlotAssignment, WeeklyPlan,
};
use crate::planner::constants::{PLAN_DAYS, UNUSED_MEAL_BONUS, slot_weight};
use crate::planner::filter::filter_by_preference;
use crate::planner::scoring::score_meal;
use crate::planner::selection::select_for_slot;
use crate::planner::usage::UsageTracker;

/// Assembles daily and weekly meal plans for one profile at a time.
///
/// Holds no state between calls beyond its random source, which is
/// injectable so tests can pin selections exactly.
pub struct PlanGenerator<R: Rng = StdRng> {
    rng: R,
}

impl PlanGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for PlanGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PlanGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// One-day plan dated today.
    pub fn daily_plan(&mut self, profile: &NutritionProfile, pool: &[MealCandidate]) -> DailyPlan {
        self.daily_plan_for_date(profile, pool, Local::now().date_naive())
    }

    /// One-day plan for an explicit date.
    ///
    /// Filters the pool once, then fills the four slots in fixed order
    /// against per-slot budgets. A slot whose filtered pool has no
    /// candidate falls back to a uniformly random pick from the
    /// unfiltered pool of that type; if even that is empty the slot is
    /// omitted.
    pub fn daily_plan_for_date(
        &mut self,
        profile: &NutritionProfile,
        pool: &[MealCandidate],
        date: NaiveDate,
    ) -> DailyPlan {
        let filtered = filter_by_preference(pool, &profile.dietary_preference, &profile.allergies);

        let mut meals = Vec::new();
        let mut totals = DailyTotals::default();
        for slot in MealSlot::ALL {
            let weight = slot_weight(slot);
            let calorie_budget = profile.target_calories * weight;
            let macro_budget = profile.macros.scaled(weight);

            let mut selected = select_for_slot(
                &filtered,
                slot,
                calorie_budget,
                &macro_budget,
                &profile.dietary_preference,
                &mut self.rng,
            );
            if selected.is_none() {
                // last resort: ignore preference and allergies
                let unfiltered: Vec<&MealCandidate> =
                    pool.iter().filter(|m| m.meal_type == slot).collect();
                selected = unfiltered.choose(&mut self.rng).copied();
                if let Some(meal) = selected {
                    debug!(slot = %slot, meal = %meal.name, "unfiltered fallback selection");
                }
            }

            if let Some(meal) = selected {
                let assignment = SlotAssignment::from_meal(slot, meal);
                totals.add(&assignment);
                meals.push(assignment);
            }
        }

        info!(
            date = %date,
            slots = meals.len(),
            calories = totals.calories,
            "generated daily plan"
        );
        DailyPlan {
            date,
            day_of_week: weekday_name(date),
            meals,
            daily_totals: totals.rounded(),
        }
    }

    /// Seven-day plan starting today.
    pub fn weekly_plan(&mut self, profile: &NutritionProfile, pool: &[MealCandidate]) -> WeeklyPlan {
        self.weekly_plan_from(profile, pool, Local::now().date_naive())
    }

    /// Seven-day plan from an explicit start date.
    ///
    /// A usage tracker scoped to the whole run keeps each slot type from
    /// repeating meals; when a slot type runs dry its tracker alone is
    /// reset. Days are generated in order because each day's selections
    /// feed the next day's usage state.
    pub fn weekly_plan_from(
        &mut self,
        profile: &NutritionProfile,
        pool: &[MealCandidate],
        start: NaiveDate,
    ) -> WeeklyPlan {
        let filtered = filter_by_preference(pool, &profile.dietary_preference, &profile.allergies);
        let mut tracker = UsageTracker::new();

        let mut days = Vec::with_capacity(PLAN_DAYS);
        for offset in 0..PLAN_DAYS {
            let date = start + Duration::days(offset as i64);
            let mut meals = Vec::new();
            let mut totals = DailyTotals::default();

            for slot in MealSlot::ALL {
                let weight = slot_weight(slot);
                let calorie_budget = profile.target_calories * weight;
                let macro_budget = profile.macros.scaled(weight);

                let selected = self.pick_with_variety(
                    &filtered,
                    pool,
                    slot,
                    calorie_budget,
                    &macro_budget,
                    &profile.dietary_preference,
                    &mut tracker,
                );
                if let Some(meal) = selected {
                    tracker.mark_used(slot, &meal.name);
                    let assignment = SlotAssignment::from_meal(slot, meal);
                    totals.add(&assignment);
                    meals.push(assignment);
                }
            }

            days.push(DailyPlan {
                date,
                day_of_week: weekday_name(date),
                meals,
                daily_totals: totals.rounded(),
            });
        }

        info!(start = %start, days = days.len(), "generated weekly plan");
        WeeklyPlan { days }
    }

    /// Variety-aware selection for one weekly slot.
    ///
    /// Candidate cascade: unused meals of the slot type from the filtered
    /// pool; on exhaustion, reset that slot's tracker and retry the full
    /// filtered pool; finally any meal of the type from the unfiltered
    /// pool. Unused candidates get a flat score bonus before the argmax.
    #[allow(clippy::too_many_arguments)]
    fn pick_with_variety<'a>(
        &mut self,
        filtered: &[&'a MealCandidate],
        pool: &'a [MealCandidate],
        slot: MealSlot,
        calorie_budget: f64,
        macro_budget: &MacroTargets,
        preference: &str,
        tracker: &mut UsageTracker,
    ) -> Option<&'a MealCandidate> {
        let mut candidates: Vec<&MealCandidate> = filtered
            .iter()
            .filter(|m| m.meal_type == slot && !tracker.is_used(slot, &m.name))
            .copied()
            .collect();

        if candidates.is_empty() {
            tracker.reset_slot(slot);
            candidates = filtered
                .iter()
                .filter(|m| m.meal_type == slot)
                .copied()
                .collect();
        }
        if candidates.is_empty() {
            candidates = pool.iter().filter(|m| m.meal_type == slot).collect();
        }

        let mut best: Option<(&MealCandidate, f64)> = None;
        for meal in candidates {
            let mut score = score_meal(meal, calorie_budget, macro_budget, preference, &mut self.rng);
            if !tracker.is_used(slot, &meal.name) {
                score += UNUSED_MEAL_BONUS;
            }
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((meal, score));
            }
        }
        best.map(|(meal, _)| meal)
    }
}

fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
