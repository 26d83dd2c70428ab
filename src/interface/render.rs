use crate::models::{DailyPlan, NutritionProfile, WeeklyPlan};
use crate::planner::targets::{bmr, tdee};

/// Display derived nutrition targets.
pub fn display_targets(profile: &NutritionProfile) {
    let bmr_val = bmr(
        profile.age,
        profile.height_cm,
        profile.weight_kg,
        &profile.gender,
    );
    let tdee_val = tdee(bmr_val, &profile.activity_level);

    println!();
    println!("=== Nutrition Targets ===");
    println!();
    println!("BMI:             {:.1}", profile.bmi);
    println!("BMR:             {:.0} kcal", bmr_val);
    println!("TDEE:            {:.0} kcal", tdee_val);
    println!(
        "Target calories: {:.0} kcal ({})",
        profile.target_calories, profile.health_goal
    );
    println!(
        "Macros:          P:{:.0}g C:{:.0}g F:{:.0}g ({})",
        profile.macros.protein_g,
        profile.macros.carbs_g,
        profile.macros.fat_g,
        if profile.dietary_preference.is_empty() {
            "balanced"
        } else {
            &profile.dietary_preference
        }
    );
    println!();
}

/// Display a single day's plan in a formatted table.
pub fn display_daily_plan(plan: &DailyPlan) {
    println!();
    println!("=== Meal Plan for {} ({}) ===", plan.date, plan.day_of_week);
    println!();

    if plan.meals.is_empty() {
        println!("No meals could be assigned (empty meal pool).");
        println!();
        return;
    }

    let max_name_len = plan.meals.iter().map(|a| a.name.len()).max().unwrap_or(10);

    for assignment in &plan.meals {
        println!(
            "{:<9} {:<width$} - {:>4.0} cal | P:{:>3.0}g C:{:>3.0}g F:{:>3.0}g",
            assignment.slot.to_string(),
            assignment.name,
            assignment.calories,
            assignment.protein,
            assignment.carbs,
            assignment.fat,
            width = max_name_len
        );
    }

    println!();
    println!("--- Daily Totals ---");
    println!(
        "{:.1} cal | P:{:.1}g C:{:.1}g F:{:.1}g",
        plan.daily_totals.calories,
        plan.daily_totals.protein,
        plan.daily_totals.carbs,
        plan.daily_totals.fat
    );
    println!();
}

/// Display a seven-day plan, one compact block per day.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    println!();
    println!("=== Weekly Meal Plan ({} days) ===", plan.days.len());

    for day in &plan.days {
        println!();
        println!("{} ({})", day.date, day.day_of_week);
        for assignment in &day.meals {
            println!(
                "  {:<9} {} ({:.0} cal)",
                assignment.slot.to_string(),
                assignment.name,
                assignment.calories
            );
        }
        println!(
            "  totals: {:.1} cal | P:{:.1}g C:{:.1}g F:{:.1}g",
            day.daily_totals.calories,
            day.daily_totals.protein,
            day.daily_totals.carbs,
            day.daily_totals.fat
        );
    }

    if !plan.days.is_empty() {
        let avg: f64 = plan
            .days
            .iter()
            .map(|d| d.daily_totals.calories)
            .sum::<f64>()
            / plan.days.len() as f64;
        println!();
        println!("--- Summary ---");
        println!("Average daily calories: {:.0}", avg);
    }
    println!();
}
