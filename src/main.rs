use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fit_future_calc::cli::{CalculateArgs, Cli, Command, DEFAULT_REPORT_PATH};
use fit_future_calc::error::{FitError, Result};
use fit_future_calc::interface::{
    FormDraft, complete_form, display_catalog, display_metrics, display_nutrition_plan,
    display_timeline, is_recommended_rate, prompt_yes_no,
};
use fit_future_calc::metrics::{
    MAX_WEEKLY_RATE_KG, MIN_WEEKLY_RATE_KG, TARGET_BMI_MAX, TARGET_BMI_MIN, require_measurements,
};
use fit_future_calc::models::{
    DietaryPreference, FoodItem, GoalDirection, GoalTarget, is_provided,
};
use fit_future_calc::recommend::{FOOD_CATALOG, foods_for, plan_for};
use fit_future_calc::report::{Report, load_input, save_report, write_timeline_csv};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Calculate(args) => cmd_calculate(&args),
        Command::Plan {
            direction,
            preference,
            calories,
            tdee,
        } => cmd_plan(direction, preference, calories, tdee),
        Command::Catalog { preference } => cmd_catalog(preference),
    }
}

/// Collect inputs, run the full calculation and display the results.
fn cmd_calculate(args: &CalculateArgs) -> Result<()> {
    let base = match &args.input {
        Some(path) => FormDraft::from_input(&load_input(path)?),
        None => FormDraft::default(),
    };
    let draft = base.overlay(args.to_draft());

    let input = if args.no_prompt {
        draft.complete_with_defaults()
    } else {
        complete_form(draft)?
    };

    require_measurements(&input.profile)?;

    if !is_recommended_rate(input.goal.rate_kg_per_week) {
        warn!(
            rate = input.goal.rate_kg_per_week,
            "weekly rate is outside the recommended {}-{} kg range",
            MIN_WEEKLY_RATE_KG,
            MAX_WEEKLY_RATE_KG
        );
    }

    if let GoalTarget::Bmi(bmi) = input.goal.target {
        if !(TARGET_BMI_MIN..=TARGET_BMI_MAX).contains(&bmi) {
            warn!(
                bmi,
                "target BMI is outside the usual {}-{} range", TARGET_BMI_MIN, TARGET_BMI_MAX
            );
        }
    }

    let report = Report::build(input);
    let metrics = &report.metrics;

    display_metrics(metrics);

    if metrics.has_target() && metrics.weeks_prediction > 0 {
        display_timeline(&report.timeline, metrics);
        println!(
            "Target reachable in {} weeks with an intake of {:.0} kcal per day.",
            metrics.weeks_prediction, metrics.daily_calories
        );
        println!();
    }

    display_nutrition_plan(&report.nutrition);

    if let Some(path) = &args.json {
        save_report(path, &report)?;
        println!("Report saved to {}", path.display());
    }

    if let Some(path) = &args.timeline_csv {
        write_timeline_csv(path, &report.timeline)?;
        println!("Timeline saved to {}", path.display());
    }

    if !args.no_prompt && !args.has_exports() {
        let save = prompt_yes_no(&format!("Save report to {}?", DEFAULT_REPORT_PATH), false)?;
        if save {
            save_report(DEFAULT_REPORT_PATH, &report)?;
            println!("Report saved to {}", DEFAULT_REPORT_PATH);
        }
    }

    Ok(())
}

/// Recommendations only, for a known direction and calorie target.
fn cmd_plan(
    direction: GoalDirection,
    preference: DietaryPreference,
    calories: f64,
    tdee: Option<f64>,
) -> Result<()> {
    if !is_provided(calories) {
        return Err(FitError::InvalidInput(format!(
            "calorie target must be positive, got {}",
            calories
        )));
    }

    let plan = plan_for(direction, preference, tdee.unwrap_or(calories), calories);
    display_nutrition_plan(&plan);
    Ok(())
}

fn cmd_catalog(preference: Option<DietaryPreference>) -> Result<()> {
    let foods: Vec<&FoodItem> = match preference {
        Some(p) => foods_for(p).collect(),
        None => FOOD_CATALOG.iter().collect(),
    };

    display_catalog(&foods, preference);
    Ok(())
}
