use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::interface::FormDraft;
use crate::models::{ActivityLevel, DietaryPreference, GoalDirection, GoalTarget, Sex};

/// Report file offered when the user chooses to save interactively.
pub const DEFAULT_REPORT_PATH: &str = "fit_future_report.json";

/// Fit Future: BMI, energy expenditure, goal timeline and nutrition planning.
#[derive(Parser, Debug)]
#[command(name = "fit_future")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate metrics, a weight timeline and a nutrition plan.
    Calculate(CalculateArgs),

    /// Recommend meals and exercise for a goal direction.
    Plan {
        /// lose, gain or maintain.
        #[arg(long)]
        direction: GoalDirection,

        /// omnivore, vegetarian, vegan or pescatarian.
        #[arg(long, default_value = "omnivore")]
        preference: DietaryPreference,

        /// Daily calorie target used for macro grams.
        #[arg(long, default_value_t = 2000.0)]
        calories: f64,

        /// Total daily energy expenditure; defaults to the calorie target.
        #[arg(long)]
        tdee: Option<f64>,
    },

    /// List the food catalog.
    Catalog {
        /// Only show foods suitable for this preference.
        #[arg(long)]
        preference: Option<DietaryPreference>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate(CalculateArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct CalculateArgs {
    /// JSON file with profile, goal and preference. Flags override its values.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<f64>,

    /// male or female.
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Activity level name or multiplier (1.2, 1.375, 1.55, 1.725, 1.9).
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Target weight in kg.
    #[arg(long, conflicts_with = "target_bmi")]
    pub target_weight: Option<f64>,

    /// Target BMI.
    #[arg(long)]
    pub target_bmi: Option<f64>,

    /// Weekly weight change in kg (magnitude).
    #[arg(long)]
    pub rate: Option<f64>,

    /// omnivore, vegetarian, vegan or pescatarian.
    #[arg(long)]
    pub preference: Option<DietaryPreference>,

    /// Never prompt; missing fields take the form defaults.
    #[arg(long)]
    pub no_prompt: bool,

    /// Write the full report as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the weight timeline as CSV.
    #[arg(long)]
    pub timeline_csv: Option<PathBuf>,
}

impl CalculateArgs {
    /// Fields given on the command line.
    pub fn to_draft(&self) -> FormDraft {
        let target = self
            .target_weight
            .map(GoalTarget::Weight)
            .or(self.target_bmi.map(GoalTarget::Bmi));

        FormDraft {
            weight_kg: self.weight,
            height_cm: self.height,
            age_years: self.age,
            sex: self.sex,
            activity_multiplier: self.activity.map(|level| level.multiplier()),
            target,
            rate_kg_per_week: self.rate.map(f64::abs),
            preference: self.preference,
        }
    }

    /// Whether any export was requested on the command line.
    pub fn has_exports(&self) -> bool {
        self.json.is_some() || self.timeline_csv.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_calculate() {
        let cli = Cli::try_parse_from(["fit_future"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Calculate(_)));
    }

    #[test]
    fn test_calculate_flags_to_draft() {
        let cli = Cli::try_parse_from([
            "fit_future",
            "calculate",
            "--weight",
            "70",
            "--height",
            "170",
            "--sex",
            "female",
            "--activity",
            "moderate",
            "--target-weight",
            "65",
            "--rate",
            "0.5",
            "--preference",
            "vegan",
        ])
        .unwrap();

        let Some(Command::Calculate(args)) = cli.command else {
            panic!("expected calculate");
        };
        let draft = args.to_draft();

        assert_eq!(draft.weight_kg, Some(70.0));
        assert_eq!(draft.sex, Some(Sex::Female));
        assert_eq!(draft.activity_multiplier, Some(1.55));
        assert_eq!(draft.target, Some(GoalTarget::Weight(65.0)));
        assert_eq!(draft.rate_kg_per_week, Some(0.5));
        assert_eq!(draft.preference, Some(DietaryPreference::Vegan));
        assert_eq!(draft.age_years, None);
    }

    #[test]
    fn test_target_flags_conflict() {
        let result = Cli::try_parse_from([
            "fit_future",
            "calculate",
            "--target-weight",
            "65",
            "--target-bmi",
            "22",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_preference_is_rejected() {
        let result = Cli::try_parse_from(["fit_future", "catalog", "--preference", "vegn"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_defaults() {
        let cli = Cli::try_parse_from(["fit_future", "plan", "--direction", "gain"]).unwrap();
        match cli.command {
            Some(Command::Plan {
                direction,
                preference,
                calories,
                tdee,
            }) => {
                assert_eq!(direction, GoalDirection::Gain);
                assert_eq!(preference, DietaryPreference::Omnivore);
                assert_eq!(calories, 2000.0);
                assert_eq!(tdee, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
