use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::metrics::constants::{
    DEFAULT_AGE_YEARS, DEFAULT_TARGET_BMI, DEFAULT_WEEKLY_RATE_KG, MAX_WEEKLY_RATE_KG,
    MIN_WEEKLY_RATE_KG,
};
use crate::models::{
    ActivityLevel, AnthropometricProfile, CalculatorInput, DietaryPreference, Goal, GoalTarget,
    Sex, is_provided,
};

/// Parse a numeric answer; anything that is not a finite number becomes `fallback`.
pub fn parse_or(input: &str, fallback: f64) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Whether a weekly rate lies in the recommended 0.1-1.0 kg range.
pub fn is_recommended_rate(rate_kg_per_week: f64) -> bool {
    (MIN_WEEKLY_RATE_KG..=MAX_WEEKLY_RATE_KG).contains(&rate_kg_per_week.abs())
}

/// Prompt for a number. A usable `fallback` is offered as the default.
pub fn prompt_number(prompt: &str, fallback: f64) -> Result<f64> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if is_provided(fallback) {
        input = input.default(fallback.to_string());
    }
    let answer = input.interact_text()?;
    Ok(parse_or(&answer, fallback))
}

pub fn prompt_sex() -> Result<Sex> {
    let options: Vec<&str> = Sex::ALL.iter().map(|s| s.label()).collect();
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(Sex::ALL[selection])
}

/// Prompt for an activity level and return its multiplier.
pub fn prompt_activity() -> Result<f64> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} (x{})", level.description(), level.multiplier()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(ActivityLevel::ALL[selection].multiplier())
}

pub fn prompt_goal_target() -> Result<GoalTarget> {
    let selection = Select::new()
        .with_prompt("Goal type")
        .items(&["Target weight (kg)", "Target BMI"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => GoalTarget::Weight(prompt_number("Target weight (kg)", 0.0)?),
        _ => GoalTarget::Bmi(prompt_number("Target BMI", DEFAULT_TARGET_BMI)?),
    })
}

/// Prompt for the weekly rate magnitude.
pub fn prompt_rate() -> Result<f64> {
    let rate = prompt_number(
        "Weight change rate (kg/week, 0.5-1 recommended)",
        DEFAULT_WEEKLY_RATE_KG,
    )?;
    Ok(rate.abs())
}

pub fn prompt_preference() -> Result<DietaryPreference> {
    let options: Vec<&str> = DietaryPreference::ALL.iter().map(|p| p.label()).collect();
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(DietaryPreference::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Partially filled calculator form. `None` fields have not been supplied yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub activity_multiplier: Option<f64>,
    pub target: Option<GoalTarget>,
    pub rate_kg_per_week: Option<f64>,
    pub preference: Option<DietaryPreference>,
}

impl FormDraft {
    pub fn from_input(input: &CalculatorInput) -> Self {
        Self {
            weight_kg: Some(input.profile.weight_kg),
            height_cm: Some(input.profile.height_cm),
            age_years: Some(input.profile.age_years),
            sex: Some(input.profile.sex),
            activity_multiplier: Some(input.profile.activity_multiplier),
            target: Some(input.goal.target),
            rate_kg_per_week: Some(input.goal.rate_kg_per_week),
            preference: Some(input.preference),
        }
    }

    /// Fields set in `other` replace ours.
    pub fn overlay(self, other: FormDraft) -> Self {
        Self {
            weight_kg: other.weight_kg.or(self.weight_kg),
            height_cm: other.height_cm.or(self.height_cm),
            age_years: other.age_years.or(self.age_years),
            sex: other.sex.or(self.sex),
            activity_multiplier: other.activity_multiplier.or(self.activity_multiplier),
            target: other.target.or(self.target),
            rate_kg_per_week: other.rate_kg_per_week.or(self.rate_kg_per_week),
            preference: other.preference.or(self.preference),
        }
    }

    /// Fill gaps with the form defaults.
    pub fn complete_with_defaults(&self) -> CalculatorInput {
        let profile = AnthropometricProfile::default();
        let goal = Goal::default();

        CalculatorInput {
            profile: AnthropometricProfile {
                weight_kg: self.weight_kg.unwrap_or(profile.weight_kg),
                height_cm: self.height_cm.unwrap_or(profile.height_cm),
                age_years: self.age_years.unwrap_or(profile.age_years),
                sex: self.sex.unwrap_or(profile.sex),
                activity_multiplier: self
                    .activity_multiplier
                    .unwrap_or(profile.activity_multiplier),
            },
            goal: Goal {
                target: self.target.unwrap_or(goal.target),
                rate_kg_per_week: self.rate_kg_per_week.unwrap_or(goal.rate_kg_per_week),
            },
            preference: self.preference.unwrap_or_default(),
        }
    }
}

/// Prompt for every field the draft is missing.
pub fn complete_form(draft: FormDraft) -> Result<CalculatorInput> {
    let mut draft = draft;

    if draft.weight_kg.is_none() {
        draft.weight_kg = Some(prompt_number("Weight (kg)", 0.0)?);
    }
    if draft.height_cm.is_none() {
        draft.height_cm = Some(prompt_number("Height (cm)", 0.0)?);
    }
    if draft.age_years.is_none() {
        draft.age_years = Some(prompt_number("Age", DEFAULT_AGE_YEARS)?);
    }
    if draft.sex.is_none() {
        draft.sex = Some(prompt_sex()?);
    }
    if draft.activity_multiplier.is_none() {
        draft.activity_multiplier = Some(prompt_activity()?);
    }
    if draft.target.is_none() {
        draft.target = Some(prompt_goal_target()?);
    }
    if draft.rate_kg_per_week.is_none() {
        draft.rate_kg_per_week = Some(prompt_rate()?);
    }
    if draft.preference.is_none() {
        draft.preference = Some(prompt_preference()?);
    }

    Ok(draft.complete_with_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("70.5", 0.0), 70.5);
        assert_eq!(parse_or(" 170 ", 0.0), 170.0);
        assert_eq!(parse_or("abc", 0.0), 0.0);
        assert_eq!(parse_or("", DEFAULT_AGE_YEARS), 25.0);
        assert_eq!(parse_or("NaN", DEFAULT_TARGET_BMI), 22.0);
    }

    #[test]
    fn test_recommended_rate() {
        assert!(is_recommended_rate(0.1));
        assert!(is_recommended_rate(1.0));
        assert!(is_recommended_rate(-0.5));
        assert!(!is_recommended_rate(1.5));
        assert!(!is_recommended_rate(0.05));
    }

    #[test]
    fn test_overlay_prefers_newer_fields() {
        let file = FormDraft {
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            ..Default::default()
        };
        let flags = FormDraft {
            weight_kg: Some(78.0),
            sex: Some(Sex::Female),
            ..Default::default()
        };

        let merged = file.overlay(flags);
        assert_eq!(merged.weight_kg, Some(78.0));
        assert_eq!(merged.height_cm, Some(180.0));
        assert_eq!(merged.sex, Some(Sex::Female));
        assert_eq!(merged.age_years, None);
    }

    #[test]
    fn test_complete_with_defaults() {
        let draft = FormDraft {
            weight_kg: Some(70.0),
            height_cm: Some(170.0),
            ..Default::default()
        };
        let input = draft.complete_with_defaults();

        assert_eq!(input.profile.age_years, 25.0);
        assert_eq!(input.profile.sex, Sex::Male);
        assert_eq!(input.profile.activity_multiplier, 1.2);
        assert_eq!(input.goal.target, GoalTarget::Bmi(22.0));
        assert_eq!(input.goal.rate_kg_per_week, 0.5);
        assert_eq!(input.preference, DietaryPreference::Omnivore);
    }

    #[test]
    fn test_draft_round_trips_input() {
        let input = CalculatorInput::default();
        assert_eq!(FormDraft::from_input(&input).complete_with_defaults(), input);
    }
}
