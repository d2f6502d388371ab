use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{CalculatorInput, TimelinePoint};
use crate::report::Report;

/// Load calculator inputs from a JSON file.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<CalculatorInput> {
    let content = fs::read_to_string(path)?;
    let input: CalculatorInput = serde_json::from_str(&content)?;
    Ok(input)
}

/// Save a report as pretty-printed JSON.
pub fn save_report<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the timeline as `week,weight_kg` rows, weights to one decimal.
pub fn write_timeline_csv<P: AsRef<Path>>(path: P, points: &[TimelinePoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["week", "weight_kg"])?;
    for point in points {
        wtr.write_record([point.week.to_string(), format!("{:.1}", point.weight_kg)])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryPreference, GoalTarget, Sex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_input() {
        let json = r#"{
            "profile": {"weight_kg": 70, "height_cm": 170, "age_years": 25, "sex": "male", "activity_multiplier": 1.2},
            "goal": {"target": {"type": "weight", "value": 65}, "rate_kg_per_week": 0.5},
            "preference": "vegan"
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.profile.sex, Sex::Male);
        assert_eq!(input.goal.target, GoalTarget::Weight(65.0));
        assert_eq!(input.preference, DietaryPreference::Vegan);
    }

    #[test]
    fn test_load_input_defaults_preference() {
        let json = r#"{
            "profile": {"weight_kg": 60, "height_cm": 160, "age_years": 40, "sex": "female", "activity_multiplier": 1.55},
            "goal": {"target": {"type": "bmi", "value": 21.5}, "rate_kg_per_week": 0.25}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.preference, DietaryPreference::Omnivore);
        assert_eq!(input.goal.target, GoalTarget::Bmi(21.5));
    }

    #[test]
    fn test_load_input_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"profile\": 1}").unwrap();

        assert!(matches!(
            load_input(file.path()),
            Err(crate::error::FitError::Json(_))
        ));
    }

    #[test]
    fn test_save_report() {
        let input = CalculatorInput {
            profile: crate::models::AnthropometricProfile::new(
                70.0,
                170.0,
                25.0,
                Sex::Male,
                crate::models::ActivityLevel::Sedentary,
            ),
            goal: crate::models::Goal::target_weight(65.0, 0.5),
            preference: DietaryPreference::Vegan,
        };
        let report = Report::build(input);

        let file = NamedTempFile::new().unwrap();
        save_report(file.path(), &report).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(saved["metrics"]["direction"], "lose");
        assert_eq!(saved["metrics"]["calorie_adjustment"], -550.0);
        assert_eq!(saved["nutrition"]["split"]["protein_pct"], 35);
        assert_eq!(saved["nutrition"]["meals"]["breakfast"][0]["name"], "Tahu");
        assert_eq!(saved["input"]["preference"], "vegan");
    }

    #[test]
    fn test_write_timeline_csv() {
        let points = vec![
            TimelinePoint::new(0, 70.0),
            TimelinePoint::new(1, 69.5),
            TimelinePoint::new(2, 69.04),
        ];

        let file = NamedTempFile::new().unwrap();
        write_timeline_csv(file.path(), &points).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "week,weight_kg\n0,70.0\n1,69.5\n2,69.0\n");
    }
}
