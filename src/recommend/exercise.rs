use crate::models::GoalDirection;

const LOSE_EXERCISES: &[&str] = &[
    "Cardio: 30-45 minutes, 3-5 times a week (jogging, cycling, swimming)",
    "HIIT: 20-30 minutes, 2-3 times a week",
    "Strength training: 2-3 times a week, focus on full-body workouts",
    "Walk at least 7,000-10,000 steps every day",
];

const GAIN_EXERCISES: &[&str] = &[
    "Strength training: 3-5 times a week, focus on progressive overload",
    "Light cardio: 20-30 minutes, 2-3 times a week for heart health",
    "Focus on compound lifts (squat, deadlift, bench press)",
    "Prioritise rest and recovery between sessions",
];

const MAINTAIN_EXERCISES: &[&str] = &[
    "Mix cardio and strength training, 3-4 times a week",
    "Enjoyable activities such as team sports, cycling or hiking",
    "Yoga or pilates for flexibility and core strength",
    "Walk at least 7,000 steps daily",
];

/// Fixed exercise advice for a direction.
pub fn select_exercises(direction: GoalDirection) -> &'static [&'static str] {
    match direction {
        GoalDirection::Lose => LOSE_EXERCISES,
        GoalDirection::Gain => GAIN_EXERCISES,
        GoalDirection::Maintain => MAINTAIN_EXERCISES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_direction_has_distinct_advice() {
        let lose = select_exercises(GoalDirection::Lose);
        let gain = select_exercises(GoalDirection::Gain);
        let maintain = select_exercises(GoalDirection::Maintain);

        assert_eq!(lose.len(), 4);
        assert_ne!(lose, gain);
        assert_ne!(gain, maintain);
        assert!(gain[0].starts_with("Strength training"));
    }
}
