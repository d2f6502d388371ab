/// Harris-Benedict (revised) coefficients:
/// `base + weight·kg + height·cm − age·years`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarrisBenedict {
    pub base: f64,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
}

pub const HARRIS_BENEDICT_MALE: HarrisBenedict = HarrisBenedict {
    base: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

pub const HARRIS_BENEDICT_FEMALE: HarrisBenedict = HarrisBenedict {
    base: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (inclusive lower, exclusive upper)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Sensible range for a target BMI.
pub const TARGET_BMI_MIN: f64 = 10.0;
pub const TARGET_BMI_MAX: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy balance
// ─────────────────────────────────────────────────────────────────────────────

/// Approximate energy stored in 1 kg of body mass.
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Daily kcal per kg/week of weight change (1100).
pub const KCAL_PER_DAY_PER_WEEKLY_KG: f64 = KCAL_PER_KG_BODY_MASS / DAYS_PER_WEEK;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Form defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_AGE_YEARS: f64 = 25.0;
pub const DEFAULT_TARGET_BMI: f64 = 22.0;
pub const DEFAULT_WEEKLY_RATE_KG: f64 = 0.5;
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Recommended weekly rate range (kg/week).
pub const MIN_WEEKLY_RATE_KG: f64 = 0.1;
pub const MAX_WEEKLY_RATE_KG: f64 = 1.0;

/// Longest timeline generated (ten years).
pub const MAX_TIMELINE_WEEKS: u32 = 520;
