//! Body-mass index: weight (kg) over squared height (m).

use crate::validate::{ValidationErrors, Validator};

use super::{categorize, ensure_plausible, note_usage, CalcError, CalcOutcome, CategoryTable};

pub const BMI_CATEGORIES: CategoryTable = &[
    (18.5, "Underweight"),
    (25.0, "Normal"),
    (30.0, "Overweight"),
    (f64::INFINITY, "Obese"),
];

const MIN_PLAUSIBLE_BMI: f64 = 10.0;
const MAX_PLAUSIBLE_BMI: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BmiInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BmiInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.range("height", "Height", self.height_cm, 100.0, 250.0);
        v.range("weight", "Weight", self.weight_kg, 20.0, 300.0);
        v.finish()
    }
}

pub fn compute(input: &BmiInput) -> Result<CalcOutcome, CalcError> {
    note_usage("bmi");

    let height_m = input.height_cm / 100.0;
    if height_m <= 0.0 {
        return Err(CalcError::DegenerateArithmetic(
            "height is not positive".into(),
        ));
    }

    let value = input.weight_kg / (height_m * height_m);
    let value = ensure_plausible(value, MIN_PLAUSIBLE_BMI, MAX_PLAUSIBLE_BMI)?;

    Ok(CalcOutcome {
        value,
        category: categorize(value, BMI_CATEGORIES),
    })
}
