//! U.S. Navy circumference body-fat estimate.
//!
//! Male:   495 / (1.0324 - 0.19077*log10(waist - neck) + 0.15456*log10(height)) - 450
//! Female: 495 / (1.29579 - 0.35004*log10(waist + hip - neck) + 0.22100*log10(height)) - 450
//!
//! All lengths in centimeters. Weight is recorded with a measurement but
//! does not participate in the formula.

use crate::models::Gender;
use crate::validate::{ValidationErrors, Validator};

use super::{categorize, ensure_plausible, note_usage, CalcError, CalcOutcome, CategoryTable};

pub const MALE_CATEGORIES: CategoryTable = &[
    (5.0, "Essential Fat"),
    (13.0, "Athletes"),
    (17.0, "Fitness"),
    (24.0, "Average"),
    (f64::INFINITY, "Obese"),
];

pub const FEMALE_CATEGORIES: CategoryTable = &[
    (13.0, "Essential Fat"),
    (20.0, "Athletes"),
    (24.0, "Fitness"),
    (31.0, "Average"),
    (f64::INFINITY, "Obese"),
];

/// Plausible output band; anything outside is reported, not returned.
const MIN_PLAUSIBLE_PCT: f64 = 0.0;
const MAX_PLAUSIBLE_PCT: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyFatInput {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: Option<f64>,
}

impl BodyFatInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.integer_range("age", "Age", i64::from(self.age), 15, 99);
        v.range("height", "Height", self.height_cm, 100.0, 250.0);
        v.range("weight", "Weight", self.weight_kg, 20.0, 300.0);
        v.range("neck", "Neck", self.neck_cm, 20.0, 70.0);
        v.range("waist", "Waist", self.waist_cm, 40.0, 200.0);
        if self.gender == Gender::Female {
            match self.hip_cm {
                Some(hip) => v.range("hip", "Hip", hip, 40.0, 200.0),
                None => v.add("hip", "Hip is required"),
            }
        }
        v.finish()?;

        // Cross-field rules only run once every field passed on its own.
        // The error attaches to `waist`, the field a user would adjust.
        match self.gender {
            Gender::Male if self.waist_cm <= self.neck_cm => Err(ValidationErrors::single(
                "waist",
                "Waist must be larger than neck",
            )),
            Gender::Female
                if self.waist_cm + self.hip_cm.unwrap_or(0.0) <= self.neck_cm =>
            {
                Err(ValidationErrors::single(
                    "waist",
                    "Waist plus hip must be larger than neck",
                ))
            }
            _ => Ok(()),
        }
    }

    pub fn category_table(&self) -> CategoryTable {
        category_table(self.gender)
    }
}

pub fn category_table(gender: Gender) -> CategoryTable {
    match gender {
        Gender::Male => MALE_CATEGORIES,
        Gender::Female => FEMALE_CATEGORIES,
    }
}

pub fn compute(input: &BodyFatInput) -> Result<CalcOutcome, CalcError> {
    note_usage("body_fat");

    let circumference = match input.gender {
        Gender::Male => input.waist_cm - input.neck_cm,
        Gender::Female => input.waist_cm + input.hip_cm.unwrap_or(0.0) - input.neck_cm,
    };

    // Validation already guarantees these for conforming callers, but a
    // logarithm of a non-positive number must never reach the formula.
    if circumference <= 0.0 {
        return Err(CalcError::DegenerateArithmetic(
            "circumference difference is not positive".into(),
        ));
    }
    if input.height_cm <= 0.0 {
        return Err(CalcError::DegenerateArithmetic(
            "height is not positive".into(),
        ));
    }

    let denominator = match input.gender {
        Gender::Male => {
            1.0324 - 0.19077 * circumference.log10() + 0.15456 * input.height_cm.log10()
        }
        Gender::Female => {
            1.29579 - 0.35004 * circumference.log10() + 0.22100 * input.height_cm.log10()
        }
    };

    if denominator.abs() < 1e-9 {
        return Err(CalcError::DegenerateArithmetic(
            "denominator collapsed to zero".into(),
        ));
    }

    let value = 495.0 / denominator - 450.0;
    let value = ensure_plausible(value, MIN_PLAUSIBLE_PCT, MAX_PLAUSIBLE_PCT)?;

    Ok(CalcOutcome {
        value,
        category: categorize(value, category_table(input.gender)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_input() -> BodyFatInput {
        BodyFatInput {
            gender: Gender::Male,
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            neck_cm: 38.0,
            waist_cm: 85.0,
            hip_cm: None,
        }
    }

    fn female_input() -> BodyFatInput {
        BodyFatInput {
            gender: Gender::Female,
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            neck_cm: 32.0,
            waist_cm: 70.0,
            hip_cm: Some(95.0),
        }
    }

    #[test]
    fn valid_male_input_stays_in_band() {
        let input = male_input();
        input.validate().unwrap();
        let outcome = compute(&input).unwrap();
        assert!(outcome.value >= 0.0 && outcome.value <= 70.0);
        assert!(!outcome.category.is_empty());
    }

    #[test]
    fn valid_female_input_stays_in_band() {
        let input = female_input();
        input.validate().unwrap();
        let outcome = compute(&input).unwrap();
        assert!(outcome.value >= 0.0 && outcome.value <= 70.0);
    }

    #[test]
    fn waist_not_exceeding_neck_attaches_error_to_waist() {
        let input = BodyFatInput {
            waist_cm: 40.0,
            neck_cm: 45.0,
            ..male_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("waist"), Some("Waist must be larger than neck"));
        assert!(errors.get("neck").is_none());
    }

    #[test]
    fn female_without_hip_is_invalid() {
        let input = BodyFatInput {
            hip_cm: None,
            ..female_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("hip"), Some("Hip is required"));
    }

    #[test]
    fn age_bound_message() {
        let input = BodyFatInput { age: 12, ..male_input() };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("age"), Some("Age must be at least 15"));
    }

    #[test]
    fn non_positive_circumference_is_degenerate_not_nan() {
        // Bypasses validation deliberately; the formula must still refuse.
        let input = BodyFatInput {
            waist_cm: 38.0,
            neck_cm: 38.0,
            ..male_input()
        };
        assert!(matches!(
            compute(&input),
            Err(CalcError::DegenerateArithmetic(_))
        ));
    }

    #[test]
    fn tiny_circumference_yields_implausible_result() {
        // waist 41 / neck 40 passes per-field ranges and the cross-field
        // rule, but log10(1) drives the estimate far below zero.
        let input = BodyFatInput {
            waist_cm: 41.0,
            neck_cm: 40.0,
            ..male_input()
        };
        assert!(matches!(
            compute(&input),
            Err(CalcError::ImplausibleResult { .. })
        ));
    }

    #[test]
    fn category_mapping_is_deterministic() {
        let input = male_input();
        let first = compute(&input).unwrap();
        for _ in 0..5 {
            assert_eq!(compute(&input).unwrap().category, first.category);
        }
    }

    #[test]
    fn category_tables_differ_by_gender() {
        // 15% is Fitness for a male, Athletes for a female.
        assert_eq!(categorize(15.0, MALE_CATEGORIES), "Fitness");
        assert_eq!(categorize(15.0, FEMALE_CATEGORIES), "Athletes");
    }
}
