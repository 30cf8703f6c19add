//! One submission cycle:
//! `Idle -> Validating -> (Invalid | Processing -> Succeeded/Failed) -> Idle`.
//!
//! A second submit while one is processing is ignored, and only the
//! "new entry" fields of a form are reset after success — each form
//! declares its own differential reset.

use thiserror::Error;

use crate::calculators::CalcError;
use crate::trackers::TrackError;
use crate::validate::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Processing,
}

/// Failure taxonomy past the controller boundary: field-keyed validation,
/// a prominent computation error, or a generic storage failure.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Computation(#[from] CalcError),
    #[error("{0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for SubmitError {
    fn from(err: anyhow::Error) -> Self {
        SubmitError::Storage(err)
    }
}

impl From<TrackError> for SubmitError {
    fn from(err: TrackError) -> Self {
        match err {
            TrackError::Computation(err) => SubmitError::Computation(err),
            TrackError::Storage(err) => SubmitError::Storage(err),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome<T> {
    Succeeded(T),
    Invalid(ValidationErrors),
    Computation(CalcError),
    Failed(String),
    Ignored,
}

pub trait Form {
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Reset only the fields that represent "new entry" state, keeping the
    /// ones a user repeats across submissions.
    fn reset_after_submit(&mut self);
}

#[derive(Debug, Default)]
pub struct FormController {
    phase: SubmissionPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn submit<F, T>(
        &mut self,
        form: &mut F,
        run: impl FnOnce(&F) -> Result<T, SubmitError>,
    ) -> SubmitOutcome<T>
    where
        F: Form,
    {
        if self.phase == SubmissionPhase::Processing {
            return SubmitOutcome::Ignored;
        }

        if let Err(errors) = form.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        self.phase = SubmissionPhase::Processing;
        let outcome = match run(form) {
            Ok(value) => {
                form.reset_after_submit();
                SubmitOutcome::Succeeded(value)
            }
            Err(SubmitError::Invalid(errors)) => SubmitOutcome::Invalid(errors),
            Err(SubmitError::Computation(err)) => SubmitOutcome::Computation(err),
            Err(SubmitError::Storage(err)) => SubmitOutcome::Failed(format!("{err:#}")),
        };
        self.phase = SubmissionPhase::Idle;
        outcome
    }

    #[cfg(test)]
    fn stuck_processing() -> Self {
        Self {
            phase: SubmissionPhase::Processing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[derive(Default)]
    struct CounterForm {
        count: u32,
        label: String,
        invalid: bool,
    }

    impl Form for CounterForm {
        fn validate(&self) -> Result<(), ValidationErrors> {
            if self.invalid {
                Err(ValidationErrors::single("count", "Count must be at least 1"))
            } else {
                Ok(())
            }
        }

        fn reset_after_submit(&mut self) {
            // `label` is a repeated selection; `count` is entry state.
            self.count = 0;
        }
    }

    #[test]
    fn success_applies_differential_reset() {
        let mut controller = FormController::new();
        let mut form = CounterForm {
            count: 3,
            label: "keep me".into(),
            invalid: false,
        };

        let outcome = controller.submit(&mut form, |f| Ok(f.count * 2));
        assert!(matches!(outcome, SubmitOutcome::Succeeded(6)));
        assert_eq!(form.count, 0);
        assert_eq!(form.label, "keep me");
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn invalid_form_short_circuits_without_reset() {
        let mut controller = FormController::new();
        let mut form = CounterForm {
            count: 3,
            invalid: true,
            ..Default::default()
        };

        let outcome = controller.submit(&mut form, |_| Ok(0u32));
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.get("count"), Some("Count must be at least 1"));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(form.count, 3);
    }

    #[test]
    fn storage_failure_leaves_form_populated() {
        let mut controller = FormController::new();
        let mut form = CounterForm {
            count: 3,
            ..Default::default()
        };

        let outcome = controller.submit(&mut form, |_| {
            Err::<u32, _>(SubmitError::Storage(anyhow!("disk full")))
        });
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.count, 3);
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn second_submit_while_processing_is_ignored() {
        let mut controller = FormController::stuck_processing();
        let mut form = CounterForm::default();
        let outcome = controller.submit(&mut form, |_| Ok(0u32));
        assert!(matches!(outcome, SubmitOutcome::Ignored));
    }
}
