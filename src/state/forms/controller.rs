//! Form controller: owns the session's `FormState` and routes user actions
//! through its transition functions

use super::field::{Field, Gender};
use super::form_state::{FormState, SubmitOutcome};
use super::validation::ValidationErrors;
use super::FormError;
use crate::submission::SubmissionSink;

pub struct FormController<S: SubmissionSink> {
    state: FormState,
    sink: S,
}

impl<S: SubmissionSink> FormController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: FormState::new(),
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn transition(&mut self, f: impl FnOnce(FormState) -> FormState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    /// Overwrite one field. Only an unrecognized gender value is rejected,
    /// in which case the state is left unchanged.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        self.state = self.state.clone().edit(field, value)?;
        Ok(())
    }

    /// String boundary variant of [`set_field`](Self::set_field)
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value)
    }

    pub fn choose_gender(&mut self, gender: Option<Gender>) {
        self.transition(|s| s.choose_gender(gender));
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.transition(|s| s.edit_text(field, |text| text.push(c)));
    }

    pub fn pop_char(&mut self, field: Field) {
        self.transition(|s| {
            s.edit_text(field, |text| {
                text.pop();
            })
        });
    }

    /// Run every rule, store and return the error map
    pub fn validate(&mut self) -> &ValidationErrors {
        self.transition(FormState::validated);
        &self.state.errors
    }

    /// Returns true when the form was accepted
    pub fn submit(&mut self) -> bool {
        let (next, outcome) = std::mem::take(&mut self.state).submit();
        self.state = next;

        match outcome {
            SubmitOutcome::Accepted(registration) => {
                if let Err(err) = self.sink.record(&registration) {
                    tracing::warn!("Failed to record registration {}: {err:#}", registration.id);
                }
                true
            }
            SubmitOutcome::Rejected => {
                tracing::debug!(
                    "Submission rejected with {} invalid field(s)",
                    self.state.errors.len()
                );
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = FormState::cleared();
    }

    pub fn dismiss_success(&mut self) {
        self.transition(FormState::dismissed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MockSubmissionSink;
    use pretty_assertions::assert_eq;

    fn fill_valid<S: SubmissionSink>(form: &mut FormController<S>) {
        form.set_field(Field::FirstName, "Katherine").unwrap();
        form.set_field(Field::LastName, "Johnson").unwrap();
        form.set_field(Field::Email, "kj@nasa.gov").unwrap();
        form.set_field(Field::Password, "orbit62").unwrap();
        form.set_field(Field::ConfirmPassword, "orbit62").unwrap();
        form.set_field(Field::Phone, "7575550100").unwrap();
        form.set_field(Field::Gender, "female").unwrap();
    }

    #[test]
    fn test_valid_submit_records_once_with_pre_clear_values() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .withf(|reg| reg.first_name == "Katherine" && reg.phone == "7575550100")
            .times(1)
            .returning(|_| Ok(()));

        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        assert!(form.validate().is_empty());
        assert!(form.submit());

        let state = form.state();
        assert!(state.values.is_empty());
        assert!(state.is_submitted());
        assert_eq!(state.receipt.as_ref().unwrap().first_name, "Katherine");
    }

    #[test]
    fn test_invalid_submit_never_reaches_sink() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().never();

        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        form.set_field(Field::Email, "a@b").unwrap();
        assert!(!form.submit());

        let state = form.state();
        assert_eq!(state.values.email, "a@b");
        assert_eq!(state.values.first_name, "Katherine");
        assert!(!state.is_submitted());
        assert_eq!(state.error(Field::Email).as_deref(), Some("Email is invalid"));
    }

    #[test]
    fn test_sink_failure_still_counts_as_local_success() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("disk full")));

        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        assert!(form.submit());
        assert!(form.state().is_submitted());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().returning(|_| Ok(()));
        let mut form = FormController::new(sink);

        fill_valid(&mut form);
        form.set_field(Field::Phone, "1").unwrap();
        form.validate();
        form.reset();
        assert_eq!(form.state(), &FormState::cleared());
        form.reset();
        assert_eq!(form.state(), &FormState::cleared());

        fill_valid(&mut form);
        assert!(form.submit());
        form.reset();
        assert_eq!(form.state(), &FormState::cleared());
    }

    #[test]
    fn test_set_field_by_name() {
        let mut form = FormController::new(MockSubmissionSink::new());
        form.set_field_by_name("confirmPassword", "x").unwrap();
        assert_eq!(form.state().values.confirm_password, "x");

        assert_eq!(
            form.set_field_by_name("middleName", "x"),
            Err(FormError::UnknownField("middleName".to_string()))
        );
        assert_eq!(
            form.set_field_by_name("gender", "unknown"),
            Err(FormError::UnknownGender("unknown".to_string()))
        );
        assert_eq!(form.state().values.gender, None);
    }

    #[test]
    fn test_keystroke_editing() {
        let mut form = FormController::new(MockSubmissionSink::new());
        for c in "12345".chars() {
            form.push_char(Field::Phone, c);
        }
        form.pop_char(Field::Phone);
        assert_eq!(form.state().values.phone, "1234");
        // Gender has no text buffer
        form.push_char(Field::Gender, 'm');
        assert_eq!(form.state().values.gender, None);
    }

    #[test]
    fn test_edit_after_success_returns_to_editing() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().returning(|_| Ok(()));
        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        assert!(form.submit());

        form.push_char(Field::FirstName, 'K');
        assert!(!form.state().is_submitted());
    }

    #[test]
    fn test_validate_after_success_clears_submitted() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().times(1).returning(|_| Ok(()));
        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        assert!(form.submit());
        assert!(form.state().is_submitted());

        // The cleared form fails every required rule
        assert_eq!(form.validate().len(), 7);
        assert!(!form.state().is_submitted());
        assert!(form.state().receipt.is_none());
    }

    #[test]
    fn test_dismiss_success() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().returning(|_| Ok(()));
        let mut form = FormController::new(sink);
        fill_valid(&mut form);
        form.submit();
        form.dismiss_success();
        assert!(!form.state().is_submitted());
        assert!(form.state().values.is_empty());
    }
}
