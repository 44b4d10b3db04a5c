use crate::dto::quote_dto::QuoteRequestDto;
use crate::model::quote::InsuranceType;

/// Submission status shown next to the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Success(String),
    Error(String),
}

/// One editable slot on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    InsuranceType,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub message: String,
}

impl FormFields {
    fn required_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.insurance_type.is_empty()
    }

    fn to_payload(&self) -> QuoteRequestDto {
        QuoteRequestDto {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            insurance_type: self.insurance_type.clone(),
            message: if self.message.is_empty() { None } else { Some(self.message.clone()) },
        }
    }
}

/// How one submission round trip ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered(String),
    Rejected(String),
}

/// Form state machine for the quote request form.
///
/// At most one submission is in flight: `begin_submit` moves to `Pending`
/// and `can_submit` stays false until `resolve` is called with the
/// outcome. A delivered submission clears the fields; a rejected one
/// keeps them so the visitor can correct and resubmit.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    fields: FormFields,
    status: SubmissionStatus,
}

impl QuoteForm {
    pub fn new() -> Self {
        QuoteForm {
            fields: FormFields::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Merge one field edit. No validation happens here; required-field
    /// gating is `can_submit`'s job and the server revalidates anyway.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Phone => self.fields.phone = value,
            FormField::InsuranceType => self.fields.insurance_type = value,
            FormField::Message => self.fields.message = value,
        }
    }

    /// Pick an insurance line from the fixed selector.
    pub fn select_insurance_type(&mut self, kind: InsuranceType) {
        self.update_field(FormField::InsuranceType, kind.label());
    }

    /// Whether the submit control is enabled: all required fields filled
    /// and no submission currently in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && self.fields.required_complete()
    }

    /// Move to `Pending` and hand back the payload to transmit. Returns
    /// `None` when the control is disabled, so a double click cannot put
    /// two requests in flight.
    pub fn begin_submit(&mut self) -> Option<QuoteRequestDto> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmissionStatus::Pending;
        Some(self.fields.to_payload())
    }

    /// Apply the outcome of the in-flight request and re-enable the form.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Delivered(message) => {
                self.fields = FormFields::default();
                self.status = SubmissionStatus::Success(message);
            }
            SubmissionOutcome::Rejected(message) => {
                self.status = SubmissionStatus::Error(message);
            }
        }
    }
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> QuoteForm {
        let mut form = QuoteForm::new();
        form.update_field(FormField::Name, "Ann");
        form.update_field(FormField::Email, "ann@example.com");
        form.update_field(FormField::Phone, "555-1234");
        form.select_insurance_type(InsuranceType::Auto);
        form
    }

    #[test]
    fn test_new_form_is_idle_and_not_submittable() {
        let form = QuoteForm::new();
        assert_eq!(*form.status(), SubmissionStatus::Idle);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_requires_all_required_fields() {
        let mut form = filled_form();
        assert!(form.can_submit());
        form.update_field(FormField::Phone, "");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_message_is_optional() {
        let mut form = filled_form();
        assert!(form.can_submit());
        let payload = form.begin_submit().unwrap();
        assert!(payload.message.is_none());

        let mut form = filled_form();
        form.update_field(FormField::Message, "Two cars");
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.message.as_deref(), Some("Two cars"));
    }

    #[test]
    fn test_begin_submit_moves_to_pending_and_blocks_resubmission() {
        let mut form = filled_form();
        let payload = form.begin_submit().expect("first submit");
        assert_eq!(payload.insurance_type, "Auto Insurance");
        assert!(form.is_pending());
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_delivered_outcome_resets_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.resolve(SubmissionOutcome::Delivered("Thanks!".to_string()));
        assert_eq!(*form.status(), SubmissionStatus::Success("Thanks!".to_string()));
        assert_eq!(*form.fields(), FormFields::default());
        assert!(!form.is_pending());
    }

    #[test]
    fn test_rejected_outcome_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.resolve(SubmissionOutcome::Rejected("Failed to send email".to_string()));
        assert_eq!(*form.status(), SubmissionStatus::Error("Failed to send email".to_string()));
        assert_eq!(form.fields().name, "Ann");
        // The control is enabled again for a manual retry.
        assert!(form.can_submit());
    }
}
