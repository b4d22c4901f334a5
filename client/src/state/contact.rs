//! Contact form fields and the Editing/Submitted lifecycle.
//!
//! DESIGN
//! ======
//! Submission is a local state transition. A successful `submit` freezes the
//! fields and hands back a `Submission` whose payload the caller forwards to
//! the intake endpoint; the UI never waits on that request. The component
//! then schedules `complete_reset` after [`RESET_DELAY`]. Each submission
//! carries a generation number so a timer left over from an earlier
//! submission cannot reset a newer one.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the confirmation stays on screen before the form clears.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Fields of the quote request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Address,
    Message,
}

impl FormField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Address, Self::Message];

    /// Form control `name` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }

    /// Validation message shown under a required field left blank.
    #[must_use]
    pub fn missing_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name.",
            Self::Email => "Please enter your email.",
            Self::Phone => "Please enter your phone number.",
            Self::Address => "Please enter your address.",
            Self::Message => "Please enter a message.",
        }
    }
}

/// The validated field set sent to the intake endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub message: String,
}

impl ContactPayload {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
            FormField::Message => &mut self.message,
        }
    }

    /// Required fields that are empty after trimming, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Lifecycle phase of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Identifies one accepted submission for its pending reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// An accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: SubmitTicket,
    pub payload: ContactPayload,
}

/// Why `submit` did not transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    MissingRequired(Vec<FormField>),
    AlreadySubmitted,
}

/// Contact form state machine.
#[derive(Clone, Debug, Default)]
pub struct FormSession {
    fields: ContactPayload,
    phase: FormPhase,
    missing: Vec<FormField>,
    generation: u64,
}

impl FormSession {
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    #[must_use]
    pub fn fields(&self) -> &ContactPayload {
        &self.fields
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    /// Update a field while editing. Returns `false` when the form is frozen.
    ///
    /// Editing a field clears its validation message.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        *self.fields.get_mut(field) = value.into();
        self.missing.retain(|f| *f != field);
        true
    }

    /// Validation message for `field` from the last rejected submit.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.missing
            .contains(&field)
            .then(|| field.missing_message())
    }

    #[must_use]
    pub fn missing_fields(&self) -> &[FormField] {
        &self.missing
    }

    /// Validate and freeze the form.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::MissingRequired` (and stays `Editing`) when name
    /// or email is blank, or `SubmitError::AlreadySubmitted` while the
    /// confirmation is showing.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.phase == FormPhase::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            self.missing.clone_from(&missing);
            return Err(SubmitError::MissingRequired(missing));
        }
        self.missing.clear();
        self.generation += 1;
        self.phase = FormPhase::Submitted;
        Ok(Submission { ticket: SubmitTicket { generation: self.generation }, payload: self.fields.trimmed() })
    }

    /// Return to `Editing` with every field cleared, if `ticket` belongs to
    /// the current submission. Returns whether the reset happened.
    pub fn complete_reset(&mut self, ticket: SubmitTicket) -> bool {
        if self.phase != FormPhase::Submitted || ticket.generation != self.generation {
            return false;
        }
        self.fields = ContactPayload::default();
        self.missing.clear();
        self.phase = FormPhase::Editing;
        true
    }
}
