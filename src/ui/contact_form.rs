//! Contact form validation and the simulated submission round trip.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Millis;
use crate::core::dom::{CONTACT_FORM_ID, FORM_BUTTON_SELECTOR, FORM_STATUS_CLASS, FORM_STATUS_ID};
use crate::error::{MotionError, MotionResult};
use crate::render::{DomMutation, MutationBatch};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";
pub const SENDING_LABEL: &str = "Sending...";

/// Submitted form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormRejection> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(FormRejection::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(FormRejection::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormRejection {
    MissingField,
    InvalidEmail,
}

impl FormRejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => MISSING_FIELDS_MESSAGE,
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    // Some dot must have text on both sides; backtracking lets the domain
    // part itself contain dots.
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Message shown in the form status area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    pub message: String,
    pub kind: StatusKind,
}

/// Delivery of a validated message.
pub trait SubmitEndpoint {
    fn submit(&mut self, fields: &ContactFields) -> MotionResult<()>;
}

/// Stand-in endpoint: accepts everything unless told to fail.
#[derive(Debug, Clone, Default)]
pub struct SimulatedEndpoint {
    pub fail: bool,
    pub delivered: Vec<ContactFields>,
}

impl SubmitEndpoint for SimulatedEndpoint {
    fn submit(&mut self, fields: &ContactFields) -> MotionResult<()> {
        if self.fail {
            return Err(MotionError::Submission("simulated delivery failure".to_owned()));
        }
        self.delivered.push(fields.clone());
        Ok(())
    }
}

/// What happened to a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Rejected(FormRejection),
    Sending,
    /// A submission is already in flight.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
enum FormPhase {
    Idle,
    Sending {
        fields: ContactFields,
        resolve_at: Millis,
        button_text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormTiming {
    /// Simulated network latency before the endpoint answers.
    pub latency_ms: f64,
    /// How long a status message stays visible.
    pub status_visible_ms: f64,
}

impl Default for FormTiming {
    fn default() -> Self {
        Self {
            latency_ms: 1000.0,
            status_visible_ms: 5000.0,
        }
    }
}

/// Contact form state: validation, single in-flight submission, status
/// message lifetime.
pub struct ContactForm {
    timing: FormTiming,
    phase: FormPhase,
    status: Option<FormStatus>,
    status_hide_at: Option<Millis>,
    endpoint: Box<dyn SubmitEndpoint>,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("timing", &self.timing)
            .field("phase", &self.phase)
            .field("status", &self.status)
            .field("status_hide_at", &self.status_hide_at)
            .finish_non_exhaustive()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new(timing: FormTiming, endpoint: Box<dyn SubmitEndpoint>) -> Self {
        Self {
            timing,
            phase: FormPhase::Idle,
            status: None,
            status_hide_at: None,
            endpoint,
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, FormPhase::Sending { .. })
    }

    /// Message currently on screen.
    #[must_use]
    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Handles a submit event. `button_text` is the label to restore once
    /// the submission settles.
    pub fn submit(
        &mut self,
        fields: ContactFields,
        button_text: &str,
        now_ms: Millis,
    ) -> (SubmitOutcome, MutationBatch) {
        if self.is_sending() {
            debug!("submit ignored while a submission is in flight");
            return (SubmitOutcome::Ignored, MutationBatch::new());
        }
        if let Err(rejection) = fields.validate() {
            debug!(?rejection, "contact form rejected");
            let batch = self.show_status(rejection.message(), StatusKind::Error, now_ms);
            return (SubmitOutcome::Rejected(rejection), batch);
        }

        self.phase = FormPhase::Sending {
            fields,
            resolve_at: now_ms + self.timing.latency_ms,
            button_text: button_text.to_owned(),
        };
        let batch = MutationBatch::from_iter([
            DomMutation::set_text(FORM_BUTTON_SELECTOR, SENDING_LABEL),
            DomMutation::SetDisabled {
                element: FORM_BUTTON_SELECTOR.into(),
                disabled: true,
            },
        ]);
        (SubmitOutcome::Sending, batch)
    }

    /// Settles a due submission and hides an expired status message.
    pub fn tick(&mut self, now_ms: Millis) -> MutationBatch {
        let mut batch = MutationBatch::new();

        let due = matches!(
            &self.phase,
            FormPhase::Sending { resolve_at, .. } if *resolve_at <= now_ms
        );
        if due {
            if let FormPhase::Sending {
                fields,
                button_text,
                ..
            } = std::mem::replace(&mut self.phase, FormPhase::Idle)
            {
                batch.extend(self.settle(&fields, button_text, now_ms));
            }
        }

        if self.status_hide_at.is_some_and(|hide_at| hide_at <= now_ms) {
            self.status_hide_at = None;
            self.status = None;
            batch.push(DomMutation::set_style(FORM_STATUS_ID, "display", "none"));
        }
        batch
    }

    /// Earliest timestamp at which `tick` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        let resolve = match &self.phase {
            FormPhase::Sending { resolve_at, .. } => Some(*resolve_at),
            FormPhase::Idle => None,
        };
        match (resolve, self.status_hide_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn settle(
        &mut self,
        fields: &ContactFields,
        button_text: String,
        now_ms: Millis,
    ) -> MutationBatch {
        let mut batch = match self.endpoint.submit(fields) {
            Ok(()) => {
                debug!("contact form delivered");
                let mut batch = self.show_status(SUCCESS_MESSAGE, StatusKind::Success, now_ms);
                batch.push(DomMutation::ResetForm {
                    element: CONTACT_FORM_ID.into(),
                });
                batch
            }
            Err(err) => {
                warn!(error = %err, "contact form delivery failed");
                self.show_status(FAILURE_MESSAGE, StatusKind::Error, now_ms)
            }
        };
        batch.push(DomMutation::set_text(FORM_BUTTON_SELECTOR, button_text));
        batch.push(DomMutation::SetDisabled {
            element: FORM_BUTTON_SELECTOR.into(),
            disabled: false,
        });
        batch
    }

    fn show_status(&mut self, message: &str, kind: StatusKind, now_ms: Millis) -> MutationBatch {
        self.status = Some(FormStatus {
            message: message.to_owned(),
            kind,
        });
        self.status_hide_at = Some(now_ms + self.timing.status_visible_ms);
        MutationBatch::from_iter([
            DomMutation::set_text(FORM_STATUS_ID, message),
            DomMutation::SetClassName {
                element: FORM_STATUS_ID.into(),
                class_name: format!("{FORM_STATUS_CLASS} {}", kind.as_str()),
            },
            DomMutation::set_style(FORM_STATUS_ID, "display", "block"),
        ])
    }
}
