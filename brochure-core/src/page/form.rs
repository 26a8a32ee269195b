//! Contact form validation and the simulated submission flow

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::constants::form as limits;
use crate::error::{FieldError, FormError, FormResult};
use crate::schedule::ScheduledTask;
use crate::viewport::DeviceClass;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\s\-\+\(\)]{10,}$").expect("phone regex should compile")
});

/// Banner text after a successful submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We will get back to you within 24 hours.";

/// Raw values read from the form. Validation trims them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Visitor's full name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Contact number.
    pub phone: String,
    /// Optional; never validated.
    pub company: String,
    /// Free-text enquiry.
    pub message: String,
}

impl ContactSubmission {
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            company: self.company.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Something, `@`, something, a dot, something; no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// At least ten ASCII digits, spaces or `+-()` characters.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Check a submission against the rules in order and report the first
/// failure. On success the trimmed values are returned.
pub fn validate(raw: &ContactSubmission) -> FormResult<ContactSubmission> {
    let s = raw.trimmed();
    if s.name.chars().count() < limits::NAME_MIN_CHARS {
        return Err(FormError::NameTooShort);
    }
    if s.email.is_empty() {
        return Err(FormError::EmailMissing);
    }
    if !is_valid_email(&s.email) {
        return Err(FormError::EmailInvalid);
    }
    if s.phone.is_empty() {
        return Err(FormError::PhoneMissing);
    }
    if !is_valid_phone(&s.phone) {
        return Err(FormError::PhoneInvalid);
    }
    if s.message.chars().count() < limits::MESSAGE_MIN_CHARS {
        return Err(FormError::MessageTooShort);
    }
    Ok(s)
}

/// Input flavor used for blur validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The `name` text input. Other text inputs are not checked.
    Name,
    /// Any other text input; never checked.
    Text,
    /// Required, must look like an address.
    Email,
    /// Required, ten or more digits and separators.
    Tel,
    /// Any other control; only checked for presence when required.
    Other {
        /// Whether an empty value is an error.
        required: bool,
    },
}

/// Inline check run when a field loses focus.
pub fn validate_field(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    match kind {
        FieldKind::Name if value.chars().count() < limits::NAME_MIN_CHARS => {
            Err(FieldError::NameTooShort)
        }
        FieldKind::Email if value.is_empty() => Err(FieldError::EmailRequired),
        FieldKind::Email if !is_valid_email(value) => {
            Err(FieldError::EmailFormat)
        }
        FieldKind::Tel if value.is_empty() => Err(FieldError::PhoneRequired),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::PhoneFormat),
        FieldKind::Other { required: true } if value.is_empty() => {
            Err(FieldError::Required)
        }
        _ => Ok(()),
    }
}

/// Styling of the feedback banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Submission delivered.
    Success,
    /// Submission rejected.
    Error,
}

/// Banner shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Success or error styling.
    pub kind: FeedbackKind,
    /// Free-text enquiry.
    pub message: String,
    /// Mobile layouts scroll the banner into view.
    pub scroll_into_view: bool,
}

/// Result of a completed submission. The host resets its inputs on
/// `Delivered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The trimmed values that were sent.
    Delivered(ContactSubmission),
}

/// Contact form submission state: validation, the simulated send and the feedback banner.
#[derive(Debug)]
pub struct ContactForm {
    success_message: String,
    latency: Duration,
    feedback_ttl: Duration,
    in_flight: Option<ContactSubmission>,
    submit_task: ScheduledTask,
    feedback: Option<Feedback>,
    feedback_task: ScheduledTask,
    field_errors: BTreeMap<String, FieldError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_MESSAGE)
    }
}

impl ContactForm {
    /// Create an empty instance.
    pub fn new(success_message: impl Into<String>) -> Self {
        Self {
            success_message: success_message.into(),
            latency: Duration::from_millis(limits::SUBMIT_LATENCY_MS),
            feedback_ttl: Duration::from_millis(limits::FEEDBACK_VISIBLE_MS),
            in_flight: None,
            submit_task: ScheduledTask::idle(),
            feedback: None,
            feedback_task: ScheduledTask::idle(),
            field_errors: BTreeMap::new(),
        }
    }

    /// Override the send latency and how long the banner stays up.
    pub fn with_timings(mut self, latency: Duration, feedback_ttl: Duration) -> Self {
        self.latency = latency;
        self.feedback_ttl = feedback_ttl;
        self
    }

    /// Validate and start sending. A rejected submission shows its error
    /// banner and is returned as `Err`.
    pub fn submit(
        &mut self,
        raw: &ContactSubmission,
        class: DeviceClass,
        now: Instant,
    ) -> FormResult<()> {
        if self.in_flight.is_some() {
            return Err(FormError::SubmissionInFlight);
        }
        match validate(raw) {
            Ok(submission) => {
                debug!("contact form: sending");
                self.in_flight = Some(submission);
                self.submit_task.schedule_once(now, self.latency);
                Ok(())
            }
            Err(err) => {
                self.show(FeedbackKind::Error, err.to_string(), class, now);
                Err(err)
            }
        }
    }

    /// True between a valid submit and its delivery.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submit button stays disabled while sending.
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Banner currently shown, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Blur handler. Returns whether the field is valid.
    pub fn on_blur(&mut self, field: &str, kind: FieldKind, value: &str) -> bool {
        match validate_field(kind, value) {
            Ok(()) => {
                self.field_errors.remove(field);
                true
            }
            Err(err) => {
                self.field_errors.insert(field.to_owned(), err);
                false
            }
        }
    }

    /// Typing into a field clears its inline error.
    pub fn on_input(&mut self, field: &str) {
        self.field_errors.remove(field);
    }

    /// Inline error currently shown for `field`.
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors.get(field)
    }

    /// Hide an expired banner and finish a send that is due.
    pub fn tick(&mut self, now: Instant, class: DeviceClass) -> Option<FormOutcome> {
        if self.feedback_task.fire(now).is_some() {
            self.feedback = None;
        }
        self.submit_task.fire(now)?;
        let delivered = self.in_flight.take()?;
        info!(
            name = %delivered.name,
            email = %delivered.email,
            "contact form delivered"
        );
        self.field_errors.clear();
        let message = self.success_message.clone();
        self.show(FeedbackKind::Success, message, class, now);
        Some(FormOutcome::Delivered(delivered))
    }

    /// Earliest pending timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.submit_task.due(), self.feedback_task.due()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Drop any send in progress and cancel both timers.
    pub fn shutdown(&mut self) {
        self.submit_task.cancel();
        self.feedback_task.cancel();
        self.in_flight = None;
    }

    fn show(
        &mut self,
        kind: FeedbackKind,
        message: String,
        class: DeviceClass,
        now: Instant,
    ) {
        self.feedback = Some(Feedback {
            kind,
            message,
            scroll_into_view: class.is_mobile(),
        });
        self.feedback_task.schedule_once(now, self.feedback_ttl);
    }
}
