//! Contact form errors

use thiserror::Error;

/// First failing rule of a contact form submission. Display text is shown to
/// the visitor verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Name shorter than two characters.
    #[error("Please enter a valid full name (minimum 2 characters).")]
    NameTooShort,

    /// Email left blank.
    #[error("Please enter your email address.")]
    EmailMissing,

    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    EmailInvalid,

    /// Phone left blank.
    #[error("Please enter your phone number.")]
    PhoneMissing,

    /// Fewer than ten digits, spaces or `+-()` characters.
    #[error("Please enter a valid phone number (minimum 10 digits).")]
    PhoneInvalid,

    /// Message shorter than ten characters.
    #[error("Please enter a message (minimum 10 characters).")]
    MessageTooShort,

    /// The previous submission has not finished sending.
    #[error("A submission is already in progress.")]
    SubmissionInFlight,
}

/// Inline error attached to a single field when it loses focus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name shorter than two characters.
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    /// Email left blank.
    #[error("Email is required")]
    EmailRequired,

    /// Email does not look like an address.
    #[error("Invalid email format")]
    EmailFormat,

    /// Phone left blank.
    #[error("Phone number is required")]
    PhoneRequired,

    /// Phone has fewer than ten valid characters.
    #[error("Invalid phone number (min 10 digits)")]
    PhoneFormat,

    /// A required field other than name, email or phone is empty.
    #[error("This field is required")]
    Required,
}

/// Result of a contact form operation.
pub type FormResult<T> = std::result::Result<T, FormError>;
