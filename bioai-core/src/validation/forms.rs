//! Field rules for the login, registration and analysis forms.
//!
//! Everything here runs before a request is built; a failing rule means the
//! form is never submitted.

use std::collections::BTreeMap;

use crate::config::ClientConfig;
use crate::error::ValidationError;
use crate::models::SequenceType;

use super::validators::{
    validate_dna, validate_email, validate_file_extension, validate_protein, validate_rna,
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;

/// Field name to message; empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Drop the error for `field`, e.g. when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn push(&mut self, error: Option<ValidationError>) {
        if let Some(e) = error {
            self.0.insert(e.field, e.message);
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn check_email(email: &str) -> Option<ValidationError> {
    if email.is_empty() {
        Some(ValidationError::new("email", "Email is required"))
    } else if !validate_email(email) {
        Some(ValidationError::new("email", "Please enter a valid email address"))
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<ValidationError> {
    if password.is_empty() {
        Some(ValidationError::new("password", "Password is required"))
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(ValidationError::new(
            "password",
            "Password must be at least 8 characters",
        ))
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.push(check_email(&self.email));
        errors.push(check_password(&self.password));
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.push(if self.name.is_empty() {
            Some(ValidationError::new("name", "Name is required"))
        } else if self.name.chars().count() < MIN_NAME_LEN {
            Some(ValidationError::new("name", "Name must be at least 2 characters"))
        } else {
            None
        });
        errors.push(check_email(&self.email));
        errors.push(check_password(&self.password));
        errors.push(if self.confirm_password.is_empty() {
            Some(ValidationError::new(
                "confirm_password",
                "Please confirm your password",
            ))
        } else if self.password != self.confirm_password {
            Some(ValidationError::new("confirm_password", "Passwords do not match"))
        } else {
            None
        });

        errors.into_result()
    }
}

/// Alphabet check for the live sequence editor. Blank input is not an error.
pub fn sequence_error(sequence: &str, sequence_type: SequenceType) -> Option<String> {
    if sequence.trim().is_empty() {
        return None;
    }
    let valid = match sequence_type {
        SequenceType::Dna => validate_dna(sequence),
        SequenceType::Rna => validate_rna(sequence),
        SequenceType::Protein => validate_protein(sequence),
    };
    (!valid).then(|| {
        format!(
            "Invalid characters detected. {} sequences can only contain {}.",
            sequence_type,
            sequence_type.alphabet_description()
        )
    })
}

/// Characters excluding whitespace, as shown under the editor.
pub fn residue_count(sequence: &str) -> usize {
    sequence.chars().filter(|c| !c.is_whitespace()).count()
}

/// Pre-flight check for a picked file: extension first, then size.
pub fn check_upload(
    filename: &str,
    size_bytes: u64,
    config: &ClientConfig,
) -> Result<(), ValidationError> {
    if !validate_file_extension(filename, &config.accepted_extensions) {
        return Err(ValidationError::new(
            "file",
            "Unsupported file format. Please upload FASTA or GenBank files",
        ));
    }
    if size_bytes > config.max_upload_bytes {
        return Err(ValidationError::new("file", "File size exceeds 10MB limit"));
    }
    Ok(())
}

/// What the analysis form will send, once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    Text,
    File,
}

/// Checks run when the user presses Analyze.
pub fn check_submission(
    method: InputMethod,
    sequence: &str,
    has_file: bool,
) -> Result<(), ValidationError> {
    match method {
        InputMethod::Text if sequence.trim().is_empty() => Err(ValidationError::new(
            "sequence",
            "Please enter a sequence to analyze",
        )),
        InputMethod::File if !has_file => Err(ValidationError::new(
            "file",
            "Please select a file to upload",
        )),
        _ => Ok(()),
    }
}
