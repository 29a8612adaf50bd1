mod forms;
mod validators;

pub use forms::{
    check_submission, check_upload, residue_count, sequence_error, FieldErrors, InputMethod,
    LoginForm, RegisterForm, MIN_NAME_LEN, MIN_PASSWORD_LEN,
};
pub use validators::{
    validate_dna, validate_email, validate_file_extension, validate_protein, validate_rna,
};
