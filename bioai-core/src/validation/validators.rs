use std::sync::LazyLock;

use regex::Regex;

// Both cases spelled out: `(?i)` folds Unicode, so U+212A would pass as `K`.
static DNA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ATGCatgc\s]*$").expect("valid regex"));
static RNA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[AUGCaugc\s]*$").expect("valid regex"));
static PROTEIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ACDEFGHIKLMNPQRSTVWYacdefghiklmnpqrstvwy\s]*$").expect("valid regex")
});
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Only A, T, G, C (any case) and whitespace. Empty is valid.
pub fn validate_dna(sequence: &str) -> bool {
    DNA.is_match(sequence)
}

/// Only A, U, G, C (any case) and whitespace. Empty is valid.
pub fn validate_rna(sequence: &str) -> bool {
    RNA.is_match(sequence)
}

/// The 20 standard one-letter amino acid codes (any case) and whitespace.
pub fn validate_protein(sequence: &str) -> bool {
    PROTEIN.is_match(sequence)
}

/// `local@domain.tld` shape only; no RFC 5322 parsing.
pub fn validate_email(address: &str) -> bool {
    EMAIL.is_match(address)
}

/// The lowercased suffix after the last `.` (with its dot) must be in `allowed`.
/// Names without a dot never match.
pub fn validate_file_extension<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return false;
    };
    let extension = format!(".{}", extension.to_lowercase());
    allowed.iter().any(|a| a.as_ref() == extension)
}
