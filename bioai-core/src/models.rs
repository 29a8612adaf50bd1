use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated user as returned by the backend and mirrored in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Name for the navbar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            self.email.as_deref().unwrap_or_default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    #[serde(rename = "DNA")]
    Dna,
    #[serde(rename = "RNA")]
    Rna,
    #[serde(rename = "Protein")]
    Protein,
}

impl SequenceType {
    pub const ALL: [SequenceType; 3] = [SequenceType::Dna, SequenceType::Rna, SequenceType::Protein];

    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Rna => "RNA",
            SequenceType::Protein => "Protein",
        }
    }

    /// Human-readable list of the accepted symbols, used in validation messages.
    pub fn alphabet_description(&self) -> &'static str {
        match self {
            SequenceType::Dna => "A, T, G, C",
            SequenceType::Rna => "A, U, G, C",
            SequenceType::Protein => {
                "standard amino acid codes (A, C, D, E, F, G, H, I, K, L, M, N, P, Q, R, S, T, V, W, Y)"
            }
        }
    }

    /// Unit used when printing a sequence length.
    pub fn length_unit(&self) -> &'static str {
        match self {
            SequenceType::Dna | SequenceType::Rna => "bp",
            SequenceType::Protein => "aa",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open reading frame reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orf {
    pub start: u64,
    pub end: u64,
    pub sequence: String,
}

impl Orf {
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of `/analyze` and `/upload`. Rendered only, never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sequence_type: SequenceType,
    pub sequence_length: u64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub gc_content: Option<f64>,
    #[serde(default)]
    pub nucleotide_counts: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub protein_sequence: Option<String>,
    #[serde(default)]
    pub orfs: Option<Vec<Orf>>,
    // Protein-only properties
    #[serde(default, deserialize_with = "lenient_number")]
    pub molecular_weight: Option<f64>,
    #[serde(default)]
    pub amino_acid_counts: Option<BTreeMap<String, u64>>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub isoelectric_point: Option<f64>,
}

impl AnalysisResult {
    /// Counts to chart: nucleotides for DNA/RNA, amino acids for proteins.
    pub fn composition(&self) -> Option<&BTreeMap<String, u64>> {
        self.nucleotide_counts
            .as_ref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.amino_acid_counts.as_ref().filter(|c| !c.is_empty()))
    }
}

/// One entry of `/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub input_sequence: String,
    #[serde(default)]
    pub sequence_type: Option<SequenceType>,
    #[serde(default)]
    pub results: Option<AnalysisResult>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn sequence_type(&self) -> Option<SequenceType> {
        self.results
            .as_ref()
            .map(|r| r.sequence_type)
            .or(self.sequence_type)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub sequence: &'a str,
    #[serde(rename = "type")]
    pub sequence_type: SequenceType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Accepts `50.5`, `"50.50"` or `"50.50%"`. Anything else becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }))
}

/// RFC 3339, or a naive ISO-8601 date-time taken as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_serializes_without_absent_fields() {
        let user = User {
            id: 1,
            name: "A".to_string(),
            email: None,
            created_at: None,
        };
        assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":1,"name":"A"}"#);
    }

    #[test]
    fn test_analysis_result_accepts_string_numbers() {
        let json = r#"{
            "sequence_type": "DNA",
            "sequence_length": 8,
            "gc_content": "50.00%",
            "nucleotide_counts": {"A": 2, "T": 2, "G": 2, "C": 2}
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sequence_type, SequenceType::Dna);
        assert_eq!(result.gc_content, Some(50.0));
        assert_eq!(result.nucleotide_counts.as_ref().unwrap()["A"], 2);
        assert!(result.orfs.is_none());
    }

    #[test]
    fn test_analysis_result_protein_fields() {
        let json = r#"{
            "sequence_type": "Protein",
            "sequence_length": 5,
            "molecular_weight": "573.68",
            "amino_acid_counts": {"M": 1, "K": 4},
            "isoelectric_point": 10.3
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.gc_content, None);
        assert_eq!(result.molecular_weight, Some(573.68));
        assert_eq!(result.isoelectric_point, Some(10.3));
        assert_eq!(result.composition().unwrap()["K"], 4);
    }

    #[test]
    fn test_unparseable_number_is_absent() {
        let json = r#"{"sequence_type": "RNA", "sequence_length": 3, "gc_content": "n/a"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.gc_content, None);
    }

    #[test]
    fn test_history_record_naive_timestamp_is_utc() {
        let json = r#"{"id": 7, "input_sequence": "ATGC", "results": null, "created_at": "2024-01-02T12:30:00.123456"}"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.created_at.timestamp(), Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 0).unwrap().timestamp());
        assert!(record.results.is_none());
        assert_eq!(record.sequence_type(), None);
    }

    #[test]
    fn test_history_record_rfc3339_timestamp() {
        let json = r#"{"id": 1, "input_sequence": "A", "created_at": "2024-01-01T14:00:00+02:00"}"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_history_record_rejects_bad_timestamp() {
        let json = r#"{"id": 1, "input_sequence": "A", "created_at": "yesterday"}"#;
        assert!(serde_json::from_str::<HistoryRecord>(json).is_err());
    }

    #[test]
    fn test_analyze_request_uses_type_key() {
        let body = AnalyzeRequest {
            sequence: "ATGC",
            sequence_type: SequenceType::Rna,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"sequence": "ATGC", "type": "RNA"})
        );
    }

    #[test]
    fn test_orf_length() {
        let orf = Orf {
            start: 10,
            end: 112,
            sequence: String::new(),
        };
        assert_eq!(orf.len(), 102);
    }
}
