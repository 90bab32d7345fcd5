use serde::{Deserialize, Serialize};

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub letter: String,
    pub text: String,
    pub is_correct: bool,
}

/// A single exam question, one JSON file per record on disk.
///
/// Deserialization doubles as record validation: a file whose JSON is missing
/// a field or carries a wrong type is rejected as a whole and never surfaces
/// as a partial object. Unknown extra fields are tolerated. Semantic checks
/// (letter uniqueness, exactly one correct alternative) are intentionally not
/// performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub index: i64,
    pub year: i64,
    pub discipline: String,
    pub correct_alternative: String,
    pub alternatives: Vec<Alternative>,
}

impl Question {
    /// Parses a raw JSON document into a validated question record.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
