pub mod demo;
pub mod store;

pub use store::ContextStore;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// What a context record was captured from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Diary,
    Answer,
    Reflection,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Diary => "diary",
            RecordKind::Answer => "answer",
            RecordKind::Reflection => "reflection",
        }
    }
}

/// An emotional reading of a text, produced upstream by the emotion-analysis
/// collaborator and carried here for ranking and display.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmotionProfile {
    /// 1 (very negative) to 5 (very positive)
    pub overall_score: f32,
    /// Up to three labels, most prominent first
    pub dominant_emotions: Vec<String>,
    /// Per-label intensity (0-1); display only, never used in ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_scores: Option<BTreeMap<String, f32>>,
}

impl EmotionProfile {
    pub fn new(overall_score: f32, dominant_emotions: &[&str]) -> Self {
        EmotionProfile {
            overall_score,
            dominant_emotions: dominant_emotions.iter().map(|s| s.to_string()).collect(),
            emotion_scores: None,
        }
    }
}

/// One retrievable unit of user history: a diary entry or a prior answer to
/// a reflective question.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContextRecord {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub emotions: EmotionProfile,
    pub keywords: Vec<String>,
    /// Precomputed embedding; computed on demand from `content` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    #[serde(default)]
    pub kind: RecordKind,
    /// Weak back-reference to the question this record answers; lookup only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Generate a record id from kind, creation time, and a short content hash.
/// The hash suffix keeps ids unique when two records land on the same
/// millisecond.
pub fn generate_record_id(kind: RecordKind, content: &str, date: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{}-{}-{}", kind.as_str(), date.timestamp_millis(), &digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_id_carries_kind_and_differs_by_content() {
        let date = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).single().unwrap();
        let a = generate_record_id(RecordKind::Answer, "first answer", date);
        let b = generate_record_id(RecordKind::Answer, "second answer", date);
        assert!(a.starts_with("answer-"));
        assert_ne!(a, b);
    }

    #[test]
    fn record_kind_defaults_to_diary_in_json() {
        let json = r#"{
            "id": "x",
            "content": "body",
            "date": "2024-08-01T00:00:00Z",
            "emotions": { "overall_score": 3.0, "dominant_emotions": [] },
            "keywords": []
        }"#;
        let record: ContextRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Diary);
        assert!(record.embedding.is_none());
        assert!(record.parent_id.is_none());
    }
}
