use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::PatternType;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a result pattern record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultPatternId(pub Uuid);

impl ResultPatternId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ResultPatternId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ResultPatternId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ResultPatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Record
// ============================================================================

/// A named validation/formatting rule for a configuration field.
///
/// `result_pattern` is an opaque mask string (e.g. `"#####"`); its grammar is
/// owned by the downstream consumer and is never parsed here. The numeric
/// bounds are only meaningful for numeric-typed patterns, but no cross-field
/// relationship is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPattern {
    pub id: ResultPatternId,
    #[serde(rename = "patternName")]
    pub pattern_name: String,
    #[serde(rename = "patternType")]
    pub pattern_type: PatternType,
    #[serde(rename = "resultMaxLength")]
    pub result_max_length: Option<u32>,
    #[serde(rename = "resultPattern")]
    pub result_pattern: String,
    #[serde(rename = "resultMinValue")]
    pub result_min_value: Option<i64>,
    #[serde(rename = "resultMaxValue")]
    pub result_max_value: Option<i64>,
    pub metadata: EntityMetadata,
}

impl ResultPattern {
    /// Create a new record with a fresh identifier and empty constraints
    pub fn new(pattern_name: impl Into<String>, pattern_type: PatternType) -> Self {
        Self {
            id: ResultPatternId::new_v4(),
            pattern_name: pattern_name.into(),
            pattern_type,
            result_max_length: None,
            result_pattern: String::new(),
            result_min_value: None,
            result_max_value: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Apply a field-level edit and bump the update timestamp
    pub fn apply(&mut self, draft: &ResultPatternDraft) {
        self.pattern_name = draft.pattern_name.clone();
        self.pattern_type = draft.pattern_type;
        self.result_max_length = draft.result_max_length;
        self.result_pattern = draft.result_pattern.clone();
        self.result_min_value = draft.result_min_value;
        self.result_max_value = draft.result_max_value;
        self.metadata.touch();
    }

    /// Snapshot the editable fields into a draft for the edit form
    pub fn to_draft(&self) -> ResultPatternDraft {
        ResultPatternDraft {
            pattern_name: self.pattern_name.clone(),
            pattern_type: self.pattern_type,
            result_max_length: self.result_max_length,
            result_pattern: self.result_pattern.clone(),
            result_min_value: self.result_min_value,
            result_max_value: self.result_max_value,
        }
    }
}

// ============================================================================
// Draft (field-level edit payload)
// ============================================================================

/// Editable fields of a result pattern, as carried by the edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPatternDraft {
    #[serde(rename = "patternName")]
    pub pattern_name: String,
    #[serde(rename = "patternType")]
    pub pattern_type: PatternType,
    #[serde(rename = "resultMaxLength")]
    pub result_max_length: Option<u32>,
    #[serde(rename = "resultPattern")]
    pub result_pattern: String,
    #[serde(rename = "resultMinValue")]
    pub result_min_value: Option<i64>,
    #[serde(rename = "resultMaxValue")]
    pub result_max_value: Option<i64>,
}

// ============================================================================
// Errors
// ============================================================================

/// Failures surfaced by pattern store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternStoreError {
    #[error("result pattern {0} not found")]
    NotFound(ResultPatternId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_empty_constraints() {
        let record = ResultPattern::new("New Pattern", PatternType::Alphanumeric);
        assert_eq!(record.pattern_name, "New Pattern");
        assert_eq!(record.pattern_type, PatternType::Alphanumeric);
        assert_eq!(record.result_max_length, None);
        assert_eq!(record.result_pattern, "");
        assert_eq!(record.result_min_value, None);
        assert_eq!(record.result_max_value, None);
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = ResultPattern::new("a", PatternType::Text);
        let b = ResultPattern::new("b", PatternType::Text);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_id_string_round_trip() {
        let id = ResultPatternId::new_v4();
        assert_eq!(ResultPatternId::from_string(&id.as_string()), Ok(id));
    }

    #[test]
    fn test_id_from_invalid_string() {
        assert!(ResultPatternId::from_string("not-a-uuid").is_err());
        assert!(ResultPatternId::from_string("").is_err());
    }

    #[test]
    fn test_apply_draft_replaces_fields_and_keeps_id() {
        let mut record = ResultPattern::new("pqm", PatternType::Alphanumeric);
        let id = record.id;
        let created = record.metadata.created_at;

        let draft = ResultPatternDraft {
            pattern_name: "VINPattern".to_string(),
            pattern_type: PatternType::Numeric,
            result_max_length: Some(17),
            result_pattern: "#####".to_string(),
            result_min_value: Some(0),
            result_max_value: Some(99999),
        };
        record.apply(&draft);

        assert_eq!(record.id, id);
        assert_eq!(record.metadata.created_at, created);
        assert_eq!(record.pattern_name, "VINPattern");
        assert_eq!(record.pattern_type, PatternType::Numeric);
        assert_eq!(record.result_max_length, Some(17));
        assert_eq!(record.result_min_value, Some(0));
        assert_eq!(record.result_max_value, Some(99999));
    }

    #[test]
    fn test_draft_round_trip() {
        let mut record = ResultPattern::new("Test", PatternType::Boolean);
        record.result_pattern = "ab?".to_string();
        record.result_max_length = Some(3);

        let draft = record.to_draft();
        let mut other = ResultPattern::new("placeholder", PatternType::Text);
        other.apply(&draft);

        assert_eq!(other.pattern_name, record.pattern_name);
        assert_eq!(other.pattern_type, record.pattern_type);
        assert_eq!(other.result_max_length, record.result_max_length);
        assert_eq!(other.result_pattern, record.result_pattern);
    }

    #[test]
    fn test_not_found_display_names_the_id() {
        let id = ResultPatternId::new_v4();
        let err = PatternStoreError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
