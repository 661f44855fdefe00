use serde::{Deserialize, Serialize};

/// Result pattern value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PatternType {
    #[default]
    Alphanumeric,
    Numeric,
    Boolean,
    Text,
}

impl PatternType {
    /// Stable code used in filters and serialized payloads
    pub fn code(&self) -> &'static str {
        match self {
            PatternType::Alphanumeric => "Alphanumeric",
            PatternType::Numeric => "Numeric",
            PatternType::Boolean => "Boolean",
            PatternType::Text => "Text",
        }
    }

    /// Human-readable name for the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternType::Alphanumeric => "Alphanumeric",
            PatternType::Numeric => "Numeric",
            PatternType::Boolean => "Boolean",
            PatternType::Text => "Text",
        }
    }

    /// All pattern types, in the order they appear in dropdowns
    pub fn all() -> [PatternType; 4] {
        [
            PatternType::Alphanumeric,
            PatternType::Numeric,
            PatternType::Boolean,
            PatternType::Text,
        ]
    }

    /// Parse from a code string. The empty string means "no type selected"
    /// and maps to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Alphanumeric" => Some(PatternType::Alphanumeric),
            "Numeric" => Some(PatternType::Numeric),
            "Boolean" => Some(PatternType::Boolean),
            "Text" => Some(PatternType::Text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for ty in PatternType::all() {
            assert_eq!(PatternType::from_code(ty.code()), Some(ty));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(PatternType::from_code(""), None);
        assert_eq!(PatternType::from_code("alphanumeric"), None);
    }
}
