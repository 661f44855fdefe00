use serde::{Deserialize, Serialize};

/// Record lifecycle metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was created
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    /// Metadata for a freshly created record
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_advances_updated_at() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        meta.touch();
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at >= created);
    }
}
