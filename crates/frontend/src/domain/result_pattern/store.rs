use contracts::domain::result_pattern::{
    PatternStoreError, ResultPattern, ResultPatternDraft, ResultPatternId,
};
use contracts::enums::PatternType;

/// In-memory collection of result pattern records.
///
/// Insertion order is preserved; there is no implicit sort and no
/// persistence. The store is owned by the pattern table and lives for the
/// session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternStore {
    items: Vec<ResultPattern>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Store preloaded with the example records
    pub fn seeded() -> Self {
        Self {
            items: mock_patterns(),
        }
    }

    pub fn list(&self) -> &[ResultPattern] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ResultPatternId) -> Option<&ResultPattern> {
        self.items.iter().find(|p| p.id == *id)
    }

    /// Append a new record with default field values and return it
    pub fn create(&mut self) -> ResultPattern {
        let record = ResultPattern::new("New Pattern", PatternType::Alphanumeric);
        self.items.push(record.clone());
        record
    }

    /// Replace the display name of a record
    pub fn rename(
        &mut self,
        id: &ResultPatternId,
        name: impl Into<String>,
    ) -> Result<(), PatternStoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(PatternStoreError::NotFound(*id))?;
        record.pattern_name = name.into();
        record.metadata.touch();
        Ok(())
    }

    /// Apply a field-level edit to a record
    pub fn update(
        &mut self,
        id: &ResultPatternId,
        draft: &ResultPatternDraft,
    ) -> Result<(), PatternStoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(PatternStoreError::NotFound(*id))?;
        record.apply(draft);
        Ok(())
    }

    /// Remove every record whose id is in `ids`, keeping the relative order
    /// of the survivors. Absent ids are ignored; the number of records
    /// actually removed is returned so callers can observe a partial match.
    pub fn delete(&mut self, ids: &[ResultPatternId]) -> usize {
        let before = self.items.len();
        self.items.retain(|p| !ids.contains(&p.id));
        before - self.items.len()
    }
}

/// The example records the console starts with
pub fn mock_patterns() -> Vec<ResultPattern> {
    let mut pqm = ResultPattern::new("pqm", PatternType::Alphanumeric);
    pqm.result_max_length = Some(10);
    pqm.result_pattern = "ddnd".to_string();

    let mut test = ResultPattern::new("Test", PatternType::Alphanumeric);
    test.result_max_length = Some(3);
    test.result_pattern = "ab?".to_string();

    let mut numeric = ResultPattern::new("NumericPattern", PatternType::Numeric);
    numeric.result_max_length = Some(5);
    numeric.result_pattern = "#####".to_string();
    numeric.result_min_value = Some(0);
    numeric.result_max_value = Some(99999);

    let mut vin = ResultPattern::new("VINPattern", PatternType::Alphanumeric);
    vin.result_max_length = Some(17);
    vin.result_pattern = "?????????????????".to_string();

    vec![pqm, test, numeric, vin]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &PatternStore) -> Vec<&str> {
        store.list().iter().map(|p| p.pattern_name.as_str()).collect()
    }

    #[test]
    fn test_seeded_store_lists_examples_in_order() {
        let store = PatternStore::seeded();
        assert_eq!(
            names(&store),
            vec!["pqm", "Test", "NumericPattern", "VINPattern"]
        );
    }

    #[test]
    fn test_create_appends_one_record_with_fresh_id() {
        let mut store = PatternStore::seeded();
        let before: Vec<ResultPatternId> = store.list().iter().map(|p| p.id).collect();

        let created = store.create();

        assert_eq!(store.len(), before.len() + 1);
        assert!(!before.contains(&created.id));
        assert_eq!(created.pattern_name, "New Pattern");
        assert_eq!(created.pattern_type, PatternType::Alphanumeric);
        assert_eq!(store.list().last().unwrap().id, created.id);
    }

    #[test]
    fn test_rename_replaces_name() {
        let mut store = PatternStore::seeded();
        let id = store.list()[0].id;
        store.rename(&id, "pqm-v2").unwrap();
        assert_eq!(store.get(&id).unwrap().pattern_name, "pqm-v2");
    }

    #[test]
    fn test_rename_missing_id_is_not_found() {
        let mut store = PatternStore::seeded();
        let missing = ResultPatternId::new_v4();
        assert_eq!(
            store.rename(&missing, "x"),
            Err(PatternStoreError::NotFound(missing))
        );
        assert_eq!(
            names(&store),
            vec!["pqm", "Test", "NumericPattern", "VINPattern"]
        );
    }

    #[test]
    fn test_update_applies_draft() {
        let mut store = PatternStore::seeded();
        let id = store.list()[1].id;
        let mut draft = store.get(&id).unwrap().to_draft();
        draft.pattern_type = PatternType::Text;
        draft.result_max_length = Some(42);

        store.update(&id, &draft).unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.pattern_type, PatternType::Text);
        assert_eq!(record.result_max_length, Some(42));
        assert_eq!(record.pattern_name, "Test");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = PatternStore::seeded();
        let missing = ResultPatternId::new_v4();
        assert_eq!(
            store.update(&missing, &ResultPatternDraft::default()),
            Err(PatternStoreError::NotFound(missing))
        );
    }

    #[test]
    fn test_delete_removes_exactly_matching_ids() {
        let mut store = PatternStore::seeded();
        let id = store.list()[1].id;

        let removed = store.delete(&[id]);

        assert_eq!(removed, 1);
        assert_eq!(names(&store), vec!["pqm", "NumericPattern", "VINPattern"]);
    }

    #[test]
    fn test_delete_ignores_absent_ids() {
        let mut store = PatternStore::seeded();
        let removed = store.delete(&[ResultPatternId::new_v4()]);
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_delete_all_empties_the_store() {
        let mut store = PatternStore::seeded();
        let all: Vec<ResultPatternId> = store.list().iter().map(|p| p.id).collect();
        let removed = store.delete(&all);
        assert_eq!(removed, 4);
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
