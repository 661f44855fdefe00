use crate::domain::result_pattern::selection::Selection;
use crate::domain::result_pattern::store::PatternStore;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ResultPatternListState {
    pub store: PatternStore,
    pub selection: Selection,
}

impl Default for ResultPatternListState {
    fn default() -> Self {
        Self {
            store: PatternStore::seeded(),
            selection: Selection::new(),
        }
    }
}

pub fn create_state() -> RwSignal<ResultPatternListState> {
    RwSignal::new(ResultPatternListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleting_every_seeded_record_empties_list_and_selection() {
        let mut state = ResultPatternListState::default();
        let all: Vec<_> = state.store.list().iter().map(|p| p.id).collect();
        state.selection.toggle_all(&all);

        let removed = state.store.delete(&state.selection.ids().to_vec());
        state.selection.clear();

        assert_eq!(removed, 4);
        assert!(state.store.list().is_empty());
        assert!(state.selection.is_empty());
    }
}
