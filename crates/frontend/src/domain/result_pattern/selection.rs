use contracts::domain::result_pattern::ResultPatternId;

/// The set of row identifiers marked for a bulk action.
///
/// Membership is independent of filtering except through `toggle_all` and
/// `retain_visible`, which both operate on the currently visible rows. The
/// pattern table prunes the set whenever the derived view changes, so the
/// selection never holds ids outside the current view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    ids: Vec<ResultPatternId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ResultPatternId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ResultPatternId) -> bool {
        self.ids.contains(id)
    }

    /// The selected id, when exactly one row is selected
    pub fn single(&self) -> Option<ResultPatternId> {
        match self.ids.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Flip membership of `id`
    pub fn toggle(&mut self, id: ResultPatternId) {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Whether every visible row is selected (false for an empty view)
    pub fn all_selected(&self, visible: &[ResultPatternId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.contains(id))
    }

    /// Header-checkbox semantics over the visible rows: deselect them all
    /// when every one is already selected, select them all otherwise.
    /// Membership is compared per id, never by count.
    pub fn toggle_all(&mut self, visible: &[ResultPatternId]) {
        if self.all_selected(visible) {
            self.ids.retain(|id| !visible.contains(id));
        } else {
            for id in visible {
                if !self.contains(id) {
                    self.ids.push(*id);
                }
            }
        }
    }

    /// Drop ids that are no longer in the visible view
    pub fn retain_visible(&mut self, visible: &[ResultPatternId]) {
        self.ids.retain(|id| visible.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<ResultPatternId> {
        (0..n).map(|_| ResultPatternId::new_v4()).collect()
    }

    #[test]
    fn test_toggle_twice_restores_the_set() {
        let view = ids(3);
        let mut selection = Selection::new();
        selection.toggle(view[0]);
        let snapshot = selection.clone();

        selection.toggle(view[1]);
        selection.toggle(view[1]);

        assert_eq!(selection, snapshot);
    }

    #[test]
    fn test_toggle_all_selects_every_visible_row() {
        let view = ids(3);
        let mut selection = Selection::new();
        selection.toggle(view[1]);

        selection.toggle_all(&view);

        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(&view));
    }

    #[test]
    fn test_toggle_all_on_fully_selected_view_deselects_it() {
        let view = ids(2);
        let mut selection = Selection::new();
        selection.toggle_all(&view);
        selection.toggle_all(&view);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_compares_membership_not_count() {
        let view = ids(2);
        let stray = ResultPatternId::new_v4();
        let mut selection = Selection::new();
        selection.toggle(view[0]);
        selection.toggle(stray);

        // Two selected, two visible, but not the same two: this must select
        // the remaining visible row, not clear the selection.
        selection.toggle_all(&view);

        assert!(selection.all_selected(&view));
        assert!(selection.contains(&stray));
    }

    #[test]
    fn test_toggle_all_on_empty_view_is_a_no_op() {
        let mut selection = Selection::new();
        selection.toggle(ResultPatternId::new_v4());
        selection.toggle_all(&[]);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_retain_visible_prunes_hidden_ids() {
        let view = ids(3);
        let mut selection = Selection::new();
        selection.toggle_all(&view);

        selection.retain_visible(&view[..1]);

        assert_eq!(selection.ids(), &view[..1]);
    }

    #[test]
    fn test_single_requires_exactly_one() {
        let view = ids(2);
        let mut selection = Selection::new();
        assert_eq!(selection.single(), None);

        selection.toggle(view[0]);
        assert_eq!(selection.single(), Some(view[0]));

        selection.toggle(view[1]);
        assert_eq!(selection.single(), None);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let view = ids(2);
        let mut selection = Selection::new();
        selection.toggle_all(&view);
        selection.clear();
        assert!(selection.is_empty());
    }
}
