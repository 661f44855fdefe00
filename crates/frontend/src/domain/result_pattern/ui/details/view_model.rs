use contracts::domain::result_pattern::{ResultPattern, ResultPatternDraft};
use leptos::prelude::*;

/// ViewModel for the result pattern edit form.
///
/// The form data is stored directly as a `ResultPatternDraft`; field inputs
/// write through `form.update()` in the view, and the component applies the
/// draft to the store on save.
#[derive(Clone, Copy)]
pub struct ResultPatternDetailsViewModel {
    pub form: RwSignal<ResultPatternDraft>,
    pub error: RwSignal<Option<String>>,
}

impl ResultPatternDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ResultPatternDraft::default()),
            error: RwSignal::new(None),
        }
    }

    /// Load the form from an existing record
    pub fn load(&self, record: &ResultPattern) {
        self.error.set(None);
        self.form.set(record.to_draft());
    }

    pub fn is_form_valid(&self) -> bool {
        !self.form.get().pattern_name.trim().is_empty()
    }
}

impl Default for ResultPatternDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
