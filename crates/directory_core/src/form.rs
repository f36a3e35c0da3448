use crate::{DraftField, FormErrors, ListingDraft};

/// "Add Business" form: the typed draft plus the errors of the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    open: bool,
    draft: ListingDraft,
    errors: FormErrors,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub(crate) fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    pub(crate) fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Stores the value and drops any stale error for that field.
    pub(crate) fn edit(&mut self, field: DraftField, value: String) -> bool {
        let value_changed = self.draft.get(field) != value;
        self.draft.set(field, value);
        let error_cleared = self.errors.clear(field);
        value_changed || error_cleared
    }

    pub(crate) fn reject(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
