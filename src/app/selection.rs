//! Selection state for the detail view.

/// Which single movie, if any, is expanded into the detail view.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an id; selecting the already-selected id clears the selection.
    pub fn select(&mut self, imdb_id: &str) {
        if self.selected.as_deref() == Some(imdb_id) {
            self.selected = None;
        } else {
            self.selected = Some(imdb_id.to_string());
        }
    }

    /// Unconditionally clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
