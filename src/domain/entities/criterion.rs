//! Selectable design criteria and the user's current selection.

use serde::{Deserialize, Serialize};

/// A catalog entry the user can select to narrow search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub search_keyword: String,
}

impl Criterion {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        search_keyword: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            search_keyword: search_keyword.into(),
        }
    }
}

/// Criterion ids selected by the user.
///
/// Keeps insertion order and never holds the same id twice. Ids are not
/// checked against a catalog; unknown ids are carried and skipped at lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectedCriteria {
    ids: Vec<String>,
}

impl SelectedCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent. Returns `true` when the selection changed.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Adds `id` if absent, removes it otherwise.
    ///
    /// Returns `true` when the id is selected after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|c| c == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|c| c == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedCriteria {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = Self::new();
        for id in iter {
            selected.insert(id);
        }
        selected
    }
}

impl From<Vec<String>> for SelectedCriteria {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SelectedCriteria> for Vec<String> {
    fn from(selected: SelectedCriteria) -> Self {
        selected.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_drops_duplicates_and_keeps_order() {
        let selected: SelectedCriteria = ["eco", "rigid", "eco", "gable"].into_iter().collect();
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["eco", "rigid", "gable"]);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selected = SelectedCriteria::new();
        assert!(selected.toggle("lid_base"));
        assert!(selected.contains("lid_base"));
        assert!(!selected.toggle("lid_base"));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_toggle_preserves_remaining_order() {
        let mut selected: SelectedCriteria = ["a", "b", "c"].into_iter().collect();
        selected.toggle("b");
        selected.toggle("b");
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_insert_reports_change() {
        let mut selected = SelectedCriteria::new();
        assert!(selected.insert("window"));
        assert!(!selected.insert("window"));
    }

    #[test]
    fn test_serde_as_plain_list() {
        let selected: SelectedCriteria = serde_json::from_str(r#"["eco","eco","rigid"]"#).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(serde_json::to_string(&selected).unwrap(), r#"["eco","rigid"]"#);
    }
}
