//! The load-once project store.

use crate::project::ProjectRecord;

/// In-memory list of projects, written once by the loader.
///
/// The store starts unset. [`ProjectStore::populate`] replaces the whole list;
/// there is no partial update. Readers that run before (or after a failed)
/// load see an empty slice.
#[derive(Debug, Default, Clone)]
pub struct ProjectStore {
    projects: Option<Vec<ProjectRecord>>,
}

impl ProjectStore {
    /// Create an unset store.
    #[must_use]
    pub const fn new() -> Self {
        Self { projects: None }
    }

    /// Replace the stored list.
    pub fn populate(&mut self, projects: Vec<ProjectRecord>) {
        self.projects = Some(projects);
    }

    /// Whether a load has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.projects.is_some()
    }

    /// All projects in load order; empty when unset.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        self.projects.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample;

    #[test]
    fn starts_unset_and_empty() {
        let store = ProjectStore::new();
        assert!(!store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn populate_replaces_whole_list() {
        let mut store = ProjectStore::new();
        store.populate(vec![sample("A", false), sample("B", true)]);
        assert_eq!(store.len(), 2);
        store.populate(vec![sample("C", false)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.projects()[0].title, "C");
    }

    #[test]
    fn empty_load_is_still_loaded() {
        let mut store = ProjectStore::new();
        store.populate(Vec::new());
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }
}
