use std::collections::BTreeSet;

/// Row checkboxes on a list screen, keyed by absolute row position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: usize) {
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    /// Header checkbox: clears when the whole page is already selected,
    /// otherwise selects exactly the page.
    pub fn toggle_page<I>(&mut self, page_keys: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let page: BTreeSet<usize> = page_keys.into_iter().collect();
        if self.is_page_selected(page.iter().copied()) {
            self.keys.clear();
        } else {
            self.keys = page;
        }
    }

    /// True for a non-empty page whose rows are all selected.
    pub fn is_page_selected<I>(&self, page_keys: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let mut any = false;
        for key in page_keys {
            if !self.keys.contains(&key) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn contains(&self, key: usize) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.keys.iter().copied()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = Selection::new();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_page_selects_then_clears() {
        let mut selection = Selection::new();
        selection.toggle(42);
        selection.toggle_page(10..15);
        assert_eq!(selection.keys().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14]);
        assert!(selection.is_page_selected(10..15));
        selection.toggle_page(10..15);
        assert!(selection.is_empty());
    }

    #[test]
    fn partially_selected_page_becomes_fully_selected() {
        let mut selection = Selection::new();
        selection.toggle(0);
        assert!(!selection.is_page_selected(0..3));
        selection.toggle_page(0..3);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn empty_page_is_never_selected() {
        let selection = Selection::new();
        assert!(!selection.is_page_selected(0..0));
    }
}
