/// One selectable region of the tab surface.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tab<K> {
    label: String,
    key: K,
}

/// Ordered tabs with a single selection. Panels live elsewhere, so switching
/// tabs never touches their state.
#[derive(Debug, Clone)]
pub struct TabController<K> {
    tabs: Vec<Tab<K>>,
    selected: usize,
}

impl<K: Copy + PartialEq> TabController<K> {
    pub fn compose<L: Into<String>>(tabs: impl IntoIterator<Item = (L, K)>) -> Self {
        Self {
            tabs: tabs
                .into_iter()
                .map(|(label, key)| Tab {
                    label: label.into(),
                    key,
                })
                .collect(),
            selected: 0,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.tabs.iter().map(|tab| tab.label.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<K> {
        self.tabs.get(self.selected).map(|tab| tab.key)
    }

    /// Returns false and keeps the current selection for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn select_key(&mut self, key: K) -> bool {
        match self.tabs.iter().position(|tab| tab.key == key) {
            Some(index) => self.select(index),
            None => false,
        }
    }
}
