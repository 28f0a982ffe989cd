use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Multi-select filter state. An empty specific set never exists: deselecting the last
/// item goes back to [Selection::AllSelected].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    AllSelected,
    Specific(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::AllSelected
    }
}

impl<T: Ord> Selection<T> {
    pub fn only<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: BTreeSet<T> = items.into_iter().collect();

        if items.is_empty() {
            Selection::AllSelected
        } else {
            Selection::Specific(items)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::AllSelected)
    }

    pub fn matches<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Selection::AllSelected => true,
            Selection::Specific(items) => items.contains(item),
        }
    }

    /// Whether the item was picked explicitly, as opposed to matching through "all".
    pub fn is_explicitly_selected<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Selection::AllSelected => false,
            Selection::Specific(items) => items.contains(item),
        }
    }

    pub fn toggle(&mut self, item: T) {
        match self {
            Selection::AllSelected => *self = Selection::Specific(BTreeSet::from([item])),
            Selection::Specific(items) => {
                if !items.remove(&item) {
                    items.insert(item);
                }
                if items.is_empty() {
                    *self = Selection::AllSelected;
                }
            }
        }
    }

    pub fn select_all(&mut self) {
        *self = Selection::AllSelected;
    }
}
