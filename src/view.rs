// 👁️ Observable View - live, read-only window over a UniqueEntityList
//
// The view shares the list's backing storage, so it can never be stale.
// It exposes no mutating operations at all.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// SHARED BACKING SEQUENCE
// ============================================================================

/// Storage shared by a list and all views handed out from it
pub(crate) struct Backing<T> {
    pub(crate) items: Vec<Arc<T>>,
    /// Bumped once per successful mutation
    pub(crate) revision: u64,
}

pub(crate) type SharedBacking<T> = Arc<RwLock<Backing<T>>>;

pub(crate) fn new_backing<T>(items: Vec<Arc<T>>) -> SharedBacking<T> {
    Arc::new(RwLock::new(Backing { items, revision: 0 }))
}

// Mutations validate fully before writing, so a poisoned lock never guards
// half-applied state and can be recovered.
pub(crate) fn read_backing<T>(backing: &SharedBacking<T>) -> RwLockReadGuard<'_, Backing<T>> {
    backing.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_backing<T>(backing: &SharedBacking<T>) -> RwLockWriteGuard<'_, Backing<T>> {
    backing.write().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// VIEW
// ============================================================================

/// Read-only projection of a list's backing sequence.
///
/// Reading through a view compiles:
///
/// ```
/// use sellsavvy::{Customer, UniqueEntityList};
/// let list: UniqueEntityList<Customer> = UniqueEntityList::new();
/// let view = list.as_view();
/// assert!(view.is_empty());
/// ```
///
/// The same setup with a write does not:
///
/// ```compile_fail
/// use sellsavvy::{Customer, UniqueEntityList};
/// let list: UniqueEntityList<Customer> = UniqueEntityList::new();
/// let view = list.as_view();
/// view.clear();
/// ```
pub struct ObservableView<T> {
    backing: SharedBacking<T>,
}

impl<T> ObservableView<T> {
    pub(crate) fn new(backing: SharedBacking<T>) -> Self {
        ObservableView { backing }
    }

    pub fn len(&self) -> usize {
        read_backing(&self.backing).items.len()
    }

    pub fn is_empty(&self) -> bool {
        read_backing(&self.backing).items.is_empty()
    }

    /// Element at `index` in display order
    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        read_backing(&self.backing).items.get(index).cloned()
    }

    /// Point-in-time copy of the element handles
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        read_backing(&self.backing).items.clone()
    }

    /// Contents and revision captured together as one consistent state.
    /// The lock is released before this returns, so the owning list stays
    /// writable while the result is alive.
    pub fn read(&self) -> ViewSnapshot<T> {
        let backing = read_backing(&self.backing);
        ViewSnapshot {
            items: backing.items.clone(),
            revision: backing.revision,
        }
    }

    /// Number of successful mutations the backing sequence has seen.
    /// Display collaborators re-render when this moves.
    pub fn revision(&self) -> u64 {
        read_backing(&self.backing).revision
    }

    /// True if `other` is a view onto the same backing sequence
    pub fn shares_backing_with(&self, other: &ObservableView<T>) -> bool {
        Arc::ptr_eq(&self.backing, &other.backing)
    }
}

impl<T> Clone for ObservableView<T> {
    fn clone(&self) -> Self {
        ObservableView {
            backing: Arc::clone(&self.backing),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ObservableView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, &read_backing(&self.backing).items)
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backing = read_backing(&self.backing);
        f.debug_list()
            .entries(backing.items.iter().map(|item| item.as_ref()))
            .finish()
    }
}

/// Renders `[a, b, c]`
fn write_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[Arc<T>]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Element handles plus the revision they were read at
pub struct ViewSnapshot<T> {
    items: Vec<Arc<T>>,
    revision: u64,
}

impl<T> ViewSnapshot<T> {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn into_vec(self) -> Vec<Arc<T>> {
        self.items
    }
}

impl<T> Deref for ViewSnapshot<T> {
    type Target = [Arc<T>];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Label(&'static str);

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    fn backing_of(labels: &[&'static str]) -> SharedBacking<Label> {
        new_backing(labels.iter().map(|l| Arc::new(Label(*l))).collect())
    }

    #[test]
    fn test_view_reads_pass_through() {
        let view = ObservableView::new(backing_of(&["a", "b"]));

        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
        assert_eq!(view.get(0).unwrap().0, "a");
        assert_eq!(view.get(1).unwrap().0, "b");
        assert!(view.get(2).is_none());

        let labels: Vec<&str> = view.read().iter().map(|l| l.0).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_view_sees_writes_to_backing() {
        let backing = backing_of(&["a"]);
        let view = ObservableView::new(Arc::clone(&backing));

        {
            let mut guard = write_backing(&backing);
            guard.items.push(Arc::new(Label("b")));
            guard.revision += 1;
        }

        assert_eq!(view.len(), 2);
        assert_eq!(view.revision(), 1);
        assert_eq!(view.to_string(), "[a, b]");
    }

    #[test]
    fn test_view_display() {
        assert_eq!(ObservableView::new(backing_of(&[])).to_string(), "[]");
        assert_eq!(ObservableView::new(backing_of(&["x"])).to_string(), "[x]");
        assert_eq!(
            ObservableView::new(backing_of(&["x", "y", "z"])).to_string(),
            "[x, y, z]"
        );
    }

    #[test]
    fn test_cloned_view_shares_backing() {
        let view = ObservableView::new(backing_of(&["a"]));
        let other = view.clone();
        assert!(view.shares_backing_with(&other));

        let unrelated = ObservableView::new(backing_of(&["a"]));
        assert!(!view.shares_backing_with(&unrelated));
    }

    #[test]
    fn test_read_keeps_its_state_while_backing_is_written() {
        let backing = backing_of(&["a"]);
        let view = ObservableView::new(Arc::clone(&backing));
        let held = view.read();

        {
            let mut guard = write_backing(&backing);
            guard.items.push(Arc::new(Label("b")));
            guard.revision += 1;
        }

        assert_eq!(held.len(), 1);
        assert_eq!(held.revision(), 0);
        assert_eq!(view.len(), 2);
        assert_eq!(view.read().revision(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_writes() {
        let backing = backing_of(&["a"]);
        let view = ObservableView::new(Arc::clone(&backing));
        let snapshot = view.snapshot();

        write_backing(&backing).items.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(view.is_empty());
    }
}
