// 🔒 Unique Entity List - ordered container that never holds two records
// with the same identity
//
// Every mutation is validate-then-commit under one write lock:
// either the whole change lands (and the revision moves) or nothing does.

use crate::error::{EntityListError, ListResult};
use crate::record::Record;
use crate::view::{new_backing, read_backing, write_backing, ObservableView, SharedBacking};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

pub struct UniqueEntityList<T> {
    backing: SharedBacking<T>,
}

impl<T: Record> UniqueEntityList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        UniqueEntityList {
            backing: new_backing(Vec::new()),
        }
    }

    /// Build a list from records, rejecting identity duplicates
    pub fn from_entities<I>(records: I) -> ListResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<T>>,
    {
        let items: Vec<Arc<T>> = records.into_iter().map(Into::into).collect();
        ensure_unique(&items)?;
        Ok(UniqueEntityList {
            backing: new_backing(items),
        })
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// True iff some stored record has the same identity as `record`
    pub fn contains(&self, record: &T) -> bool {
        read_backing(&self.backing)
            .items
            .iter()
            .any(|stored| stored.is_same_identity(record))
    }

    /// True iff some stored record that is *not* identity-equal to `record`
    /// is similar to it. A record's own stored entry never counts.
    pub fn has_similar(&self, record: &T) -> bool {
        read_backing(&self.backing)
            .items
            .iter()
            .any(|stored| !stored.is_same_identity(record) && stored.is_similar(record))
    }

    /// The stored instance identity-equal to `record`
    pub fn find_equivalent(&self, record: &T) -> ListResult<Arc<T>> {
        read_backing(&self.backing)
            .items
            .iter()
            .find(|stored| stored.is_same_identity(record))
            .cloned()
            .ok_or_else(|| EntityListError::not_found(record))
    }

    /// Display position of the record identity-equal to `record`
    pub fn position_of(&self, record: &T) -> Option<usize> {
        position_in(&read_backing(&self.backing).items, record)
    }

    /// Every index pair `(i, j)`, `i < j`, whose records are similar but
    /// distinct. Advisory only; nothing here is enforced.
    pub fn similar_pairs(&self) -> Vec<(usize, usize)> {
        let backing = read_backing(&self.backing);
        let items = &backing.items;
        let mut pairs = Vec::new();

        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                if items[i].is_similar(&items[j]) && !items[i].is_same_identity(&items[j]) {
                    pairs.push((i, j));
                }
            }
        }

        pairs
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Append `record`. Fails if a stored record has the same identity.
    pub fn add(&mut self, record: impl Into<Arc<T>>) -> ListResult<()> {
        let record = record.into();
        let mut backing = write_backing(&self.backing);

        if backing.items.iter().any(|stored| stored.is_same_identity(&record)) {
            return Err(EntityListError::duplicate(&record));
        }

        backing.items.push(record);
        backing.revision += 1;
        Ok(())
    }

    /// Replace the record identity-equal to `target` with `edited`, keeping
    /// its position. `edited` may keep the target's identity; it may not take
    /// the identity of any other stored record.
    pub fn set_entity(&mut self, target: &T, edited: impl Into<Arc<T>>) -> ListResult<()> {
        let edited = edited.into();
        let mut backing = write_backing(&self.backing);

        let index = position_in(&backing.items, target)
            .ok_or_else(|| EntityListError::not_found(target))?;

        let collides = backing
            .items
            .iter()
            .enumerate()
            .any(|(i, stored)| i != index && stored.is_same_identity(&edited));
        if collides {
            return Err(EntityListError::duplicate(&edited));
        }

        backing.items[index] = edited;
        backing.revision += 1;
        Ok(())
    }

    /// Remove the record identity-equal to `record` and hand it back
    pub fn remove(&mut self, record: &T) -> ListResult<Arc<T>> {
        let mut backing = write_backing(&self.backing);

        let index = position_in(&backing.items, record)
            .ok_or_else(|| EntityListError::not_found(record))?;

        let removed = backing.items.remove(index);
        backing.revision += 1;
        Ok(removed)
    }

    /// Replace the whole sequence with `records`, in order. The incoming
    /// records must be identity-unique among themselves.
    pub fn set_entities<I>(&mut self, records: I) -> ListResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Arc<T>>,
    {
        let items: Vec<Arc<T>> = records.into_iter().map(Into::into).collect();
        ensure_unique(&items)?;
        self.replace_all(items);
        Ok(())
    }

    /// Like [`set_entities`](Self::set_entities) for input that may contain
    /// absent slots (e.g. decoded storage). An absent slot fails with
    /// `NullInput` carrying its position.
    pub fn set_entities_from_slots<I, R>(&mut self, slots: I) -> ListResult<()>
    where
        I: IntoIterator<Item = Option<R>>,
        R: Into<Arc<T>>,
    {
        let items = slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| {
                slot.map(Into::into)
                    .ok_or(EntityListError::NullInput { position })
            })
            .collect::<ListResult<Vec<Arc<T>>>>()?;
        ensure_unique(&items)?;
        self.replace_all(items);
        Ok(())
    }

    /// Replace the whole sequence with `other`'s. `other` already upholds
    /// uniqueness, so this cannot fail.
    pub fn set_entities_from(&mut self, other: &UniqueEntityList<T>) {
        let items = read_backing(&other.backing).items.clone();
        self.replace_all(items);
    }

    fn replace_all(&mut self, items: Vec<Arc<T>>) {
        let mut backing = write_backing(&self.backing);
        backing.items = items;
        backing.revision += 1;
    }

    // ========================================================================
    // COPIES & VIEWS
    // ========================================================================

    /// Same records, same order, independent backing sequence
    pub fn copy(&self) -> Self {
        UniqueEntityList {
            backing: new_backing(read_backing(&self.backing).items.clone()),
        }
    }

    /// Live read-only view over this list's backing sequence
    pub fn as_view(&self) -> ObservableView<T> {
        ObservableView::new(Arc::clone(&self.backing))
    }
}

impl<T> UniqueEntityList<T> {
    pub fn len(&self) -> usize {
        read_backing(&self.backing).items.len()
    }

    pub fn is_empty(&self) -> bool {
        read_backing(&self.backing).items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        read_backing(&self.backing).items.get(index).cloned()
    }

    pub fn snapshot(&self) -> Vec<Arc<T>> {
        read_backing(&self.backing).items.clone()
    }

    pub fn revision(&self) -> u64 {
        read_backing(&self.backing).revision
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn position_in<T: Record>(items: &[Arc<T>], record: &T) -> Option<usize> {
    items.iter().position(|stored| stored.is_same_identity(record))
}

/// O(n²) pairwise identity scan; identity may be a composite predicate with
/// no hash-stable key.
fn ensure_unique<T: Record>(items: &[Arc<T>]) -> ListResult<()> {
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i].is_same_identity(&items[j]) {
                return Err(EntityListError::duplicate(&items[j]));
            }
        }
    }
    Ok(())
}

// ============================================================================
// TRAIT IMPLS
// ============================================================================

impl<T: Record> Default for UniqueEntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for UniqueEntityList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Same length and pairwise full value equality, in order
impl<T: PartialEq> PartialEq for UniqueEntityList<T> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.backing, &other.backing) {
            return true;
        }
        let left = read_backing(&self.backing);
        let right = read_backing(&other.backing);
        left.items.len() == right.items.len()
            && left.items.iter().zip(right.items.iter()).all(|(a, b)| **a == **b)
    }
}

impl<T: fmt::Display> fmt::Display for UniqueEntityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ObservableView::new(Arc::clone(&self.backing)), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueEntityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backing = read_backing(&self.backing);
        f.debug_list()
            .entries(backing.items.iter().map(|item| item.as_ref()))
            .finish()
    }
}

impl<T: Serialize> Serialize for UniqueEntityList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let backing = read_backing(&self.backing);
        serializer.collect_seq(backing.items.iter().map(|item| item.as_ref()))
    }
}

impl<'de, T: Record + Deserialize<'de>> Deserialize<'de> for UniqueEntityList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = Vec::<Option<T>>::deserialize(deserializer)?;
        let mut list = UniqueEntityList::new();
        list.set_entities_from_slots(slots)
            .map_err(serde::de::Error::custom)?;
        Ok(list)
    }
}

// ============================================================================
// TESTS
// ============================================================================
