// 🧬 Record Contract - three separate comparison capabilities
//
// "Same identity" is what uniqueness is enforced on.
// "Similar" is advisory only (duplicate warnings).
// Full value equality is plain `PartialEq` and is what list equality uses.

use std::fmt::Display;

/// A domain value that can live inside a [`UniqueEntityList`](crate::UniqueEntityList).
///
/// Implementors must keep `is_same_identity` reflexive, symmetric and
/// transitive over their identity fields. Records are never mutated once
/// constructed; edits produce a new value.
pub trait Record: PartialEq + Display {
    /// Strict key-field equality. Two records for which this holds are the
    /// same entity and may not coexist in one list.
    fn is_same_identity(&self, other: &Self) -> bool;

    /// Looser equality used only to warn about likely duplicates.
    fn is_similar(&self, other: &Self) -> bool;
}

/// Lowercases and strips all whitespace, so "Alice  Pauline" ~ "alicepauline"
pub(crate) fn similarity_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
