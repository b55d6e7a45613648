//! Ordered, de-duplicated collections of path elements.

use std::collections::BTreeSet;

use super::PathElement;

/// A set of [`PathElement`]s, iterated in canonical element order.
///
/// Insertion order never matters: two sets holding the same elements compare
/// equal and iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathElementSet {
    members: BTreeSet<PathElement>,
}

impl PathElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element. Returns `true` if it was not already present.
    pub fn insert(&mut self, element: PathElement) -> bool {
        self.members.insert(element)
    }

    pub fn has(&self, element: &PathElement) -> bool {
        self.members.contains(element)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathElement> {
        self.members.iter()
    }

    /// Elements present in either set.
    pub fn union(&self, other: &PathElementSet) -> PathElementSet {
        self.members.union(&other.members).cloned().collect()
    }

    /// Elements present in both sets.
    pub fn intersection(&self, other: &PathElementSet) -> PathElementSet {
        self.members.intersection(&other.members).cloned().collect()
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &PathElementSet) -> PathElementSet {
        self.members.difference(&other.members).cloned().collect()
    }
}

impl FromIterator<PathElement> for PathElementSet {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PathElementSet {
    type Item = &'a PathElement;
    type IntoIter = std::collections::btree_set::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
