//! The path-set trie and its set algebra.
//!
//! A [`Set`] stores a family of [`Path`]s by sharing common prefixes. Each node
//! holds:
//!
//! - `members`: elements that complete a stored path at this node
//! - `children`: one sub-trie per element that stored paths continue through
//!
//! The node represents every `[e]` for `e` in `members` plus every `[k] + p` for
//! each child `k -> c` and each `p` in `c`.
//!
//! # Canonical form
//!
//! An empty node never appears as a child. Construction only creates nodes on the
//! way to a new member, and [`Set::intersection`], [`Set::difference`] and
//! [`Set::recursive_difference`] drop any child that comes out empty. Structural
//! equality is therefore the same as equality of the represented path families.
//!
//! # Immutability
//!
//! `insert` exists for the construction phase only. Every algebra operation takes
//! its operands by shared reference and returns a freshly built set, so a finished
//! `Set` can be shared across threads without synchronization. Concurrent builders
//! should produce partial sets and combine them with [`Set::union`].
//!
//! ```
//! use fieldpath::{path, KeyFields, Set};
//!
//! let mine = Set::new_from([
//!     path!("spec", "replicas"),
//!     path!("spec", "containers", KeyFields::single("name", "web"), "image"),
//! ]);
//! let theirs = Set::new_from([path!("spec", "replicas")]);
//!
//! assert!(mine.has(&path!("spec", "replicas")));
//! assert!(!mine.has(&path!("spec")));
//!
//! let conflicts = mine.intersection(&theirs);
//! assert_eq!(conflicts, theirs);
//! assert_eq!(mine.difference(&theirs).size(), 1);
//! ```

use std::{collections::BTreeMap, fmt};

use tracing::{debug, trace};

use super::{FieldPathError, Path, PathElement, PathElementSet};

/// A compact trie representing a set of paths.
#[derive(Debug, Clone, Default)]
pub struct Set {
    members: PathElementSet,
    children: BTreeMap<PathElement, Set>,
}

impl Set {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from the given paths.
    ///
    /// Insertion order does not affect the result. Zero-length paths are skipped
    /// (see [`Set::insert`]).
    pub fn new_from<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut set = Set::new();
        let mut inserted = 0usize;
        for path in paths {
            set.insert(path.as_ref());
            inserted += 1;
        }
        debug!(paths = inserted, size = set.size(), "Built field path set");
        set
    }

    /// Inserts a path while the set is being built.
    ///
    /// Walks all but the last element through `children`, creating nodes as
    /// needed, and records the last element as a member of the final node.
    ///
    /// A zero-length path is a no-op: the root itself is never claimed. Use
    /// [`Set::try_insert`] to have that reported instead.
    pub fn insert(&mut self, path: &Path) {
        let Some((last, prefix)) = path.elements().split_last() else {
            debug!("Ignoring zero-length path");
            return;
        };

        let mut node = self;
        for element in prefix {
            node = node.children.entry(element.clone()).or_default();
        }
        node.members.insert(last.clone());
        trace!(path = %path, "Inserted path");
    }

    /// Inserts a path, rejecting zero-length paths.
    ///
    /// # Errors
    /// Returns [`FieldPathError::EmptyPath`] if `path` has no elements. The set is
    /// left unchanged.
    pub fn try_insert(&mut self, path: &Path) -> Result<(), FieldPathError> {
        if path.is_empty() {
            return Err(FieldPathError::EmptyPath);
        }
        self.insert(path);
        Ok(())
    }

    /// Returns `true` for the empty set.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.children.is_empty()
    }

    /// Returns the number of paths in the set.
    pub fn size(&self) -> usize {
        self.members.len() + self.children.values().map(Set::size).sum::<usize>()
    }

    /// Elements that complete a stored path at this node.
    pub fn members(&self) -> &PathElementSet {
        &self.members
    }

    /// Child sets in canonical element order.
    pub fn children(&self) -> impl Iterator<Item = (&PathElement, &Set)> {
        self.children.iter()
    }

    /// The child set under `element`, if any path continues through it.
    pub fn child(&self, element: &PathElement) -> Option<&Set> {
        self.children.get(element)
    }

    /// The paths that continue through `element`, with `element` stripped.
    ///
    /// Returns the empty set when nothing continues through `element`.
    pub fn with_prefix(&self, element: &PathElement) -> Set {
        self.children.get(element).cloned().unwrap_or_default()
    }

    /// Exact membership test.
    ///
    /// A path is a member only if it was inserted. Neither an ancestor nor a
    /// descendant of a stored path counts.
    pub fn has(&self, path: &Path) -> bool {
        let Some((last, prefix)) = path.elements().split_last() else {
            return false;
        };

        let mut node = self;
        for element in prefix {
            match node.children.get(element) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.members.has(last)
    }

    /// Structural equality of the canonical forms.
    pub fn equals(&self, other: &Set) -> bool {
        if self.members != other.members || self.children.len() != other.children.len() {
            return false;
        }
        self.children
            .iter()
            .zip(&other.children)
            .all(|((k1, c1), (k2, c2))| k1 == k2 && c1.equals(c2))
    }

    /// Paths present in either set.
    pub fn union(&self, other: &Set) -> Set {
        let result = self.union_node(other);
        trace!(
            left = self.size(),
            right = other.size(),
            result = result.size(),
            "Computed union"
        );
        result
    }

    /// Paths present in both sets.
    pub fn intersection(&self, other: &Set) -> Set {
        let result = self.intersection_node(other);
        trace!(
            left = self.size(),
            right = other.size(),
            result = result.size(),
            "Computed intersection"
        );
        result
    }

    /// Paths in `self` that are not in `other`.
    ///
    /// Keys that only `other` has children under remove nothing.
    pub fn difference(&self, other: &Set) -> Set {
        let result = self.difference_node(other);
        trace!(
            left = self.size(),
            right = other.size(),
            result = result.size(),
            "Computed difference"
        );
        result
    }

    /// Like [`Set::difference`], but a member of `other` also removes every path
    /// of `self` that runs through it.
    ///
    /// ```
    /// use fieldpath::{path, Set};
    ///
    /// let owned = Set::new_from([path!("spec", "replicas"), path!("status")]);
    /// let removed = Set::new_from([path!("spec")]);
    ///
    /// // Plain difference only removes the exact path `.spec`
    /// assert_eq!(owned.difference(&removed), owned);
    /// assert_eq!(
    ///     owned.recursive_difference(&removed),
    ///     Set::new_from([path!("status")])
    /// );
    /// ```
    pub fn recursive_difference(&self, other: &Set) -> Set {
        let mut children = BTreeMap::new();
        for (element, child) in &self.children {
            if other.members.has(element) {
                continue;
            }
            match other.children.get(element) {
                Some(other_child) => {
                    insert_non_empty(&mut children, element, child.recursive_difference(other_child))
                }
                None => {
                    children.insert(element.clone(), child.clone());
                }
            }
        }

        Set {
            members: self.members.difference(&other.members),
            children,
        }
    }

    /// Only the paths that are not a proper prefix of another path in the set.
    pub fn leaves(&self) -> Set {
        let members = self
            .members
            .iter()
            .filter(|element| !self.children.contains_key(*element))
            .cloned()
            .collect();

        let mut children = BTreeMap::new();
        for (element, child) in &self.children {
            insert_non_empty(&mut children, element, child.leaves());
        }

        Set { members, children }
    }

    /// All paths in canonical order: a node's members first, then each child's
    /// paths, both in element order.
    pub fn paths(&self) -> Vec<Path> {
        let mut out = Vec::with_capacity(self.size());
        let mut prefix = Vec::new();
        self.collect_paths(&mut prefix, &mut out);
        out
    }

    /// Iterates the paths in the order of [`Set::paths`].
    pub fn iter(&self) -> impl Iterator<Item = Path> {
        self.paths().into_iter()
    }

    fn collect_paths(&self, prefix: &mut Vec<PathElement>, out: &mut Vec<Path>) {
        for member in &self.members {
            let mut elements = prefix.clone();
            elements.push(member.clone());
            out.push(Path::from(elements));
        }
        for (element, child) in &self.children {
            prefix.push(element.clone());
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }

    fn union_node(&self, other: &Set) -> Set {
        let mut children = BTreeMap::new();
        for (element, child) in &self.children {
            let merged = match other.children.get(element) {
                Some(other_child) => child.union_node(other_child),
                None => child.clone(),
            };
            insert_non_empty(&mut children, element, merged);
        }
        for (element, other_child) in &other.children {
            if !self.children.contains_key(element) {
                insert_non_empty(&mut children, element, other_child.clone());
            }
        }

        Set {
            members: self.members.union(&other.members),
            children,
        }
    }

    fn intersection_node(&self, other: &Set) -> Set {
        let (small, large) = if self.children.len() <= other.children.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut children = BTreeMap::new();
        for (element, child) in &small.children {
            if let Some(other_child) = large.children.get(element) {
                insert_non_empty(&mut children, element, child.intersection_node(other_child));
            }
        }

        Set {
            members: self.members.intersection(&other.members),
            children,
        }
    }

    fn difference_node(&self, other: &Set) -> Set {
        let mut children = BTreeMap::new();
        for (element, child) in &self.children {
            match other.children.get(element) {
                Some(other_child) => {
                    insert_non_empty(&mut children, element, child.difference_node(other_child))
                }
                None => {
                    children.insert(element.clone(), child.clone());
                }
            }
        }

        Set {
            members: self.members.difference(&other.members),
            children,
        }
    }
}

/// Adds `child` under `element` unless it is the empty set.
fn insert_non_empty(children: &mut BTreeMap<PathElement, Set>, element: &PathElement, child: Set) {
    if !child.is_empty() {
        children.insert(element.clone(), child);
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Set {}

impl<P: AsRef<Path>> FromIterator<P> for Set {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Set::new_from(iter)
    }
}

impl<P: AsRef<Path>> Extend<P> for Set {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        for path in iter {
            self.insert(path.as_ref());
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.paths().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{path}")?;
        }
        Ok(())
    }
}
