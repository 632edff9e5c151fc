//! A generic, ordered collection enforcing a uniqueness invariant over an
//! identity notion that is weaker than full equality.
//!
//! [`UniqueList`] is the backing store for the bank. At every observable
//! point no two elements share identity; insertion order is preserved, and
//! any failed operation leaves the list exactly as it was.

use thiserror::Error;

/// Types carrying an identity weaker than `==`. Two values may be the same
/// logical entity (`same_identity`) while differing in their data fields.
pub trait Identity {
    fn same_identity(&self, other: &Self) -> bool;
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("an element with the same identity is already present")]
    Duplicate,

    #[error("no matching element in the list")]
    NotFound,
}

/// Ordered sequence with no two elements identity-equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

// Not derived: a derive would bound T: Default for no reason.
impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity + PartialEq> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// True iff some element shares identity with `item`. O(n).
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.same_identity(item))
    }

    /// Appends `item` at the end. Fails if an identity-equal element is
    /// already present.
    pub fn add(&mut self, item: T) -> Result<(), ListError> {
        if self.contains(&item) {
            return Err(ListError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces the element identity-equal to `target` with `edited`,
    /// keeping its ordinal position.
    ///
    /// Fails with `NotFound` if no element matches `target`, and with
    /// `Duplicate` if `edited` changes identity onto one that some *other*
    /// element already carries.
    pub fn replace(&mut self, target: &T, edited: T) -> Result<(), ListError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing.same_identity(target))
            .ok_or(ListError::NotFound)?;

        if !target.same_identity(&edited) && self.contains(&edited) {
            return Err(ListError::Duplicate);
        }

        self.items[index] = edited;
        Ok(())
    }

    /// Removes the element FULLY equal to `item`.
    ///
    /// Note the asymmetry: `add`/`contains` match by identity, removal by
    /// full equality. This mirrors the upstream behavior; see DESIGN.md.
    pub fn remove(&mut self, item: &T) -> Result<(), ListError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing == item)
            .ok_or(ListError::NotFound)?;
        self.items.remove(index);
        Ok(())
    }

    /// Atomically replaces the whole backing sequence, preserving the
    /// incoming order. Fails if the incoming list has any two
    /// identity-equal items; the list is untouched on failure.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), ListError> {
        if !Self::all_unique(&items) {
            return Err(ListError::Duplicate);
        }
        self.items = items;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Pairwise O(n²) scan; n is small by design.
    fn all_unique(items: &[T]) -> bool {
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                if a.same_identity(b) {
                    return false;
                }
            }
        }
        true
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
