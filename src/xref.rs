//! Resolution of indirect references.
//!
//! A [`Resolver`] maps an [`IndirectRef`] to the object stored under it.
//! [`XRefTable`] is the in-memory implementation; document loaders can provide
//! their own by implementing [`Resolver::lookup`].
//!
//! ## Examples
//!
//! ```rust
//! use pdfobj::{IndirectRef, Object, Resolver, XRefTable};
//!
//! let mut table = XRefTable::new();
//! table.insert(IndirectRef::new(1, 0), Object::reference(2, 0));
//! table.insert(IndirectRef::new(2, 0), Object::name("Catalog"));
//!
//! let start = Object::reference(1, 0);
//! let resolved = table.resolve(&start).unwrap();
//! assert_eq!(resolved, &Object::name("Catalog"));
//! ```

use crate::{Error, IndirectRef, Object, Result};
use indexmap::{IndexMap, IndexSet};

/// Looks up the objects that references stand for.
pub trait Resolver {
    /// Returns the object stored under `reference`, if any.
    fn lookup(&self, reference: IndirectRef) -> Option<&Object>;

    /// Follows references starting at `object` until a non-reference object.
    ///
    /// Objects that are not references resolve to themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] when a reference has no entry and
    /// [`Error::ReferenceCycle`] when the chain revisits a reference.
    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        let mut current = object;
        let mut seen = IndexSet::new();

        while let Object::IndirectRef(reference) = current {
            if !seen.insert(*reference) {
                return Err(Error::ReferenceCycle(*reference));
            }
            tracing::trace!(%reference, "following indirect reference");
            current = self
                .lookup(*reference)
                .ok_or(Error::DanglingReference(*reference))?;
        }

        Ok(current)
    }
}

/// In-memory table of the objects of a document, keyed by reference.
///
/// A lookup only matches when both object number and generation agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XRefTable {
    objects: IndexMap<IndirectRef, Object>,
}

impl XRefTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `object` under `reference`, returning the previous entry.
    pub fn insert(&mut self, reference: IndirectRef, object: Object) -> Option<Object> {
        self.objects.insert(reference, object)
    }

    pub fn remove(&mut self, reference: IndirectRef) -> Option<Object> {
        self.objects.shift_remove(&reference)
    }

    #[must_use]
    pub fn get(&self, reference: IndirectRef) -> Option<&Object> {
        self.objects.get(&reference)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, IndirectRef, Object> {
        self.objects.iter()
    }
}

impl Resolver for XRefTable {
    fn lookup(&self, reference: IndirectRef) -> Option<&Object> {
        self.objects.get(&reference)
    }
}

impl FromIterator<(IndirectRef, Object)> for XRefTable {
    fn from_iter<T: IntoIterator<Item = (IndirectRef, Object)>>(iter: T) -> Self {
        XRefTable {
            objects: IndexMap::from_iter(iter),
        }
    }
}
