use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::error::{Kind, SetResult};
use crate::node::Node;

/// An opaque, shared, immutable handle to an atom or a set.
///
/// Cloning an `Object` only bumps a reference count; the underlying node is shared.
/// Objects are compared exclusively through the canonical order (see [`crate::order`]),
/// so `==` is extensional equality: two sets are equal exactly when they have the
/// same elements, however they were built and wherever they live in memory.
#[derive(Clone)]
pub struct Object(Arc<Node>);

impl Object {
    fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    pub(crate) fn node(&self) -> &Node {
        &self.0
    }

    /// Takes the node out if this is the last handle to it.
    pub(crate) fn into_node(self) -> Option<Node> {
        Arc::into_inner(self.0)
    }

    /// Whether both handles point at the very same allocation.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the underlying node, used to count allocations in diagnostics.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

// Construction
impl Object {
    /// Creates an atom with the given name.
    pub fn atom(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("mk_atom(name = {:?})", name);
        Self::from_node(Node::Atom { name })
    }

    /// Creates a set from already-built elements.
    ///
    /// Elements that are equivalent under the canonical order are collapsed into one.
    pub fn set<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Object>,
    {
        let mut total = 0;
        let elements: BTreeSet<Object> = elements.into_iter().inspect(|_| total += 1).collect();
        debug!("mk_set(size = {}, duplicates = {})", elements.len(), total - elements.len());
        Self::from_node(Node::Set { elements })
    }

    /// The empty set `{}`.
    pub fn empty() -> Self {
        Self::from_node(Node::Set { elements: BTreeSet::new() })
    }

    /// The singleton `{x}`.
    pub fn singleton(x: Object) -> Self {
        Self::set([x])
    }

    /// The unordered pair `{a, b}`, which collapses to `{a}` when `a == b`.
    pub fn pair(a: Object, b: Object) -> Self {
        Self::set([a, b])
    }

    /// The Kuratowski ordered pair `(a, b) = {{a}, {a, b}}`.
    pub fn ordered_pair(a: Object, b: Object) -> Self {
        let first = Self::singleton(a.clone());
        let both = Self::pair(a, b);
        Self::pair(first, both)
    }

    /// The von Neumann ordinal `n`: `0 = {}` and `n + 1 = n ∪ {n}`.
    ///
    /// Every smaller ordinal is shared between all ordinals that contain it.
    pub fn von_neumann(n: usize) -> Self {
        debug!("von_neumann(n = {})", n);
        let mut ordinals: Vec<Object> = Vec::with_capacity(n + 1);
        ordinals.push(Self::empty());
        for _ in 0..n {
            let next = Self::set(ordinals.iter().cloned());
            ordinals.push(next);
        }
        ordinals.pop().unwrap_or_else(Self::empty)
    }
}

// Inspection
impl Object {
    pub fn kind(&self) -> Kind {
        self.node().kind()
    }

    /// Returns `true` if this object is a set (possibly empty), `false` for atoms.
    pub fn is_set(&self) -> bool {
        self.node().is_set()
    }

    /// Returns `true` if this object is an atom.
    pub fn is_atom(&self) -> bool {
        !self.is_set()
    }

    /// Name of an atom, or `None` for sets.
    pub fn name(&self) -> Option<&str> {
        match self.node() {
            Node::Atom { name } => Some(name),
            Node::Set { .. } => None,
        }
    }

    /// Read-only view of the elements of a set, in canonical order.
    ///
    /// Fails with [`SetError::TypeMismatch`](crate::error::SetError::TypeMismatch)
    /// if this object is an atom. Guard with [`Object::is_set`] when the kind is not known.
    pub fn as_set(&self) -> SetResult<&BTreeSet<Object>> {
        let result = self.node().as_set();
        if result.is_err() {
            debug!("as_set: {} is not a set", self);
        }
        result
    }
}

impl FromIterator<Object> for Object {
    fn from_iter<T: IntoIterator<Item = Object>>(iter: T) -> Self {
        Self::set(iter)
    }
}
