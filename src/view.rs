//! Read-only access to the contents of an [`Object`].
//!
//! The free functions here mirror the methods on [`Object`] for callers that prefer
//! a procedural style, e.g. `for x in as_set(&s)? { ... }`.

use std::collections::{btree_set, BTreeSet};
use std::fmt::{Debug, Display, Formatter};

use crate::error::SetResult;
use crate::node::Node;
use crate::object::Object;

/// Returns whether `object` is a set.
pub fn is_set(object: &Object) -> bool {
    object.is_set()
}

/// Returns the elements of `object`, or fails with a type mismatch if it is an atom.
pub fn as_set(object: &Object) -> SetResult<&BTreeSet<Object>> {
    object.as_set()
}

/// Extensional equality, spelled out in terms of the canonical order.
pub fn equivalent(a: &Object, b: &Object) -> bool {
    !(a < b) && !(b < a)
}

/// Renders atoms verbatim and sets as `{a, b, c}` with elements in canonical order,
/// so equal sets always render identically.
impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Open sets, innermost last: remaining elements and whether one was already written.
        let mut open: Vec<(btree_set::Iter<'_, Object>, bool)> = Vec::new();
        let mut next = Some(self);

        loop {
            if let Some(x) = next.take() {
                match x.node() {
                    Node::Atom { name } => f.write_str(name)?,
                    Node::Set { elements } => {
                        f.write_str("{")?;
                        open.push((elements.iter(), false));
                    }
                }
            }

            let Some((elements, started)) = open.last_mut() else {
                return Ok(());
            };
            match elements.next() {
                Some(x) => {
                    if *started {
                        f.write_str(", ")?;
                    }
                    *started = true;
                    next = Some(x);
                }
                None => {
                    f.write_str("}")?;
                    open.pop();
                }
            }
        }
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self)
    }
}
