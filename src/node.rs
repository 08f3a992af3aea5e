use std::collections::BTreeSet;

use crate::error::{Kind, SetError, SetResult};
use crate::object::Object;

/// The content behind an [`Object`] handle.
///
/// A node is either an atom (a named non-set with no elements) or a set whose
/// children are its elements. Nodes are never mutated after construction, and a
/// set's elements are always fully built before the set itself, so the graph of
/// nodes is finite and acyclic.
#[derive(Debug)]
pub(crate) enum Node {
    Atom { name: String },
    Set { elements: BTreeSet<Object> },
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Atom { .. } => Kind::Atom,
            Node::Set { .. } => Kind::Set,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Node::Set { .. })
    }

    /// Elements of a set node.
    ///
    /// Fails with [`SetError::TypeMismatch`] for atoms: an atom has no elements,
    /// which is not the same thing as being the empty set.
    pub fn as_set(&self) -> SetResult<&BTreeSet<Object>> {
        match self {
            Node::Set { elements } => Ok(elements),
            Node::Atom { name } => Err(SetError::TypeMismatch {
                expected: Kind::Set,
                found_kind: Kind::Atom,
                found: name.clone(),
            }),
        }
    }
}

impl Drop for Node {
    // Releases nested sets with an explicit work list, so dropping a deep chain
    // does not recurse once per level.
    fn drop(&mut self) {
        let Node::Set { elements } = self else {
            return;
        };
        if elements.is_empty() {
            return;
        }
        let mut pending: Vec<Object> = std::mem::take(elements).into_iter().collect();
        while let Some(object) = pending.pop() {
            // Shared nodes stay alive; only the last handle releases its elements here.
            if let Some(mut node) = object.into_node() {
                if let Node::Set { elements } = &mut node {
                    pending.extend(std::mem::take(elements));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_node() {
        let node = Node::Atom { name: "x".to_string() };
        assert!(!node.is_set());
        assert_eq!(node.kind(), Kind::Atom);
        assert!(matches!(
            node.as_set(),
            Err(SetError::TypeMismatch { expected: Kind::Set, found_kind: Kind::Atom, .. })
        ));
    }

    #[test]
    fn test_set_node() {
        let node = Node::Set { elements: BTreeSet::new() };
        assert!(node.is_set());
        assert_eq!(node.kind(), Kind::Set);
        assert_eq!(node.as_set().unwrap().len(), 0);
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut chain = Object::empty();
        for _ in 0..200_000 {
            chain = Object::singleton(chain);
        }
        drop(chain);
    }

    #[test]
    fn test_drop_keeps_shared_elements() {
        let inner = Object::singleton(Object::atom("x"));
        let outer = Object::set([inner.clone(), Object::atom("y")]);
        drop(outer);
        assert_eq!(inner.to_string(), "{x}");
        assert_eq!(inner.as_set().unwrap().len(), 1);
    }
}
