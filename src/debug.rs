//! Debug utilities for inspecting object structure.
//!
//! These are primarily useful in tests and during development, e.g. to check how
//! much structure is shared between sub-objects.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::{Display, Formatter};

use crate::error::Kind;
use crate::node::Node;
use crate::object::Object;

/// Size measures of an object tree.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct ObjectStats {
    /// Length of the longest chain of membership from the root to a leaf.
    /// Atoms and the empty set have depth 0.
    pub depth: usize,
    /// Nodes of the tree, counting every occurrence of a shared sub-object.
    pub nodes: usize,
    /// Extensionally distinct sub-objects, including the root.
    pub distinct: usize,
    /// Distinct allocations backing the tree.
    pub allocations: usize,
    /// Distinct atoms occurring anywhere in the tree.
    pub atoms: usize,
}

impl Display for ObjectStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "depth={}, nodes={}, distinct={}, allocations={}, atoms={}",
            self.depth, self.nodes, self.distinct, self.allocations, self.atoms
        )
    }
}

/// Computes [`ObjectStats`] for `root`.
pub fn stats(root: &Object) -> ObjectStats {
    // Per-allocation results, so shared sub-objects are measured once: (depth, nodes).
    let mut measured: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    let mut distinct: BTreeSet<Object> = BTreeSet::new();
    let mut atoms: BTreeSet<Object> = BTreeSet::new();

    // Post-order walk with an explicit stack: (object, children already pushed).
    let mut stack: Vec<(&Object, bool)> = vec![(root, false)];
    while let Some((object, expanded)) = stack.pop() {
        if measured.contains_key(&object.addr()) {
            continue;
        }
        match object.node() {
            Node::Atom { .. } => {
                measured.insert(object.addr(), (0, 1));
                atoms.insert(object.clone());
                distinct.insert(object.clone());
            }
            Node::Set { elements } if !expanded => {
                stack.push((object, true));
                stack.extend(elements.iter().map(|x| (x, false)));
            }
            Node::Set { elements } => {
                let mut depth = 0;
                let mut nodes = 1;
                for x in elements {
                    let (d, n) = measured[&x.addr()];
                    depth = depth.max(d + 1);
                    nodes += n;
                }
                measured.insert(object.addr(), (depth, nodes));
                distinct.insert(object.clone());
            }
        }
    }

    let (depth, nodes) = measured[&root.addr()];
    ObjectStats {
        depth,
        nodes,
        distinct: distinct.len(),
        allocations: measured.len(),
        atoms: atoms.len(),
    }
}

/// Detailed information about a single distinct sub-object.
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    /// Position of this sub-object in [`ObjectTree::objects`].
    pub id: usize,
    pub kind: Kind,
    /// Full rendering of the sub-object.
    pub label: String,
    /// Ids of the elements, in canonical order. Empty for atoms.
    pub children: Vec<usize>,
}

impl Display for ObjectInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Kind::Atom => write!(f, "#{} atom {}", self.id, self.label),
            Kind::Set => {
                write!(f, "#{} set {} -> [", self.id, self.label)?;
                for (i, c) in self.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "#{}", c)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The distinct sub-objects of an object, each listed once.
#[derive(Debug, Clone)]
pub struct ObjectTree {
    pub root: usize,
    pub objects: Vec<ObjectInfo>,
}

impl Display for ObjectTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Object tree (root = #{}):", self.root)?;
        for info in &self.objects {
            writeln!(f, "  {}", info)?;
        }
        Ok(())
    }
}

/// Numbers every extensionally distinct sub-object of the given roots.
///
/// Ids follow the canonical order, so atoms come first.
pub(crate) fn number_subobjects<'a>(roots: impl IntoIterator<Item = &'a Object>) -> BTreeMap<Object, usize> {
    let mut seen: BTreeSet<Object> = BTreeSet::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<&Object> = roots.into_iter().collect();
    while let Some(object) = stack.pop() {
        if !visited.insert(object.addr()) {
            continue;
        }
        seen.insert(object.clone());
        if let Node::Set { elements } = object.node() {
            stack.extend(elements.iter());
        }
    }
    seen.into_iter().enumerate().map(|(id, x)| (x, id)).collect()
}

/// Returns a table of the distinct sub-objects of `root`.
pub fn debug_tree(root: &Object) -> ObjectTree {
    let ids = number_subobjects([root]);
    let objects = ids
        .iter()
        .map(|(object, &id)| ObjectInfo {
            id,
            kind: object.kind(),
            label: object.to_string(),
            children: match object.node() {
                Node::Atom { .. } => Vec::new(),
                Node::Set { elements } => elements.iter().map(|x| ids[x]).collect(),
            },
        })
        .collect();
    ObjectTree { root: ids[root], objects }
}

/// Compact multi-line description of `root`.
pub fn debug_string(root: &Object) -> String {
    format!("Object {} ({}):\n{}", root, stats(root), debug_tree(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_stats_atom() {
        let s = stats(&Object::atom("x"));
        assert_eq!(
            s,
            ObjectStats {
                depth: 0,
                nodes: 1,
                distinct: 1,
                allocations: 1,
                atoms: 1,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        let s = stats(&Object::empty());
        assert_eq!(s.depth, 0);
        assert_eq!(s.nodes, 1);
        assert_eq!(s.atoms, 0);
    }

    #[test]
    fn test_stats_shared() {
        // Separately built {1} twice: two allocations, one distinct object.
        let a = Object::singleton(Object::atom("1"));
        let b = Object::singleton(Object::atom("1"));
        let s = Object::set([a, Object::singleton(b)]);
        let st = stats(&s);
        assert_eq!(st.depth, 3);
        // root, {1}, 1, {{1}}, {1}, 1
        assert_eq!(st.nodes, 6);
        // root, {1}, 1, {{1}}
        assert_eq!(st.distinct, 4);
        assert_eq!(st.allocations, 6);
        assert_eq!(st.atoms, 1);
    }

    #[test]
    fn test_stats_von_neumann() {
        let five = Object::von_neumann(5);
        let st = stats(&five);
        assert_eq!(st.depth, 5);
        assert_eq!(st.distinct, 6);
        assert_eq!(st.allocations, 6);
        // Ordinal n has 2^n nodes when counted as a tree.
        assert_eq!(st.nodes, 32);
    }

    #[test]
    fn test_debug_tree() {
        let s = parse("{1, {1}}").unwrap();
        let tree = debug_tree(&s);
        assert_eq!(tree.objects.len(), 3);
        // Canonical order: 1, {1}, {1, {1}}.
        assert_eq!(tree.root, 2);
        assert_eq!(tree.objects[0].kind, Kind::Atom);
        assert_eq!(tree.objects[1].children, vec![0]);
        assert_eq!(tree.objects[2].children, vec![0, 1]);
        let text = tree.to_string();
        assert!(text.contains("#2 set {1, {1}} -> [#0, #1]"), "unexpected: {}", text);
    }

    #[test]
    fn test_debug_string() {
        let s = debug_string(&parse("{a}").unwrap());
        assert!(s.starts_with("Object {a} (depth=1"), "unexpected: {}", s);
        assert!(s.contains("#0 atom a"));
    }
}
