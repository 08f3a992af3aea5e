//! The canonical total order over objects.
//!
//! This order is the single source of truth for equality: two objects are the same
//! exactly when neither is less than the other. The rules, by priority:
//!
//! 1. Every atom is less than every set.
//! 2. Atoms are ordered lexicographically by name.
//! 3. Sets are ordered first by cardinality (smaller first), then by comparing their
//!    elements pairwise in canonical order, where the first non-equivalent pair decides.
//!    Sets of the same size whose elements are all pairwise equivalent are equivalent.
//!
//! Sets are finite and acyclic by construction, so every descent reaches a leaf
//! (an atom or the empty set) after at most the height of the tree.
//! The walk keeps its own stack instead of recursing, so arbitrarily deep nesting
//! does not exhaust the call stack.

use std::cmp::Ordering;
use std::collections::btree_set;

use crate::node::Node;
use crate::object::Object;

/// Outcome of comparing two nodes without looking at their elements.
enum Step<'a> {
    Decided(Ordering),
    Descend(btree_set::Iter<'a, Object>, btree_set::Iter<'a, Object>),
}

fn step<'a>(a: &'a Object, b: &'a Object) -> Step<'a> {
    // A node is always equivalent to itself.
    if a.ptr_eq(b) {
        return Step::Decided(Ordering::Equal);
    }

    match (a.node(), b.node()) {
        (Node::Atom { name: x }, Node::Atom { name: y }) => Step::Decided(x.cmp(y)),
        (Node::Atom { .. }, Node::Set { .. }) => Step::Decided(Ordering::Less),
        (Node::Set { .. }, Node::Atom { .. }) => Step::Decided(Ordering::Greater),
        (Node::Set { elements: xs }, Node::Set { elements: ys }) => match xs.len().cmp(&ys.len()) {
            Ordering::Equal => Step::Descend(xs.iter(), ys.iter()),
            ord => Step::Decided(ord),
        },
    }
}

/// Compares two objects in the canonical order.
pub fn compare(a: &Object, b: &Object) -> Ordering {
    // Pairs of element iterators of same-sized sets still being compared.
    let mut pending: Vec<(btree_set::Iter<'_, Object>, btree_set::Iter<'_, Object>)> = Vec::new();
    let mut next = Some((a, b));

    loop {
        if let Some((x, y)) = next.take() {
            match step(x, y) {
                Step::Decided(Ordering::Equal) => {}
                Step::Decided(ord) => return ord,
                Step::Descend(xs, ys) => pending.push((xs, ys)),
            }
        }

        let Some((xs, ys)) = pending.last_mut() else {
            return Ordering::Equal;
        };
        // Both iterators have the same length, so they run out together.
        match (xs.next(), ys.next()) {
            (Some(x), Some(y)) => next = Some((x, y)),
            _ => {
                pending.pop();
            }
        }
    }
}

/// Returns `true` if neither object is less than the other.
pub fn equivalent(a: &Object, b: &Object) -> bool {
    compare(a, b) == Ordering::Equal
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        equivalent(self, other)
    }
}

impl Eq for Object {}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn atom(name: &str) -> Object {
        Object::atom(name)
    }

    fn set<const N: usize>(elements: [Object; N]) -> Object {
        Object::set(elements)
    }

    #[test]
    fn test_atoms_lexicographic() {
        assert!(atom("1") < atom("2"));
        assert!(atom("10") < atom("2"));
        assert!(atom("a") > atom("B"));
        assert_eq!(compare(&atom("x"), &atom("x")), Ordering::Equal);
    }

    #[test]
    fn test_atom_before_set() {
        let s = set([atom("1"), atom("2")]);
        assert!(atom("1") < s);
        assert!(atom("zzz") < Object::empty());
        assert!(Object::empty() > atom(""));
    }

    #[test]
    fn test_size_first() {
        let small = set([atom("x"), atom("y")]);
        let large = set([atom("a"), atom("b"), atom("c")]);
        assert!(small < large);

        let nested = set([set([set([atom("deep")])])]);
        assert!(nested < small);
    }

    #[test]
    fn test_first_differing_element_decides() {
        let a = set([atom("1"), atom("2"), atom("3")]);
        let b = set([atom("1"), atom("2"), atom("4")]);
        assert!(a < b);
        assert!(!(b < a));
    }

    #[test]
    fn test_separately_built_sets_are_equivalent() {
        let a = set([atom("1"), atom("2")]);
        let b = set([atom("2"), atom("1")]);
        assert!(!a.ptr_eq(&b));
        assert!(!(a < b) && !(b < a));
        assert!(equivalent(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_nested_equivalence() {
        let a = set([atom("1"), set([atom("2"), set([])])]);
        let b = set([set([set([]), atom("2")]), atom("1")]);
        assert_eq!(a, b);

        let c = set([atom("1"), set([atom("2"), set([atom("3")])])]);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn test_empty_sets_are_equivalent() {
        assert_eq!(Object::empty(), set([]));
    }

    #[test]
    fn test_deep_nesting() {
        // Two separately built chains {{{...{}...}}} of the same depth.
        let depth = 100_000;
        let mut a = Object::empty();
        let mut b = Object::empty();
        for _ in 0..depth {
            a = Object::singleton(a);
            b = Object::singleton(b);
        }
        assert_eq!(compare(&a, &b), Ordering::Equal);

        let c = Object::singleton(Object::singleton(Object::atom("x")));
        assert_eq!(compare(&c, &a), Ordering::Less);
    }
}
