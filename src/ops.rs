//! Set-theoretic operations built on top of the object primitives.
//!
//! Operations that only make sense for sets fail with
//! [`SetError::TypeMismatch`](crate::error::SetError::TypeMismatch) when given an atom.
//! Predicates that make sense for any pair of objects ([`is_singleton_of`],
//! [`is_element_of_power_set`]) simply answer `false` instead.

use std::collections::BTreeSet;

use log::debug;
use num_bigint::BigUint;

use crate::error::SetResult;
use crate::object::Object;

/// Number of elements of a set.
pub fn cardinality(s: &Object) -> SetResult<usize> {
    Ok(s.as_set()?.len())
}

/// `x ∈ s`.
pub fn is_element_of(x: &Object, s: &Object) -> SetResult<bool> {
    Ok(s.as_set()?.contains(x))
}

/// `s ⊆ t`.
pub fn is_subset_of(s: &Object, t: &Object) -> SetResult<bool> {
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(xs.is_subset(ys))
}

/// `s ∩ t = ∅`.
pub fn are_disjoint(s: &Object, t: &Object) -> SetResult<bool> {
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(xs.is_disjoint(ys))
}

/// Whether `s = {t}`.
pub fn is_singleton_of(s: &Object, t: &Object) -> bool {
    match s.as_set() {
        Ok(xs) => xs.len() == 1 && xs.contains(t),
        Err(_) => false,
    }
}

/// Whether `s ∈ ℘(t)`, i.e. both are sets and `s ⊆ t`.
pub fn is_element_of_power_set(s: &Object, t: &Object) -> bool {
    s.is_set() && t.is_set() && is_subset_of(s, t).unwrap_or(false)
}

/// `s ∪ t`.
pub fn union(s: &Object, t: &Object) -> SetResult<Object> {
    debug!("union(s = {}, t = {})", s, t);
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(Object::set(xs.union(ys).cloned()))
}

/// `s ∩ t`.
pub fn intersection(s: &Object, t: &Object) -> SetResult<Object> {
    debug!("intersection(s = {}, t = {})", s, t);
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(Object::set(xs.intersection(ys).cloned()))
}

/// `s \ t`.
pub fn difference(s: &Object, t: &Object) -> SetResult<Object> {
    debug!("difference(s = {}, t = {})", s, t);
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(Object::set(xs.difference(ys).cloned()))
}

/// `s △ t`.
pub fn symmetric_difference(s: &Object, t: &Object) -> SetResult<Object> {
    debug!("symmetric_difference(s = {}, t = {})", s, t);
    let (xs, ys) = (s.as_set()?, t.as_set()?);
    Ok(Object::set(xs.symmetric_difference(ys).cloned()))
}

/// `⋃s`: the union of all elements of `s`, each of which must be a set.
pub fn big_union(s: &Object) -> SetResult<Object> {
    debug!("big_union(s = {})", s);
    let mut result = BTreeSet::new();
    for x in s.as_set()? {
        result.extend(x.as_set()?.iter().cloned());
    }
    Ok(Object::set(result))
}

/// `℘(s)`: the set of all subsets of `s`.
///
/// The result has `2^|s|` elements, see [`power_set_cardinality`] for counting
/// them without building anything.
pub fn power_set(s: &Object) -> SetResult<Object> {
    let xs = s.as_set()?;
    debug!("power_set(s = {}, size = {})", s, xs.len());

    // Subsets are built incrementally: for each element x, every subset found so far
    // is kept as-is and also extended with x.
    let mut subsets: Vec<Vec<Object>> = vec![Vec::new()];
    for x in xs {
        let extended: Vec<Vec<Object>> = subsets
            .iter()
            .map(|subset| {
                let mut subset = subset.clone();
                subset.push(x.clone());
                subset
            })
            .collect();
        subsets.extend(extended);
    }

    Ok(Object::set(subsets.into_iter().map(Object::set)))
}

/// `|℘(s)| = 2^|s|`.
pub fn power_set_cardinality(s: &Object) -> SetResult<BigUint> {
    let n = cardinality(s)?;
    Ok(BigUint::from(1u32) << n)
}
