//! # settree-rs: Finite sets as immutable trees
//!
//! **`settree-rs`** models finite sets from axiomatic set theory as an immutable value type.
//! Every object is a node in a finite, acyclic tree: either an **atom** (a named non-set)
//! or a **set** whose children are its elements, which may be atoms or sets themselves.
//!
//! ## Key Features
//!
//! - **Shared, immutable handles**: an [`Object`][crate::object::Object] is a cheap,
//!   reference-counted handle. Cloning it shares the underlying node, and nothing can
//!   mutate a node once it is built.
//! - **Canonical order**: objects are ordered by a single total order (see [`order`]),
//!   which is also the definition of equality. Two sets are equal exactly when they
//!   contain the same elements, regardless of construction history or memory identity.
//! - **Well-founded by construction**: elements must exist before the set containing
//!   them, so no set can contain itself and every comparison terminates.
//! - **Thread-safe sharing**: objects are `Send + Sync` and can be compared from many
//!   threads at once.
//!
//! ## Basic Usage
//!
//! ```rust
//! use settree_rs::object::Object;
//!
//! let one = Object::atom("1");
//! let two = Object::atom("2");
//!
//! // Built independently and in a different order, with a duplicate:
//! let a = Object::set([one.clone(), two.clone()]);
//! let b = Object::set([two.clone(), one.clone(), one.clone()]);
//!
//! assert!(!(a < b) && !(b < a));
//! assert_eq!(a, b);
//! assert_eq!(b.to_string(), "{1, 2}");
//!
//! // Atoms come before every set, and smaller sets before larger ones.
//! assert!(one < a);
//! assert!(a < Object::set([one, two, Object::atom("3")]));
//!
//! // Atoms have no elements.
//! assert!(Object::atom("x").as_set().is_err());
//! ```
//!
//! ## Core Components
//!
//! - **[`object`]**: the [`Object`][crate::object::Object] handle, with its constructors and accessors.
//! - **[`order`]**: the canonical comparator.
//! - **[`view`]**: procedural accessors and the textual rendering.
//! - **[`ops`]**: union, intersection, power set and friends.
//! - **[`parse`]**: reading objects from roster notation such as `{1, {2, 3}}`.
//! - **[`intern`]**: a unique table that shares equal objects.
//! - **[`debug`]** and **[`dot`]**: structure inspection and Graphviz output.

pub mod debug;
pub mod dot;
pub mod error;
pub mod intern;
mod node;
pub mod object;
pub mod ops;
pub mod order;
pub mod parse;
pub mod view;
