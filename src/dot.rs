//! Object to DOT (Graphviz) conversion.
//!
//! Every extensionally distinct sub-object becomes exactly one graph node, no matter
//! how many allocations back it, so the picture shows the set as a DAG of shared parts.
//!
//! # DOT Format
//!
//! - **Atoms** are rendered as boxes labeled with their name.
//! - **Sets** are rendered as circles, labeled with their full rendering
//!   (or with `{·}` placeholders if `full_set_labels` is off).
//! - **Edges** go from a set to each of its elements.
//! - **Root nodes** are rendered as rectangles at the top (source rank).
//!
//! # Examples
//!
//! ```
//! use settree_rs::dot::to_dot;
//! use settree_rs::parse::parse;
//!
//! let s = parse("{1, {1, 2}}").unwrap();
//! let dot = to_dot(&[s]).unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;

use crate::debug::number_subobjects;
use crate::node::Node;
use crate::object::Object;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for atoms (default: "box")
    pub atom_shape: &'static str,
    /// Shape for sets (default: "circle")
    pub set_shape: &'static str,
    /// Shape for root nodes (default: "rect")
    pub root_shape: &'static str,
    /// Style for membership edges (default: "solid")
    pub edge_style: &'static str,
    /// Label sets with their full rendering instead of their cardinality (default: true)
    pub full_set_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            atom_shape: "box",
            set_shape: "circle",
            root_shape: "rect",
            edge_style: "solid",
            full_set_labels: true,
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Converts objects to DOT format with the default configuration.
pub fn to_dot(roots: &[Object]) -> Result<String, std::fmt::Error> {
    to_dot_with_config(roots, &DotConfig::default())
}

/// Converts objects to DOT format with a custom configuration.
///
/// Sub-objects shared between several roots are displayed once.
pub fn to_dot_with_config(roots: &[Object], config: &DotConfig) -> Result<String, std::fmt::Error> {
    let ids = number_subobjects(roots);

    let mut dot = String::new();
    writeln!(dot, "digraph {{")?;

    // Nodes
    for (object, id) in ids.iter() {
        match object.node() {
            Node::Atom { name } => {
                writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.atom_shape, escape(name))?;
            }
            Node::Set { elements } => {
                let label = if config.full_set_labels {
                    object.to_string()
                } else {
                    format!("{{·{}}}", elements.len())
                };
                writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.set_shape, escape(&label))?;
            }
        }
    }

    // Membership edges
    for (object, id) in ids.iter() {
        if let Node::Set { elements } = object.node() {
            for x in elements {
                writeln!(dot, "{} -> {} [style={}];", id, ids[x], config.edge_style)?;
            }
        }
    }

    // Roots
    writeln!(dot, "{{ rank=source")?;
    for i in 0..roots.len() {
        writeln!(dot, "r{} [shape={}, label=\"r{}\"];", i, config.root_shape, i)?;
    }
    writeln!(dot, "}}")?;
    for (i, root) in roots.iter().enumerate() {
        writeln!(dot, "r{} -> {};", i, ids[root])?;
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}
