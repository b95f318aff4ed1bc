//! paperforge-markup — Fault-tolerant HTML fragment handling.
//!
//! This crate defines the node tree that quiz content is parsed into, the
//! tolerant parser that builds it, the serializer that turns it back into
//! markup, and the tree walker the generators use to rewrite blanks in place.

pub mod node;
pub mod parser;
pub mod render;
pub mod walk;

pub use node::{Element, Node};
pub use parser::parse;
pub use render::to_html;
pub use walk::walk;
