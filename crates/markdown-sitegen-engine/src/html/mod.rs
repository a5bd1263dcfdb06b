//! # HTML Tree
//!
//! An owned tree of element nodes that serialises to HTML text.
//!
//! ## Node Types
//!
//! - **`LeafNode`**: a single text value, optionally wrapped in a tag
//! - **`ParentNode`**: an ordered, non-empty list of children wrapped in a tag
//! - **`HtmlNode`**: either of the above, used as a child slot
//!
//! Trees are built bottom-up by the block assembler and rendered once.
//! Text and attribute values are written verbatim: nothing is escaped.

pub mod node;

pub use node::{Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
