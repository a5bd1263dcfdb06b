//! # Block Parsing
//!
//! Three-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty blocks
//! 2. **Classification** (`classify`): `MarkdownBlockClassifier` decides each
//!    block's `BlockKind` from its opening syntax
//! 3. **Assembly** (`builder`): `BlockBuilder` converts each block into an
//!    HTML node and collects them under one root `div`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned markers and tags
//! - **`segment`**: blank-line splitting
//! - **`classify`**: first-match-wins classification rules
//! - **`builder`**: per-block HTML conversion
//!
//! ## Key Invariants
//!
//! - Blocks are never empty and never carry leading or trailing whitespace
//! - Nothing nests: every block is a direct child of the root
//! - Code block content is tokenized like any other block text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::{BlockBuilder, ROOT_TAG, block_to_html_node};
pub use classify::MarkdownBlockClassifier;
pub use segment::segment;
pub use types::{Block, BlockKind};
