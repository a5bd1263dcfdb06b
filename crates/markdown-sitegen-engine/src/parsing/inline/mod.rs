//! # Inline Parsing
//!
//! Turns a run of block text into typed [`TextSpan`]s.
//!
//! ## Architecture
//!
//! The tokenizer is a fixed pipeline of passes over a growing span list.
//! Each pass rewrites only the spans that are still plain and leaves every
//! other span untouched:
//!
//! 1. bold `**`
//! 2. italic `*` (stepping over intact `**` runs)
//! 3. code `` ` ``
//! 4. images `![alt](url)`
//! 5. links `[text](url)`
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and its conversion to an HTML leaf
//! - **`kinds`**: `SpanKind` and the types that own each delimiter
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`delimiter`**: symmetric delimiter splitting (bold, italic, code)
//! - **`link`**: image and link extraction
//! - **`parser`**: `tokenize()` main entry point
//!
//! ## Precedence
//!
//! Pass order is load-bearing. Inline constructs do not nest: a link
//! inside bold text stays literal text of the bold span.

pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod kinds;
pub mod link;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use error::InlineError;
pub use kinds::SpanKind;
pub use link::{extract_images, extract_links, split_images, split_links};
pub use parser::tokenize;
pub use types::TextSpan;
