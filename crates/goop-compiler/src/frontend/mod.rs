//! Line-level analysis of Goop source.
//!
//! Goop is processed line by line rather than through a full parser:
//! 1. Comments are stripped from the whole file up front
//! 2. A running brace count tells every later stage how deep a line sits
//! 3. Compiled patterns classify class headers, fields and method headers

pub mod comments;
pub mod depth;
pub mod patterns;

pub use comments::CommentNormalizer;
pub use depth::BraceDepth;
pub use patterns::{FieldDecl, MethodHeader, Patterns};
