//! Route module for view-path resolution
//!
//! Pure components that turn a view path into a route name and pattern:
//! - `pattern`: classifies single segments (`about`, `[id]`)
//! - `parser`: strips root and extension, collapses index files, builds the pattern

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{parse_pattern, view_stem, ParsedPattern};
pub use pattern::{classify_segment, PatternSegment};
