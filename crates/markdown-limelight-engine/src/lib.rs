//! Line-accurate Markdown zone classification for editor decoration.
//!
//! One forward pass over a read-only document classifies every line into a
//! block-level zone (fenced code, indented code, headings, blockquotes,
//! thematic breaks, lists, plain text) and extracts sub-line ranges for
//! inline constructs. The scan is a pure function of
//! `(document, cursor, toggles)` plus a cooperative cancellation flag.

pub mod cancel;
pub mod document;
pub mod features;
pub mod ranges;
pub mod scan;

pub use cancel::CancelFlag;
pub use document::Document;
pub use features::FeatureToggles;
pub use ranges::{ActiveHeading, DecorationSet, Range};
pub use scan::scan;
