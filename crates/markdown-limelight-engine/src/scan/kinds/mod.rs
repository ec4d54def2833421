//! Per-kind syntax knowledge.
//!
//! Each block kind owns its delimiters and matching rules; the scanner only
//! ever sees small tagged results (`FenceMarker`, `Heading`, `QuotePrefix`),
//! never raw capture groups.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod thematic_break;
