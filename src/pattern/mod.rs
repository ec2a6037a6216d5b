mod error;
mod parser;
mod segment;

pub use error::{PatternError, PatternResult};
pub use parser::{ParsedPattern, parse_pattern};
pub use segment::{DYNAMIC_MARKER, SegmentKind, SegmentPattern, WILDCARD_MARKER};
