use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter segment '{segment}' in pattern '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, segment: String },
    #[error(
        "wildcard segment must be terminal: index {segment_index} of {total_segments} in pattern '{pattern}'"
    )]
    WildcardMustBeTerminal {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("pattern '{pattern}' has {segments} segments, exceeding the limit of {limit}")]
    TooManySegments {
        pattern: String,
        segments: usize,
        limit: usize,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
