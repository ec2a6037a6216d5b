use smallvec::SmallVec;

use crate::path::{join_segments, split_segments};
use crate::pattern::{PatternError, PatternResult, SegmentKind, SegmentPattern};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    normalized: String,
    segments: SmallVec<[SegmentPattern; 8]>,
}

impl ParsedPattern {
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn segments(&self) -> &[SegmentPattern] {
        &self.segments
    }

    /// Capture keys declared by the pattern, in declaration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_parameter())
            .map(SegmentPattern::placeholder)
    }

    /// Switches every segment to case-insensitive matching.
    pub fn fold_case(&mut self) {
        for segment in self.segments.iter_mut() {
            segment.fold_case();
        }
    }
}

pub fn parse_pattern(pattern: &str, max_segments: usize) -> PatternResult<ParsedPattern> {
    let raw_segments = split_segments(pattern);
    let total_segments = raw_segments.len();

    if total_segments > max_segments {
        return Err(PatternError::TooManySegments {
            pattern: pattern.to_string(),
            segments: total_segments,
            limit: max_segments,
        });
    }

    let mut segments = SmallVec::with_capacity(total_segments);
    for (segment_index, raw) in raw_segments.iter().enumerate() {
        let segment = SegmentPattern::parse(raw);

        if segment.is_parameter() && segment.placeholder().is_empty() {
            return Err(PatternError::ParameterMissingName {
                pattern: pattern.to_string(),
                segment: raw.to_string(),
            });
        }

        if segment.kind() == SegmentKind::Wildcard && segment_index + 1 != total_segments {
            return Err(PatternError::WildcardMustBeTerminal {
                pattern: pattern.to_string(),
                segment_index,
                total_segments,
            });
        }

        segments.push(segment);
    }

    Ok(ParsedPattern {
        normalized: join_segments(&raw_segments),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_segments_in_order() {
        let parsed = parse_pattern("/users/:id/files/*rest", 64).unwrap();
        let kinds: Vec<SegmentKind> = parsed.segments().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Literal,
                SegmentKind::Dynamic,
                SegmentKind::Literal,
                SegmentKind::Wildcard
            ]
        );
        assert_eq!(parsed.placeholders().collect::<Vec<_>>(), vec!["id", "rest"]);
    }

    #[test]
    fn normalizes_before_parsing() {
        let parsed = parse_pattern("//users/./:id/", 64).unwrap();
        assert_eq!(parsed.normalized(), "/users/:id");
        assert_eq!(parsed.segments().len(), 2);
    }

    #[test]
    fn folding_case_keeps_declared_placeholders() {
        let mut parsed = parse_pattern("/Users/:userId/*Rest", 64).unwrap();
        parsed.fold_case();
        let keys: Vec<&str> = parsed.segments().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["users", ":userid", "*rest"]);
        assert_eq!(parsed.placeholders().collect::<Vec<_>>(), vec!["userId", "Rest"]);
        assert_eq!(parsed.normalized(), "/Users/:userId/*Rest");
    }

    #[test]
    fn root_pattern_has_no_segments() {
        let parsed = parse_pattern("/", 64).unwrap();
        assert_eq!(parsed.normalized(), "/");
        assert!(parsed.segments().is_empty());
    }

    #[test]
    fn rejects_nameless_parameters() {
        let err = parse_pattern("/users/:", 64).unwrap_err();
        assert_eq!(
            err,
            PatternError::ParameterMissingName {
                pattern: "/users/:".to_string(),
                segment: ":".to_string(),
            }
        );

        assert!(matches!(
            parse_pattern("/files/*", 64),
            Err(PatternError::ParameterMissingName { .. })
        ));
    }

    #[test]
    fn rejects_wildcard_before_last_segment() {
        match parse_pattern("/files/*rest/meta", 64).unwrap_err() {
            PatternError::WildcardMustBeTerminal {
                segment_index,
                total_segments,
                ..
            } => {
                assert_eq!(segment_index, 1);
                assert_eq!(total_segments, 3);
            }
            other => panic!("expected WildcardMustBeTerminal, got {other:?}"),
        }
    }

    #[test]
    fn rejects_patterns_deeper_than_limit() {
        match parse_pattern("/a/b/c", 2).unwrap_err() {
            PatternError::TooManySegments {
                segments, limit, ..
            } => {
                assert_eq!(segments, 3);
                assert_eq!(limit, 2);
            }
            other => panic!("expected TooManySegments, got {other:?}"),
        }
    }
}
