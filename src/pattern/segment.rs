pub const DYNAMIC_MARKER: char = ':';
pub const WILDCARD_MARKER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Literal,
    Dynamic,
    Wildcard,
}

/// One `/`-delimited piece of a route pattern.
///
/// `raw` is the text as registered; `placeholder` is the capture key, which
/// is `raw` without its marker for parameters and `raw` itself for literals.
/// `key` is what request segments are compared against: `raw`, or its ASCII
/// lowercase form once [`SegmentPattern::fold_case`] ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPattern {
    raw: Box<str>,
    key: Box<str>,
    kind: SegmentKind,
}

impl SegmentPattern {
    pub fn parse(raw: &str) -> Self {
        let kind = match raw.chars().next() {
            Some(DYNAMIC_MARKER) => SegmentKind::Dynamic,
            Some(WILDCARD_MARKER) => SegmentKind::Wildcard,
            _ => SegmentKind::Literal,
        };
        Self {
            raw: raw.into(),
            key: raw.into(),
            kind,
        }
    }

    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lowercases the match key only; `raw` and `placeholder` keep their case.
    pub fn fold_case(&mut self) {
        self.key = self.raw.to_ascii_lowercase().into();
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn placeholder(&self) -> &str {
        match self.kind {
            SegmentKind::Literal => &self.raw,
            // both markers are one byte wide
            SegmentKind::Dynamic | SegmentKind::Wildcard => &self.raw[1..],
        }
    }

    pub fn is_parameter(&self) -> bool {
        self.kind != SegmentKind::Literal
    }
}
