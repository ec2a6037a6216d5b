use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// When false, patterns and request paths are ASCII-lowercased.
    pub case_sensitive: bool,
    /// Log a warning when a registration replaces an existing handler or
    /// parameter child. The replacement happens either way.
    pub warn_on_overwrite: bool,
    /// Longest pattern accepted and longest path searched, in segments.
    pub max_segments: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            warn_on_overwrite: true,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segments == 0 {
            return Err(RouterOptionsError::MaxSegmentsInvalid {
                provided: self.max_segments,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn warn_on_overwrite(mut self, value: bool) -> Self {
        self.options.warn_on_overwrite = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}
