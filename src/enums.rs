use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const HTTP_METHOD_COUNT: usize = 7;

// one slot per method plus the catch-all
pub(crate) const METHOD_SLOT_COUNT: usize = HTTP_METHOD_COUNT + 1;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported http method '{0}'")]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

/// Method key a handler is registered under.
///
/// `Any` is the catch-all slot consulted when a node has no handler for the
/// request's exact method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RouteMethod {
    Only(HttpMethod),
    Any,
}

impl RouteMethod {
    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            RouteMethod::Only(method) => method as usize,
            RouteMethod::Any => HTTP_METHOD_COUNT,
        }
    }
}

impl From<HttpMethod> for RouteMethod {
    fn from(method: HttpMethod) -> Self {
        RouteMethod::Only(method)
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMethod::Only(method) => method.fmt(f),
            RouteMethod::Any => f.write_str("ANY"),
        }
    }
}
