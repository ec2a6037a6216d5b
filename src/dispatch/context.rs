use serde::Serialize;

use crate::enums::HttpMethod;
use crate::matcher::Params;

pub const CONTENT_TYPE: &str = "content-type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Buffered response written by handlers. The transport layer turns it into
/// the actual HTTP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Request/response pair handed to handlers and middleware.
#[derive(Debug, Clone)]
pub struct Context {
    method: HttpMethod,
    path: String,
    params: Params,
    body: Vec<u8>,
    response: Response,
}

impl Context {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            body: Vec::new(),
            response: Response::default(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    #[inline]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn is(&self, method: HttpMethod) -> bool {
        self.method == method
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.response.status = status;
    }

    /// Sets `name`, replacing any value already present under it.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .response
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some(slot) => slot.1 = value,
            None => self.response.headers.push((name, value)),
        }
    }

    pub fn write(&mut self, bytes: impl AsRef<[u8]>) {
        self.response.body.extend_from_slice(bytes.as_ref());
    }

    pub fn clear_body(&mut self) {
        self.response.body.clear();
    }

    /// Replaces the response body with `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), serde_json::Error> {
        let encoded = serde_json::to_vec(value)?;
        self.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.response.body = encoded;
        Ok(())
    }
}
