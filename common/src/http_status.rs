//! HTTP status code utilities for failure reporting.

/// HTTP status code returned by the earthquake feed.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// The only status the feed treats as success.
    pub const OK: HttpStatusCode = HttpStatusCode(200);

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// 4xx client errors (bad query parameters, unknown endpoint).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors (USGS outage or overload).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
