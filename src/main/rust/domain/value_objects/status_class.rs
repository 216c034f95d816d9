use std::fmt;

/// Classification of a non-200 response from the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 302
    Redirect,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 429, retried after the back-off period
    RateLimited,
    /// 500
    InternalServerError,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Anything outside the table
    Unexpected(u16),
}

impl StatusClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            302 => Self::Redirect,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            other => Self::Unexpected(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Redirect => 302,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::RateLimited => 429,
            Self::InternalServerError => 500,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::Unexpected(code) => *code,
        }
    }

    /// Human-readable cause logged alongside the status code
    pub fn message(&self) -> String {
        match self {
            Self::Redirect => {
                "Redirect: the resource has moved temporarily. Check the new URL in the response headers.".to_string()
            }
            Self::Unauthorized => "Unauthorized. Check your API key.".to_string(),
            Self::Forbidden => "Forbidden. Check access rights or your API key.".to_string(),
            Self::NotFound => "Resource not found. Check the URL.".to_string(),
            Self::RateLimited => "Too many requests. Retrying after the back-off period.".to_string(),
            Self::InternalServerError => "Server error. Try again later.".to_string(),
            Self::BadGateway => "Bad gateway. Try again later.".to_string(),
            Self::ServiceUnavailable => "Service temporarily unavailable. Try again later.".to_string(),
            Self::GatewayTimeout => "Gateway timeout. Try again later.".to_string(),
            Self::Unexpected(code) => {
                format!("Unexpected status code: {}. Check the library version.", code)
            }
        }
    }

    /// Only throttling is retried within the same tick
    pub fn is_throttled(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            Self::InternalServerError
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::GatewayTimeout
        )
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.code(), self.message())
    }
}
