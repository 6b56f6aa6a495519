/// Request-target forms (RFC 7230 section 5.3)
///
/// The form is chosen by the caller from the request method and the first
/// byte of the target; the parser never guesses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// `path-abempty [ "?" query ]`, direct requests to an origin server
    Origin,
    /// `absolute-URI`, requests to a proxy
    Absolute,
    /// `authority`, CONNECT requests
    Authority,
    /// `"*"`, server-wide OPTIONS requests
    Asterisk,
}

impl Form {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "origin-form",
            Self::Absolute => "absolute-form",
            Self::Authority => "authority-form",
            Self::Asterisk => "asterisk-form",
        }
    }
}

impl core::fmt::Display for Form {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
