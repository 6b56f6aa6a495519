/// Errors that can occur while splitting a URI or request-target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Empty input, non-alpha first byte, invalid byte in the token, or missing `:`
    BadScheme,
    /// Malformed IPv6 literal host
    BadAuthority,
    /// Literal or structure mismatch for the selected form
    BadSyntax,
    /// A component offset or length does not fit in 16 bits
    ExtentOverflow,
    /// The normalization output buffer is full
    CapacityExhausted,
}

impl ParseError {
    /// Whether the error describes the input text rather than the caller's setup.
    ///
    /// `ExtentOverflow` and `CapacityExhausted` are caused by the sizes the
    /// caller chose and cannot be fixed by editing the text.
    pub fn is_syntax(self) -> bool {
        matches!(self, Self::BadScheme | Self::BadAuthority | Self::BadSyntax)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::BadScheme => "Invalid scheme",
            Self::BadAuthority => "Invalid authority",
            Self::BadSyntax => "Invalid syntax",
            Self::ExtentOverflow => "Input exceeds 65535 bytes",
            Self::CapacityExhausted => "Output buffer capacity exhausted",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
