/// Well-known URI schemes
///
/// Any syntactically valid scheme outside this set classifies as `Unknown`;
/// its text is still available from the scheme piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Ws,
    Ftp,
    Wss,
    File,
    Http,
    Https,
    Mailto,
    #[default]
    Unknown,
}

impl SchemeType {
    /// Check if this is one of the recognized schemes
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Canonical lowercase name, `None` for `Unknown`
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Ws => Some("ws"),
            Self::Ftp => Some("ftp"),
            Self::Wss => Some("wss"),
            Self::File => Some("file"),
            Self::Http => Some("http"),
            Self::Https => Some("https"),
            Self::Mailto => Some("mailto"),
            Self::Unknown => None,
        }
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::Mailto | Self::Unknown => None,
        }
    }
}

impl core::fmt::Display for SchemeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str().unwrap_or("unknown"))
    }
}
