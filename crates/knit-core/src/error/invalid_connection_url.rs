use crate::Error;

/// A connection URL that cannot be opened.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    url: Box<str>,
    problem: Problem,
}

#[derive(Debug)]
enum Problem {
    /// The URL did not parse, or the driver rejected its contents
    Malformed(Box<str>),

    /// No driver is registered for the scheme
    UnsupportedScheme(Box<str>),
}

impl Error {
    /// `url` could not be used; `reason` says why.
    pub fn invalid_connection_url(url: &str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            url: url.into(),
            problem: Problem::Malformed(reason.into().into()),
        }))
    }

    /// No driver handles the scheme of `url`.
    pub fn unsupported_scheme(url: &str, scheme: &str) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            url: url.into(),
            problem: Problem::UnsupportedScheme(scheme.into()),
        }))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }

    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
                problem: Problem::UnsupportedScheme(_),
                ..
            })
        )
    }
}

impl std::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            Problem::Malformed(reason) => {
                write!(f, "invalid connection URL: {reason}; url={}", self.url)
            }
            Problem::UnsupportedScheme(scheme) => {
                write!(f, "unsupported database; scheme={scheme}; url={}", self.url)
            }
        }
    }
}
