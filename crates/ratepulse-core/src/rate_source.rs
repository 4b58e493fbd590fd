//! Acquisition strategy contract.
//!
//! One `RateSource` per country at most; a country with no registered source
//! always resolves from fallback data. Every failure mode a strategy can hit
//! (missing credential, transport error, bad status, malformed payload,
//! unimplemented parser) is a typed [`SourceError`]; strategies never panic
//! and never swallow a failure invisibly. What a failure *means* is decided
//! by the resolver, not here.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{RateObservation, SourceId};

/// Strategy-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    MissingCredential,
    Unavailable,
    Malformed,
    NotImplemented,
}

/// Structured strategy error consumed by the resolver's fallback cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn missing_credential(name: &str) -> Self {
        Self {
            kind: SourceErrorKind::MissingCredential,
            message: format!("credential '{name}' is not configured"),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Malformed,
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NotImplemented,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::MissingCredential => "source.missing_credential",
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Malformed => "source.malformed",
            SourceErrorKind::NotImplemented => "source.not_implemented",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Live acquisition strategy for one country.
///
/// Implementations must be `Send + Sync`; the pipeline holds them behind
/// `Arc<dyn RateSource>` in the registry.
pub trait RateSource: Send + Sync {
    /// Identifier for logging and provenance tagging.
    fn id(&self) -> SourceId;

    /// Fetches the most recent observation from the upstream source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the credential is missing, the upstream
    /// is unreachable or returns a bad status, the payload cannot be parsed,
    /// or the parser for this source is not implemented yet.
    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            SourceError::missing_credential("FRED_API_KEY").code(),
            "source.missing_credential"
        );
        assert_eq!(
            SourceError::unavailable("status 503").code(),
            "source.unavailable"
        );
        assert_eq!(SourceError::malformed("bad csv").code(), "source.malformed");
        assert_eq!(
            SourceError::not_implemented("no parser").code(),
            "source.not_implemented"
        );
    }

    #[test]
    fn display_includes_message_and_code() {
        let error = SourceError::unavailable("upstream returned status 500");
        assert_eq!(
            error.to_string(),
            "upstream returned status 500 (source.unavailable)"
        );
    }
}
