//! Field validation verdicts
//!
//! A verdict is what a form field check reports back to the user. It is
//! never an error in the Rust sense: a job can be saved with fields that
//! failed validation.

use serde::Serialize;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Verdict {
    /// The value checks out
    Ok,
    /// The value is usable but suspicious
    Warning(String),
    /// The value is wrong
    Error(String),
}

impl Verdict {
    /// Create a warning verdict
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning(message.into())
    }

    /// Create an error verdict
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Whether this verdict is `Ok`
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether this verdict is an error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The attached message, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Warning(m) | Self::Error(m) => Some(m),
        }
    }

    /// Rank used to pick the worst of several verdicts
    const fn rank(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning(_) => 1,
            Self::Error(_) => 2,
        }
    }

    /// Return the more severe of two verdicts (the first one wins ties)
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning(m) => write!(f, "warning: {m}"),
            Self::Error(m) => write!(f, "error: {m}"),
        }
    }
}
