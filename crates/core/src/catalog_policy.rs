//! What to do with a creation request when the movie catalog cannot answer.
//!
//! A lookup that reaches the catalog and gets "no such movie" always blocks
//! creation. A lookup that never gets an answer (timeout, connection error,
//! 5xx) is resolved by [`CatalogFailurePolicy`].

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

/// Policy name: reject the request as a catalog outage.
pub const POLICY_CLOSED: &str = "closed";

/// Policy name: accept the request without confirming the movie.
pub const POLICY_OPEN: &str = "open";

/// Policy name: treat the outage as if the movie did not exist.
pub const POLICY_NOT_FOUND: &str = "not_found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFailurePolicy {
    /// Fail with [`CoreError::CatalogUnavailable`].
    #[default]
    Closed,
    /// Let the creation proceed; the movie is assumed to exist.
    Open,
    /// Fail with [`CoreError::MovieNotFound`], hiding the outage from callers.
    NotFound,
}

impl CatalogFailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => POLICY_CLOSED,
            Self::Open => POLICY_OPEN,
            Self::NotFound => POLICY_NOT_FOUND,
        }
    }

    /// Resolve an unreachable-catalog lookup for `movie_id` into either
    /// permission to continue (`Ok`) or the error to return.
    pub fn resolve(self, movie_id: DbId, reason: &str) -> Result<(), CoreError> {
        match self {
            Self::Closed => Err(CoreError::CatalogUnavailable(reason.to_string())),
            Self::Open => Ok(()),
            Self::NotFound => Err(CoreError::MovieNotFound { movie_id }),
        }
    }
}

impl fmt::Display for CatalogFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogFailurePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_CLOSED => Ok(Self::Closed),
            POLICY_OPEN => Ok(Self::Open),
            POLICY_NOT_FOUND => Ok(Self::NotFound),
            other => Err(CoreError::Validation(format!(
                "unknown catalog failure policy '{other}' \
                 (expected {POLICY_CLOSED}, {POLICY_OPEN} or {POLICY_NOT_FOUND})"
            ))),
        }
    }
}
