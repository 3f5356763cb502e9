//! Error types for the rsmt-core library.
//!
//! Defines the error enum exposed by the public API, a stable string-code
//! companion enum, and a convenient result alias.

use thiserror::Error;

use crate::geometry::Axis;

/// Stable codes describing [`SmtError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SmtErrorCode {
    /// A coordinate fell outside `[0, grid_size)`.
    InvalidCoord,
    /// `add_pin` was called after `build`.
    AlreadyFinalized,
    /// The MST engine failed to connect every active point.
    Disconnected,
}

impl SmtErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCoord => "SMT_INVALID_COORD",
            Self::AlreadyFinalized => "SMT_ALREADY_FINALIZED",
            Self::Disconnected => "SMT_DISCONNECTED",
        }
    }
}

impl core::fmt::Display for SmtErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by [`crate::Smt`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SmtError {
    /// A pin coordinate fell outside `[0, grid_size)`.
    #[error("{axis} coordinate {value} is outside [0, {grid_size})")]
    InvalidCoord {
        axis: Axis,
        value: usize,
        grid_size: usize,
    },
    /// `add_pin` was called after `build` had already run.
    #[error("add_pin called after build has already finalized this instance")]
    AlreadyFinalized,
    /// The MST engine could not connect every active point.
    ///
    /// This is a structural invariant violation: the candidate edge set is
    /// always a complete graph on the active points, so it is always
    /// connected. The variant exists so the failure is typed rather than
    /// panicking if that invariant is ever broken.
    #[error("mst engine failed to connect all active points")]
    Disconnected,
}

impl SmtError {
    /// Retrieve the stable [`SmtErrorCode`] for this error.
    #[must_use]
    pub const fn code(self) -> SmtErrorCode {
        match self {
            Self::InvalidCoord { .. } => SmtErrorCode::InvalidCoord,
            Self::AlreadyFinalized => SmtErrorCode::AlreadyFinalized,
            Self::Disconnected => SmtErrorCode::Disconnected,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coord_code() {
        let err = SmtError::InvalidCoord {
            axis: Axis::X,
            value: 5,
            grid_size: 5,
        };
        assert_eq!(err.code(), SmtErrorCode::InvalidCoord);
        assert_eq!(err.code().as_str(), "SMT_INVALID_COORD");
    }

    #[test]
    fn already_finalized_code() {
        assert_eq!(
            SmtError::AlreadyFinalized.code(),
            SmtErrorCode::AlreadyFinalized
        );
    }

    #[test]
    fn disconnected_code() {
        assert_eq!(SmtError::Disconnected.code(), SmtErrorCode::Disconnected);
    }
}
