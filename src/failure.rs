//! Failure boundary types for confidence checking.
//!
//! This module defines the [`Failure`] trait (the interface boundary to
//! host-framework error hierarchies), the [`ConfidenceCheckFailed`] wrapper
//! raised for classified failures, and the [`CheckError`] union returned by
//! guarded execution.

use std::backtrace::Backtrace;

use thiserror::Error;

use crate::kind::FailureKind;

/// Prefix applied to the message of every wrapped failure.
pub const FAILED_PREFIX: &str = "CONFIDENCE CHECK FAILED: ";

/// An error raised by a unit of work under a confidence check.
///
/// The guard treats raised errors as opaque except for four things: the
/// [`FailureKind`] tag (for matching against a kind-set), the message (via
/// [`std::fmt::Display`]), the captured backtrace, and the causal predecessor
/// (via [`std::error::Error::source`]). Host-framework integrations
/// implement this trait on their boundary error types.
pub trait Failure: std::error::Error + Send + Sync + 'static {
    /// The kind tag used for kind-set matching.
    fn kind(&self) -> FailureKind;

    /// The backtrace captured where the failure was raised.
    fn trace(&self) -> &Backtrace;
}

/// A classified assertion failure: a confidence check did not hold.
///
/// Wraps exactly one raised failure. The message is fixed at construction
/// as [`FAILED_PREFIX`] followed by the original message; [`Self::trace`]
/// and [`Self::cause`] delegate to the original without copying, so
/// diagnostics keep pointing at the original failure site.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConfidenceCheckFailed<E: Failure> {
    /// Fixed-format message, computed once at construction.
    message: String,
    /// The original raised failure.
    #[source]
    source: E,
}

impl<E: Failure> ConfidenceCheckFailed<E> {
    /// Wraps a raised failure, fixing the prefixed message.
    pub fn new(source: E) -> Self {
        Self {
            message: format!("{FAILED_PREFIX}{source}"),
            source,
        }
    }

    /// The prefixed message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original failure's backtrace, exactly as captured.
    pub fn trace(&self) -> &Backtrace {
        self.source.trace()
    }

    /// The original failure's own cause, if any.
    ///
    /// Note this is the cause of the *original* failure, not the original
    /// failure itself; the original is reachable via [`Self::original`] or
    /// [`std::error::Error::source`].
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }

    /// The original raised failure.
    pub fn original(&self) -> &E {
        &self.source
    }

    /// Consumes the wrapper, returning the original raised failure.
    pub fn into_original(self) -> E {
        self.source
    }
}

/// The outcome of a guarded invocation that did not return a value.
#[derive(Debug, Error)]
pub enum CheckError<E: Failure> {
    /// The guard was invoked without a unit of work. Never classified,
    /// never wrapped.
    #[error("a unit of work is required")]
    MissingWork,

    /// The raised failure matched the active kind-set and was wrapped.
    #[error(transparent)]
    CheckFailed(#[from] ConfidenceCheckFailed<E>),

    /// The raised failure did not match the active kind-set and propagates
    /// verbatim.
    #[error(transparent)]
    Unclassified(E),
}

impl<E: Failure> CheckError<E> {
    /// Returns true if the guard was invoked without a unit of work.
    pub fn is_missing_work(&self) -> bool {
        matches!(self, Self::MissingWork)
    }

    /// Returns true if this is a classified (wrapped) failure.
    pub fn is_check_failed(&self) -> bool {
        matches!(self, Self::CheckFailed(_))
    }

    /// Returns true if this is an unclassified failure propagating verbatim.
    pub fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified(_))
    }

    /// The raised failure, whichever branch it took. `None` for
    /// [`CheckError::MissingWork`].
    pub fn raised(&self) -> Option<&E> {
        match self {
            Self::MissingWork => None,
            Self::CheckFailed(wrapped) => Some(wrapped.original()),
            Self::Unclassified(raised) => Some(raised),
        }
    }
}
