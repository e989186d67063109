//! Failure kind taxonomy for host-framework errors.
//!
//! Host testing frameworks and integrations define their error hierarchies
//! outside this crate. At the boundary, each raised error carries one
//! [`FailureKind`] tag, and the tags form a small ancestry tree so that
//! matching against a kind-set is polymorphic: a descendant kind matches
//! any of its ancestors.

use serde::{Deserialize, Serialize};

/// A category of errors raised by a host testing framework or integration.
///
/// This is a closed discriminator set, not an open hierarchy: the guard
/// only needs to know enough about the host frameworks to tell "expected
/// assertion failure" apart from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Expectation-not-met failure from an expectation-style harness.
    Expectation,
    /// Composite failure aggregating several expectation failures.
    MultipleExpectations,
    /// Assertion failure from an assert-style harness.
    Assertion,
    /// Root of a browser-automation driver's error hierarchy.
    Automation,
    /// Element lookup failed in the automation driver.
    ElementNotFound,
    /// Any other runtime error. Never part of a built-in kind-set.
    RuntimeFault,
}

impl FailureKind {
    /// Returns the parent kind in the ancestry tree, if any.
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::MultipleExpectations => Some(Self::Expectation),
            Self::ElementNotFound => Some(Self::Automation),
            Self::Expectation | Self::Assertion | Self::Automation | Self::RuntimeFault => None,
        }
    }

    /// Returns true if this kind is `ancestor` or a descendant of it.
    ///
    /// Kind-set membership uses this relation, so listing a base kind
    /// (e.g. [`FailureKind::Automation`]) also classifies every kind
    /// rooted under it.
    pub fn is_a(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}
