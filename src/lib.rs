//! confidence-check - Classify expected assertion failures in tests
//!
//! A confidence check is a guarded assertion whose failure should be
//! reported distinctly from an ordinary test failure: a pre-condition
//! probe that, when it fails, means the test never got far enough to
//! exercise the assertion under test.
//!
//! [`Guard`] executes a unit of work and consults a [`KindProvider`] for
//! the set of failure kinds the active host framework treats as expected
//! assertion failures. A raised failure whose kind matches (exactly or as
//! a descendant) comes back wrapped as [`ConfidenceCheckFailed`], with its
//! message prefixed and its backtrace and cause delegated untouched to the
//! original. Everything else propagates verbatim.
//!
//! ```
//! use confidence_check::{CheckError, Guard, SpecHarness, WithAutomation};
//!
//! let mut guard = Guard::with_sink(WithAutomation::new(SpecHarness), Vec::<u8>::new());
//!
//! let outcome: Result<(), CheckError<_>> = guard.check(Some(&"login page"), || {
//!     // ... probe a pre-condition, raising a host-framework failure ...
//!     # Err(doctests::element_not_found())
//! });
//!
//! match outcome {
//!     Err(CheckError::CheckFailed(failed)) => {
//!         assert!(failed.message().starts_with("CONFIDENCE CHECK FAILED: "));
//!     }
//!     other => panic!("expected a classified failure, got {other:?}"),
//! }
//! #
//! # mod doctests {
//! #     use confidence_check::{Failure, FailureKind};
//! #     use std::backtrace::Backtrace;
//! #     #[derive(Debug)]
//! #     pub struct NotFound(Backtrace);
//! #     impl std::fmt::Display for NotFound {
//! #         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//! #             write!(f, "element not found")
//! #         }
//! #     }
//! #     impl std::error::Error for NotFound {}
//! #     impl Failure for NotFound {
//! #         fn kind(&self) -> FailureKind { FailureKind::ElementNotFound }
//! #         fn trace(&self) -> &Backtrace { &self.0 }
//! #     }
//! #     pub fn element_not_found() -> NotFound { NotFound(Backtrace::capture()) }
//! # }
//! ```

pub mod adapters;
pub mod failure;
pub mod guard;
pub mod kind;
pub mod logging;

// Re-export main types for convenient access
pub use adapters::{KindProvider, SpecHarness, UnitHarness, WithAutomation};
pub use failure::{CheckError, ConfidenceCheckFailed, Failure, FAILED_PREFIX};
pub use guard::Guard;
pub use kind::FailureKind;
