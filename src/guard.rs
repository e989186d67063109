//! Guarded execution of confidence-checked work units.
//!
//! [`Guard`] runs a unit of work and classifies whatever it raises against
//! the active kind-set: matched failures come back wrapped as
//! [`ConfidenceCheckFailed`], everything else propagates verbatim. The
//! optional context value is written to the diagnostic sink exactly once,
//! before either outcome.

use std::fmt;
use std::future::Future;
use std::io::{self, Write};

use tracing::debug;

use crate::adapters::KindProvider;
use crate::failure::{CheckError, ConfidenceCheckFailed, Failure};

/// Executes work units under a confidence check.
///
/// The provider supplies the kind-set; the sink receives the context value
/// of failing invocations. The sink defaults to stdout, matching where host
/// harnesses print their own diagnostics, and can be injected for capture.
#[derive(Debug)]
pub struct Guard<P, S = io::Stdout> {
    provider: P,
    sink: S,
}

impl<P: KindProvider> Guard<P> {
    /// Creates a guard writing context diagnostics to stdout.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            sink: io::stdout(),
        }
    }
}

impl<P: KindProvider, S: Write> Guard<P, S> {
    /// Creates a guard writing context diagnostics to `sink`.
    pub fn with_sink(provider: P, sink: S) -> Self {
        Self { provider, sink }
    }

    /// The active kind-set provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Consumes the guard, returning the sink. Useful for inspecting
    /// captured diagnostics after a run.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs a unit of work, classifying any raised failure.
    ///
    /// `work` is mandatory: passing `None` fails with
    /// [`CheckError::MissingWork`] before anything executes. A successful
    /// work unit returns its value untouched with no side effects. A
    /// failing one has its error matched against the provider's kind-set
    /// (exact kind or descendant): matches are wrapped as
    /// [`ConfidenceCheckFailed`], everything else comes back as
    /// [`CheckError::Unclassified`] holding the identical value.
    ///
    /// When `context` is present it is written to the sink as its `Debug`
    /// rendering, exactly once, on every failing path including
    /// `MissingWork`. Successful runs write nothing.
    pub fn run<T, E, W>(
        &mut self,
        context: Option<&dyn fmt::Debug>,
        work: Option<W>,
    ) -> Result<T, CheckError<E>>
    where
        E: Failure,
        W: FnOnce() -> Result<T, E>,
    {
        let Some(work) = work else {
            self.emit_context(context);
            return Err(CheckError::MissingWork);
        };

        match work() {
            Ok(value) => Ok(value),
            Err(raised) => Err(self.classify(context, raised)),
        }
    }

    /// Runs a mandatory unit of work. Equivalent to [`Self::run`] with
    /// `Some(work)`; the usage-error path is unreachable from here.
    pub fn check<T, E, W>(
        &mut self,
        context: Option<&dyn fmt::Debug>,
        work: W,
    ) -> Result<T, CheckError<E>>
    where
        E: Failure,
        W: FnOnce() -> Result<T, E>,
    {
        self.run(context, Some(work))
    }

    /// Runs an asynchronous unit of work, classifying its settled error.
    ///
    /// The guard introduces no suspension points of its own: the future is
    /// awaited to completion on the caller's task and only the final error
    /// is classified, with the same semantics as [`Self::run`].
    pub async fn run_async<T, E, F>(
        &mut self,
        context: Option<&dyn fmt::Debug>,
        work: Option<F>,
    ) -> Result<T, CheckError<E>>
    where
        E: Failure,
        F: Future<Output = Result<T, E>>,
    {
        let Some(work) = work else {
            self.emit_context(context);
            return Err(CheckError::MissingWork);
        };

        match work.await {
            Ok(value) => Ok(value),
            Err(raised) => Err(self.classify(context, raised)),
        }
    }

    fn classify<E: Failure>(
        &mut self,
        context: Option<&dyn fmt::Debug>,
        raised: E,
    ) -> CheckError<E> {
        // Queried per invocation so composed providers are never stale.
        let kinds = self.provider.classified_kinds();
        self.emit_context(context);

        let matched = kinds.iter().any(|kind| raised.kind().is_a(*kind));
        debug!(kind = ?raised.kind(), matched, "classified raised failure");

        if matched {
            CheckError::CheckFailed(ConfidenceCheckFailed::new(raised))
        } else {
            CheckError::Unclassified(raised)
        }
    }

    fn emit_context(&mut self, context: Option<&dyn fmt::Debug>) {
        if let Some(context) = context {
            // A sink write failure must not alter the classification
            // outcome.
            let _ = writeln!(self.sink, "{context:?}");
        }
    }
}
