//! Kind-set providers for supported host testing frameworks.
//!
//! Each adapter contributes the set of [`FailureKind`]s its framework
//! treats as an expected assertion failure. The guard is written once
//! against [`KindProvider`]; only the kind-set differs per adapter.

use crate::kind::FailureKind;

/// A source of classified failure kinds for one host framework.
///
/// Implementations are queried fresh on every guarded invocation rather
/// than cached at construction, so composed providers always reflect the
/// full chain they wrap.
pub trait KindProvider {
    /// The kinds the active framework treats as expected assertion
    /// failures. Duplicates are harmless for matching purposes.
    fn classified_kinds(&self) -> Vec<FailureKind>;
}

impl<P: KindProvider + ?Sized> KindProvider for &P {
    fn classified_kinds(&self) -> Vec<FailureKind> {
        (**self).classified_kinds()
    }
}

/// Provider for expectation-style harnesses, whose assertions raise
/// expectation-not-met failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecHarness;

impl KindProvider for SpecHarness {
    fn classified_kinds(&self) -> Vec<FailureKind> {
        vec![FailureKind::Expectation]
    }
}

/// Provider for assert-style harnesses, whose assertions raise plain
/// assertion failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitHarness;

impl KindProvider for UnitHarness {
    fn classified_kinds(&self) -> Vec<FailureKind> {
        vec![FailureKind::Assertion]
    }
}

/// Extends any base provider with the browser-automation error root.
///
/// Composition is additive: the wrapped provider's kinds are queried at
/// match time and [`FailureKind::Automation`] is unioned in. Wrapping the
/// same provider twice only produces a duplicate kind, which changes
/// nothing about what matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithAutomation<P: KindProvider> {
    base: P,
}

impl<P: KindProvider> WithAutomation<P> {
    /// Wraps a base provider.
    pub fn new(base: P) -> Self {
        Self { base }
    }

    /// The wrapped base provider.
    pub fn base(&self) -> &P {
        &self.base
    }
}

impl<P: KindProvider> KindProvider for WithAutomation<P> {
    fn classified_kinds(&self) -> Vec<FailureKind> {
        let mut kinds = self.base.classified_kinds();
        kinds.push(FailureKind::Automation);
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_harness_kinds() {
        assert_eq!(
            SpecHarness.classified_kinds(),
            vec![FailureKind::Expectation]
        );
    }

    #[test]
    fn test_unit_harness_kinds() {
        assert_eq!(UnitHarness.classified_kinds(), vec![FailureKind::Assertion]);
    }

    #[test]
    fn test_with_automation_unions_base_kinds() {
        let provider = WithAutomation::new(SpecHarness);
        let kinds = provider.classified_kinds();

        assert!(kinds.contains(&FailureKind::Expectation));
        assert!(kinds.contains(&FailureKind::Automation));
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_with_automation_composes_over_any_base() {
        let provider = WithAutomation::new(UnitHarness);
        let kinds = provider.classified_kinds();

        assert!(kinds.contains(&FailureKind::Assertion));
        assert!(kinds.contains(&FailureKind::Automation));
    }

    #[test]
    fn test_double_extension_is_harmless() {
        let provider = WithAutomation::new(WithAutomation::new(SpecHarness));
        let kinds = provider.classified_kinds();

        // Duplicate Automation entries are no-ops for matching.
        assert!(kinds.contains(&FailureKind::Expectation));
        assert_eq!(
            kinds
                .iter()
                .filter(|kind| **kind == FailureKind::Automation)
                .count(),
            2
        );
    }

    #[test]
    fn test_kinds_are_queried_fresh_through_references() {
        let base = SpecHarness;
        let provider = WithAutomation::new(&base);

        assert!(provider
            .classified_kinds()
            .contains(&FailureKind::Expectation));
    }
}
