//! Static suite/case descriptors and the per-suite case registry.

use crate::{context::Context, record::Location, signal::CaseResult};

/// The body of a test case.
pub type CaseFn = fn(&mut Context<'_>) -> CaseResult;

/// A setup or teardown hook of a suite.
pub type HookFn = fn();

/// Metadata of a declared test case.
///
/// The identity of a case is its runnable body; descriptors with the same
/// body compare as the same case no matter how often they are registered.
#[derive(Debug)]
pub struct CaseDesc {
    pub name: &'static str,
    pub location: Location,
    pub body: CaseFn,
}

/// The static registration unit of one suite: its name, optional hooks and
/// declared cases, in declaration order.
#[derive(Debug)]
pub struct SuiteDesc {
    pub name: &'static str,
    pub location: Location,
    pub setup: Option<HookFn>,
    pub teardown: Option<HookFn>,
    pub cases: &'static [CaseDesc],
}

/// Ordered, duplicate-free collection of the cases declared for one suite.
///
/// Append-only; there is no removal operation.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    cases: Vec<&'static CaseDesc>,
}

impl CaseRegistry {
    /// Insert `case` unless a descriptor with the same body is already
    /// registered. Re-registration is a silent no-op.
    pub fn register(&mut self, case: &'static CaseDesc) {
        let identity = case.body as usize;
        if self.cases.iter().any(|existing| existing.body as usize == identity) {
            log::trace!("collapsed duplicate registration of case {}", case.name);
            return;
        }
        self.cases.push(case);
    }

    /// The registered descriptors, in insertion order.
    pub fn all(&self) -> &[&'static CaseDesc] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_a(_: &mut Context<'_>) -> CaseResult {
        Ok(())
    }

    fn body_b(_: &mut Context<'_>) -> CaseResult {
        Ok(())
    }

    const fn desc(name: &'static str, body: CaseFn) -> CaseDesc {
        CaseDesc {
            name,
            location: Location {
                file: file!(),
                line: line!(),
            },
            body,
        }
    }

    static CASE_A: CaseDesc = desc("a", body_a);
    static CASE_A_AGAIN: CaseDesc = desc("a", body_a);
    static CASE_B: CaseDesc = desc("b", body_b);

    #[test]
    fn duplicate_registration_collapses() {
        let mut registry = CaseRegistry::default();
        registry.register(&CASE_A);
        registry.register(&CASE_A);
        registry.register(&CASE_A_AGAIN);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.all()[0].name, "a");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut registry = CaseRegistry::default();
        registry.register(&CASE_B);
        registry.register(&CASE_A);
        let names: Vec<_> = registry.all().iter().map(|case| case.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn empty_registry() {
        let registry = CaseRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
