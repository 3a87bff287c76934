//! Label registry - every label accepted so far

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, MutexGuard};
use typemark_core::{Label, TypemarkError, TypemarkResult};

static GLOBAL: OnceLock<Arc<LabelRegistry>> = OnceLock::new();

/// Set of labels registered across factory calls
///
/// Only grows, except through [`LabelRegistry::clear`]. Membership is observable
/// solely through `DuplicateLabel` failures.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    labels: Mutex<HashSet<Label>>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        LabelRegistry::default()
    }

    /// New registry wrapped for sharing between factories
    pub fn shared() -> Arc<Self> {
        Arc::new(LabelRegistry::new())
    }

    /// The process-wide registry, created empty on first use
    pub fn global() -> Arc<LabelRegistry> {
        GLOBAL.get_or_init(LabelRegistry::shared).clone()
    }

    /// Start a registration batch.
    ///
    /// The registry stays locked until the batch is committed or dropped, so
    /// duplicate checks and insertion form one atomic step.
    pub fn begin(&self) -> Registration<'_> {
        Registration {
            labels: self.labels.lock(),
            staged: Vec::new(),
            pending: HashSet::new(),
        }
    }

    /// Register a single label, failing if it is already known
    pub fn register(&self, label: Label) -> TypemarkResult<()> {
        let mut batch = self.begin();
        batch.check(&label)?;
        batch.stage(label);
        batch.commit();
        Ok(())
    }

    /// Empty the registry. Cannot fail.
    pub fn clear(&self) {
        let mut labels = self.labels.lock();
        let cleared = labels.len();
        labels.clear();
        tracing::debug!(cleared, "label registry cleared");
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.labels.lock().len()
    }
}

/// An in-progress registration holding the registry lock
///
/// Staged labels are only inserted on [`Registration::commit`]; dropping the
/// batch leaves the registry untouched.
pub struct Registration<'a> {
    labels: MutexGuard<'a, HashSet<Label>>,
    /// Labels in staging order
    staged: Vec<Label>,
    /// Same labels, for constant-time duplicate checks
    pending: HashSet<Label>,
}

impl Registration<'_> {
    /// Fail with `DuplicateLabel` if the label is registered or already staged
    pub fn check(&self, label: &Label) -> TypemarkResult<()> {
        if self.labels.contains(label) || self.pending.contains(label) {
            return Err(TypemarkError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Queue a label for insertion without checking it
    pub fn stage(&mut self, label: Label) {
        if self.pending.insert(label.clone()) {
            self.staged.push(label);
        }
    }

    /// Number of distinct staged labels
    pub fn staged(&self) -> usize {
        self.staged.len()
    }

    /// Insert all staged labels, in staging order
    pub fn commit(mut self) {
        for label in self.staged.drain(..) {
            tracing::trace!(label = %label, "label registered");
            self.labels.insert(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn label(text: &str) -> Label {
        Label::parse(text).unwrap()
    }

    #[test]
    fn test_register_then_duplicate() {
        let registry = LabelRegistry::new();
        registry.register(label("a")).unwrap();

        let err = registry.register(label("a")).unwrap_err();
        assert_eq!(
            err,
            TypemarkError::DuplicateLabel {
                label: "a".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_allows_reuse() {
        let registry = LabelRegistry::new();
        registry.register(label("a")).unwrap();
        registry.clear();
        assert_eq!(registry.len(), 0);
        assert!(registry.register(label("a")).is_ok());
    }

    #[test]
    fn test_dropped_batch_does_not_mutate() {
        let registry = LabelRegistry::new();
        {
            let mut batch = registry.begin();
            batch.stage(label("x"));
            batch.stage(label("y"));
            assert_eq!(batch.staged(), 2);
        }
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_batch_detects_staged_duplicate() {
        let registry = LabelRegistry::new();
        let mut batch = registry.begin();
        batch.check(&label("x")).unwrap();
        batch.stage(label("x"));
        assert!(batch.check(&label("x")).is_err());
    }

    #[test]
    fn test_large_batch_commits_every_label() {
        let registry = LabelRegistry::new();
        let mut batch = registry.begin();
        for i in 0..10_000 {
            let label = label(&format!("ACTION_{}", i));
            batch.check(&label).unwrap();
            batch.stage(label);
        }
        assert!(batch.check(&label("ACTION_9999")).is_err());

        // Repeated staging is collapsed
        batch.stage(label("ACTION_0"));
        assert_eq!(batch.staged(), 10_000);

        batch.commit();
        assert_eq!(registry.len(), 10_000);
        assert!(registry.register(label("ACTION_5000")).is_err());
    }

    #[test]
    fn test_registries_are_isolated() {
        let first = LabelRegistry::new();
        let second = LabelRegistry::new();
        first.register(label("shared")).unwrap();
        assert!(second.register(label("shared")).is_ok());
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(Arc::ptr_eq(&LabelRegistry::global(), &LabelRegistry::global()));
    }

    #[test]
    fn test_concurrent_registration_admits_one_winner() {
        let registry = LabelRegistry::shared();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register(label("race")).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
    }

    proptest! {
        #[test]
        fn prop_second_registration_always_fails(text in "[A-Za-z_]{1,16}") {
            let registry = LabelRegistry::new();
            prop_assert!(registry.register(label(&text)).is_ok());
            prop_assert!(registry.register(label(&text)).is_err());
        }
    }
}
