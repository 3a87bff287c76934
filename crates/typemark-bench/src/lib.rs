//! Shared fixtures for the typemark benchmarks

use typemark::{FactoryConfig, TypeFactory, TypeTable, TypemarkResult};

/// Generate `count` distinct action-type style labels
pub fn action_labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}_ACTION_{}", prefix, i)).collect()
}

/// Build a table of `count` labels on a fresh registry
pub fn populated_table(config: FactoryConfig, count: usize) -> TypemarkResult<TypeTable> {
    TypeFactory::isolated(config).create(action_labels("BENCH", count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_unique() {
        let labels = action_labels("X", 100);
        let mut sorted = labels.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), labels.len());
    }

    #[test]
    fn test_populated_table() {
        let table = populated_table(FactoryConfig::strict(), 10).unwrap();
        assert_eq!(table.len(), 10);
        assert!(table.contains("BENCH_ACTION_9"));
    }
}
