//! Algorithm Registry
//!
//! Ordered table of named strategies, built explicitly at startup. The order in
//! which strategies are registered is the column order of every sweep row.

use crate::error::{BenchError, Result};
use crate::strategy::{
    BinarySearch, Complexity, ExponentialSearch, InterpolationSearch, JumpSearch, LinearSearch,
    SearchStrategy, TernarySearch,
};
use serde::{Deserialize, Serialize};

/// A strategy together with its display name
pub struct RegisteredStrategy {
    name: String,
    strategy: Box<dyn SearchStrategy>,
}

impl RegisteredStrategy {
    /// Display name, e.g. `"Binary Search"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The strategy itself
    pub fn strategy(&self) -> &dyn SearchStrategy {
        self.strategy.as_ref()
    }

    /// Whether `key` names this entry, by display name or by strategy id
    /// (case-insensitive)
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key) || self.strategy.id().eq_ignore_ascii_case(key)
    }

    /// Column descriptor carried into the sweep table
    pub fn column(&self) -> Column {
        Column {
            name: self.name.clone(),
            id: self.strategy.id().to_string(),
            complexity: self.strategy.complexity(),
        }
    }
}

impl std::fmt::Debug for RegisteredStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredStrategy")
            .field("name", &self.name)
            .field("id", &self.strategy.id())
            .finish()
    }
}

/// Header of one algorithm column in a sweep table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Display name
    pub name: String,
    /// Strategy identifier
    pub id: String,
    /// Theoretical cost class
    pub complexity: Complexity,
}

/// Ordered mapping from display name to search strategy
#[derive(Debug, Default)]
pub struct AlgorithmRegistry {
    entries: Vec<RegisteredStrategy>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all six built-in strategies, from O(n) down to the
    /// logarithmic family
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, Box<dyn SearchStrategy>); 6] = [
            ("Linear Search", Box::new(LinearSearch)),
            ("Binary Search", Box::new(BinarySearch)),
            ("Jump Search", Box::new(JumpSearch)),
            ("Exponential Search", Box::new(ExponentialSearch)),
            ("Interpolation Search", Box::new(InterpolationSearch)),
            ("Ternary Search", Box::new(TernarySearch)),
        ];
        for (name, strategy) in builtins {
            registry.entries.push(RegisteredStrategy {
                name: name.to_string(),
                strategy,
            });
        }
        registry
    }

    /// Append a strategy under `name`
    pub fn register<S: SearchStrategy + 'static>(
        &mut self,
        name: impl Into<String>,
        strategy: S,
    ) -> Result<()> {
        self.register_boxed(name, Box::new(strategy))
    }

    /// Append an already boxed strategy under `name`
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn SearchStrategy>,
    ) -> Result<()> {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(BenchError::DuplicateAlgorithm(name));
        }
        self.entries.push(RegisteredStrategy { name, strategy });
        Ok(())
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredStrategy> {
        self.entries.iter()
    }

    /// Display names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Column descriptors in registration order
    pub fn columns(&self) -> Vec<Column> {
        self.entries.iter().map(RegisteredStrategy::column).collect()
    }

    /// Find an entry by display name or id
    pub fn get(&self, key: &str) -> Option<&RegisteredStrategy> {
        self.entries.iter().find(|e| e.matches(key))
    }

    /// Keep only entries accepted by `keep`, preserving order
    pub fn retain(mut self, mut keep: impl FnMut(&RegisteredStrategy) -> bool) -> Self {
        self.entries.retain(|e| keep(e));
        self
    }

    /// Reorder and narrow the registry to exactly `keys`, in the given order.
    ///
    /// Each key may be a display name or a strategy id.
    pub fn select<K: AsRef<str>>(mut self, keys: &[K]) -> Result<Self> {
        let mut selected = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            match self.entries.iter().position(|e| e.matches(key)) {
                Some(idx) => selected.push(self.entries.remove(idx)),
                None if selected.iter().any(|e: &RegisteredStrategy| e.matches(key)) => {
                    return Err(BenchError::DuplicateAlgorithm(key.to_string()));
                }
                None => return Err(BenchError::UnknownAlgorithm(key.to_string())),
            }
        }
        Ok(Self { entries: selected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysZero;

    impl SearchStrategy for AlwaysZero {
        fn id(&self) -> &'static str {
            "zero"
        }
        fn complexity(&self) -> Complexity {
            Complexity::Constant
        }
        fn search(&self, _haystack: &[i64], _target: i64) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn test_standard_order() {
        let registry = AlgorithmRegistry::standard();
        assert_eq!(
            registry.names(),
            vec![
                "Linear Search",
                "Binary Search",
                "Jump Search",
                "Exponential Search",
                "Interpolation Search",
                "Ternary Search",
            ]
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("Zero", AlwaysZero).unwrap();
        let err = registry.register("Zero", AlwaysZero).unwrap_err();
        assert_eq!(err, BenchError::DuplicateAlgorithm("Zero".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_select_reorders() {
        let registry = AlgorithmRegistry::standard()
            .select(&["ternary", "Linear Search", "JUMP"])
            .unwrap();
        assert_eq!(
            registry.names(),
            vec!["Ternary Search", "Linear Search", "Jump Search"]
        );
    }

    #[test]
    fn test_select_unknown() {
        let err = AlgorithmRegistry::standard().select(&["bogo"]).unwrap_err();
        assert_eq!(err, BenchError::UnknownAlgorithm("bogo".to_string()));
    }

    #[test]
    fn test_select_twice() {
        let err = AlgorithmRegistry::standard()
            .select(&["binary", "Binary Search"])
            .unwrap_err();
        assert!(matches!(err, BenchError::DuplicateAlgorithm(_)));
    }

    #[test]
    fn test_retain_preserves_order() {
        let registry = AlgorithmRegistry::standard()
            .retain(|e| e.strategy().complexity() == Complexity::Logarithmic);
        assert_eq!(
            registry.names(),
            vec!["Binary Search", "Exponential Search", "Ternary Search"]
        );
    }

    #[test]
    fn test_get_by_name_or_id() {
        let registry = AlgorithmRegistry::standard();
        assert_eq!(registry.get("exponential").unwrap().name(), "Exponential Search");
        assert_eq!(registry.get("binary search").unwrap().strategy().id(), "binary");
        assert!(registry.get("bogo").is_none());
    }

    #[test]
    fn test_columns() {
        let columns = AlgorithmRegistry::standard().columns();
        assert_eq!(columns.len(), 6);
        assert_eq!(columns[2].id, "jump");
        assert_eq!(columns[2].complexity, Complexity::SquareRoot);
    }
}
