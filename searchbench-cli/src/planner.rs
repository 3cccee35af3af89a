//! Algorithm Planner
//!
//! Narrows the registry to the algorithms a run should measure.
//!
//! Selection options:
//! - Explicit list (`--algorithms a,b`): exactly those, in the listed order
//! - Regex pattern matched against display name or id
//!
//! Without an explicit list, registry order is kept. The regex is applied after
//! the explicit list, so both can be combined.

use regex::Regex;
use searchbench_core::{AlgorithmRegistry, BenchError};

/// Build the registry for one run from `registry`
pub fn build_plan(
    registry: AlgorithmRegistry,
    filter: Option<&Regex>,
    algorithms: &[String],
) -> Result<AlgorithmRegistry, BenchError> {
    let registry = if algorithms.is_empty() {
        registry
    } else {
        registry.select(algorithms)?
    };

    Ok(match filter {
        Some(re) => registry.retain(|e| re.is_match(e.name()) || re.is_match(e.strategy().id())),
        None => registry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter() {
        let plan = build_plan(AlgorithmRegistry::standard(), None, &[]).unwrap();
        assert_eq!(plan.names(), AlgorithmRegistry::standard().names());
    }

    #[test]
    fn test_regex_keeps_registry_order() {
        let re = Regex::new("(?i)^(ternary|linear|jump)").unwrap();
        let plan = build_plan(AlgorithmRegistry::standard(), Some(&re), &[]).unwrap();
        assert_eq!(
            plan.names(),
            vec!["Linear Search", "Jump Search", "Ternary Search"]
        );
    }

    #[test]
    fn test_explicit_list_order() {
        let list = vec!["interpolation".to_string(), "Binary Search".to_string()];
        let plan = build_plan(AlgorithmRegistry::standard(), None, &list).unwrap();
        assert_eq!(plan.names(), vec!["Interpolation Search", "Binary Search"]);
    }

    #[test]
    fn test_list_then_regex() {
        let list = vec!["ternary".to_string(), "binary".to_string(), "linear".to_string()];
        let re = Regex::new("ar").unwrap();
        let plan = build_plan(AlgorithmRegistry::standard(), Some(&re), &list).unwrap();
        assert_eq!(plan.names(), vec!["Ternary Search", "Binary Search", "Linear Search"]);

        let re = Regex::new("^binary$").unwrap();
        let plan = build_plan(AlgorithmRegistry::standard(), Some(&re), &list).unwrap();
        assert_eq!(plan.names(), vec!["Binary Search"]);
    }

    #[test]
    fn test_unknown_algorithm() {
        let list = vec!["quantum".to_string()];
        let err = build_plan(AlgorithmRegistry::standard(), None, &list).unwrap_err();
        assert_eq!(err, BenchError::UnknownAlgorithm("quantum".to_string()));
    }

    #[test]
    fn test_filter_can_empty_plan() {
        let re = Regex::new("bogosort").unwrap();
        let plan = build_plan(AlgorithmRegistry::standard(), Some(&re), &[]).unwrap();
        assert!(plan.is_empty());
    }
}
