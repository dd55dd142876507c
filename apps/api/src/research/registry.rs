//! Template Registry: the fixed operation → instruction-prefix table.
//!
//! Built once per process from [`OPERATION_TEMPLATES`] and never mutated, so any
//! number of handlers can read it concurrently without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

use crate::research::prompts::{Category, OPERATION_TEMPLATES};

static REGISTRY: LazyLock<TemplateRegistry> =
    LazyLock::new(|| TemplateRegistry::from_table(OPERATION_TEMPLATES));

/// The requested operation key is not in the registry. Carries the key as sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

#[derive(Debug, Clone, Copy)]
struct Template {
    category: Category,
    instruction: &'static str,
}

/// Catalogue row returned to clients listing the available operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub key: &'static str,
    pub category: Category,
}

#[derive(Debug)]
pub struct TemplateRegistry {
    templates: HashMap<&'static str, Template>,
    /// Keys in table order, for stable listings.
    order: Vec<&'static str>,
}

impl TemplateRegistry {
    /// Process-wide registry, initialised on first access.
    pub fn global() -> &'static TemplateRegistry {
        &REGISTRY
    }

    fn from_table(table: &'static [(&'static str, Category, &'static str)]) -> Self {
        let mut templates = HashMap::with_capacity(table.len());
        let mut order = Vec::with_capacity(table.len());

        for &(key, category, instruction) in table {
            if templates
                .insert(key, Template { category, instruction })
                .is_none()
            {
                order.push(key);
            }
        }

        Self { templates, order }
    }

    /// Exact, case-sensitive lookup. No trimming or normalisation is applied.
    pub fn lookup(&self, operation: &str) -> Result<&'static str, UnknownOperation> {
        self.templates
            .get(operation)
            .map(|t| t.instruction)
            .ok_or_else(|| UnknownOperation(operation.to_string()))
    }

    pub fn operations(&self) -> Vec<OperationInfo> {
        self.order
            .iter()
            .filter_map(|&key| {
                self.templates.get(key).map(|t| OperationInfo {
                    key,
                    category: t.category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_every_operation() {
        let registry = TemplateRegistry::global();
        assert_eq!(registry.templates.len(), 35);
        assert_eq!(registry.templates.len(), OPERATION_TEMPLATES.len());
    }

    #[test]
    fn test_lookup_returns_exact_instruction_for_every_key() {
        let registry = TemplateRegistry::global();
        for (key, _, instruction) in OPERATION_TEMPLATES {
            assert_eq!(registry.lookup(key), Ok(*instruction), "key {key}");
        }
    }

    #[test]
    fn test_lookup_summarize() {
        assert_eq!(
            TemplateRegistry::global().lookup("summarize").unwrap(),
            "Provide a clear and concise summary of the following text in a few sentences:\n\n"
        );
    }

    #[test]
    fn test_lookup_unknown_carries_key() {
        let err = TemplateRegistry::global().lookup("bogus_op").unwrap_err();
        assert_eq!(err, UnknownOperation("bogus_op".to_string()));
        assert_eq!(err.to_string(), "Unknown operation: bogus_op");
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_untrimmed() {
        let registry = TemplateRegistry::global();
        assert!(registry.lookup("Summarize").is_err());
        assert!(registry.lookup(" summarize").is_err());
        assert!(registry.lookup("summarize\n").is_err());
        assert!(registry.lookup("").is_err());
    }

    #[test]
    fn test_every_instruction_ends_with_blank_line() {
        for (key, _, instruction) in OPERATION_TEMPLATES {
            assert!(instruction.ends_with(":\n\n"), "key {key}");
        }
    }

    #[test]
    fn test_operations_listed_in_table_order_with_categories() {
        let ops = TemplateRegistry::global().operations();
        assert_eq!(ops.len(), 35);
        assert_eq!(
            ops[0],
            OperationInfo {
                key: "rewrite",
                category: Category::TextEditing
            }
        );
        let last = ops.last().unwrap();
        assert_eq!(last.key, "keyword_density");
        assert_eq!(last.category, Category::AiInsights);
    }

    #[test]
    fn test_category_serializes_as_display_label() {
        let json = serde_json::to_string(&Category::AiInsights).unwrap();
        assert_eq!(json, r#""AI Insights""#);
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    TemplateRegistry::global()
                        .lookup("translate_hindi")
                        .map(str::to_owned)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap().unwrap(),
                "Translate the following text into Hindi:\n\n"
            );
        }
    }
}
