// Processor Registry
// Maps (declaring type full path + method name) to the processors whose
// patterns matched that route. Populated once by the resolver; read-only
// afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::processor::ClientProcessor;

#[derive(Default)]
pub struct ProcessorRegistry {
    entries: HashMap<String, Vec<Arc<dyn ClientProcessor>>>,
}

impl ProcessorRegistry {
    /// Registry key for a route
    pub fn key(full_path: &str, method: &str) -> String {
        format!("{full_path}{method}")
    }

    /// Register a processor under a route key. Registering the same
    /// processor handle twice under one key is a no-op, so repeated
    /// discovery over identical inputs leaves the registry unchanged.
    pub(crate) fn register(&mut self, key: String, processor: Arc<dyn ClientProcessor>) {
        let slot = self.entries.entry(key).or_default();
        if !slot.iter().any(|existing| Arc::ptr_eq(existing, &processor)) {
            slot.push(processor);
        }
    }

    /// Processors registered for a route, in registration order
    pub fn processors(&self, full_path: &str, method: &str) -> &[Arc<dyn ClientProcessor>] {
        self.entries
            .get(&Self::key(full_path, method))
            .map(|slot| slot.as_slice())
            .unwrap_or(&[])
    }

    /// Number of route keys with at least one registered processor
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopProcessor;

    impl ClientProcessor for NoopProcessor {
        fn include_patterns(&self) -> Vec<String> {
            vec!["/api/**".to_string()]
        }

        fn exclude_patterns(&self) -> Vec<String> {
            vec![]
        }
    }

    #[test]
    fn test_register_is_idempotent_per_handle() {
        let mut registry = ProcessorRegistry::default();
        let processor: Arc<dyn ClientProcessor> = Arc::new(NoopProcessor);
        let key = ProcessorRegistry::key("billing::api::InvoiceClient", "list_invoices");

        registry.register(key.clone(), processor.clone());
        registry.register(key, processor);

        assert_eq!(
            registry
                .processors("billing::api::InvoiceClient", "list_invoices")
                .len(),
            1
        );
    }

    #[test]
    fn test_distinct_handles_both_registered() {
        let mut registry = ProcessorRegistry::default();
        let key = ProcessorRegistry::key("billing::api::InvoiceClient", "list_invoices");

        registry.register(key.clone(), Arc::new(NoopProcessor));
        registry.register(key, Arc::new(NoopProcessor));

        assert_eq!(
            registry
                .processors("billing::api::InvoiceClient", "list_invoices")
                .len(),
            2
        );
    }

    #[test]
    fn test_unknown_route_is_empty() {
        let registry = ProcessorRegistry::default();
        assert!(registry.processors("x::Y", "missing").is_empty());
        assert!(registry.is_empty());
    }
}
