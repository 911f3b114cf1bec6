// Route Resolver
// Single-pass, run-to-completion startup discovery. Per-type and per-name
// failures are isolated and logged; the scan itself never aborts.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::catalog::{RouteCatalog, RouteDefinition};
use crate::metadata::{ClientMetadata, MetadataLookup};
use crate::processor::{ClientProcessor, ProcessorBinding};
use crate::registry::ProcessorRegistry;

/// Everything discovery produces: the route catalog and the populated
/// processor registry. Wrap in `Arc` before handing to request threads.
pub struct ResolvedRoutes {
    pub catalog: RouteCatalog,
    pub registry: ProcessorRegistry,
}

/// Discovers route definitions from client metadata and registers matching
/// processors against them
pub struct RouteResolver {
    server: String,
}

impl RouteResolver {
    /// `server` identifies the service declaring the clients (carried on
    /// the resulting catalog)
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    /// Run discovery over `candidates` plus the `extra_type_names`
    /// extension list, registering every processor whose patterns match.
    ///
    /// Extension names are resolved through `lookup`; a name that cannot
    /// be resolved is logged and skipped without affecting the rest.
    pub fn resolve(
        &self,
        candidates: &[ClientMetadata],
        extra_type_names: &[String],
        lookup: &dyn MetadataLookup,
        processors: &[Arc<dyn ClientProcessor>],
    ) -> ResolvedRoutes {
        let bindings: Vec<(Arc<dyn ClientProcessor>, ProcessorBinding)> = processors
            .iter()
            .map(|processor| (processor.clone(), ProcessorBinding::compile(processor.as_ref())))
            .collect();

        let mut routes: HashMap<String, RouteDefinition> = HashMap::new();
        let mut registry = ProcessorRegistry::default();

        for meta in candidates {
            self.resolve_client(meta, &bindings, &mut routes, &mut registry);
        }

        for type_name in extra_type_names {
            let Some(meta) = lookup.find(type_name) else {
                error!(type_name = %type_name, "extension type not found, skipping");
                continue;
            };
            self.resolve_client(&meta, &bindings, &mut routes, &mut registry);
        }

        debug!(
            server = %self.server,
            routes = routes.len(),
            registered_keys = registry.len(),
            "client route discovery complete"
        );

        ResolvedRoutes {
            catalog: RouteCatalog::new(self.server.clone(), routes),
            registry,
        }
    }

    fn resolve_client(
        &self,
        meta: &ClientMetadata,
        bindings: &[(Arc<dyn ClientProcessor>, ProcessorBinding)],
        routes: &mut HashMap<String, RouteDefinition>,
        registry: &mut ProcessorRegistry,
    ) {
        if !meta.is_remote_client() {
            trace!(type_name = %meta.type_name, "not a remote client, skipping");
            return;
        }

        for method in &meta.methods {
            // Not a remote-call endpoint without a verb mapping
            let Some(mapping) = method.primary_mapping() else {
                continue;
            };

            let definition = RouteDefinition {
                method: method.name.clone(),
                full_path: meta.type_name.clone(),
                declaring_type: meta.simple_name().to_string(),
            };

            for (processor, binding) in bindings {
                if binding.matches(&mapping.paths) {
                    registry.register(
                        ProcessorRegistry::key(&definition.full_path, &definition.method),
                        processor.clone(),
                    );
                }
            }

            // Keyed by method name; last write wins on duplicates
            routes.insert(method.name.clone(), definition);
        }
    }
}
