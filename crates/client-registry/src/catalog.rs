// Route Catalog
// Discovered once at startup, immutable afterwards. Callers wrap the
// catalog in `Arc` and read it concurrently without synchronization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Discovered mapping from a declared client method to its owning type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Declared method name
    pub method: String,
    /// Fully-qualified name of the declaring type
    pub full_path: String,
    /// Simple name of the declaring type
    pub declaring_type: String,
}

/// All discovered routes, keyed by method name, plus the owning server
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    server: String,
    routes: HashMap<String, RouteDefinition>,
}

impl RouteCatalog {
    pub(crate) fn new(server: String, routes: HashMap<String, RouteDefinition>) -> Self {
        Self { server, routes }
    }

    /// Identifier of the service these clients were declared by
    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn get(&self, method: &str) -> Option<&RouteDefinition> {
        self.routes.get(method)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDefinition)> {
        self.routes.iter().map(|(name, def)| (name.as_str(), def))
    }
}
