// Relaykit Client Registry - Route Discovery & Processor Registration
//
// Declared RPC-client endpoints arrive as structured metadata (emitted at
// build time, not reflected at runtime). The resolver turns that metadata
// into an immutable route catalog and registers each cross-cutting
// processor against the routes its include/exclude path patterns match.
// Discovery runs once at startup; the resulting artifacts are shared via
// `Arc` and read concurrently without synchronization.

pub mod catalog;
pub mod metadata;
pub mod pattern;
pub mod processor;
pub mod registry;
pub mod resolver;

pub use catalog::{RouteCatalog, RouteDefinition};
pub use metadata::{
    ClientMetadata, MappingKind, MetadataIndex, MetadataLookup, MethodMapping, MethodMetadata,
    MAPPING_PRIORITY, REMOTE_CLIENT_MARKER,
};
pub use pattern::PathPattern;
pub use processor::{ClientProcessor, ProcessorBinding};
pub use registry::ProcessorRegistry;
pub use resolver::{ResolvedRoutes, RouteResolver};
