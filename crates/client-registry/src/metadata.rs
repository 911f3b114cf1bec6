// Client Metadata Model
// Structured description of declared RPC-client types, supplied at startup
// (e.g. a JSON artifact emitted by the build) instead of discovered by
// runtime reflection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Marker substring identifying a remote-call client type. Substring match,
/// not equality: decorated or derived marker names still qualify.
pub const REMOTE_CLIENT_MARKER: &str = "RemoteClient";

/// HTTP-verb mapping kinds a declared method can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MappingKind {
    Post,
    Get,
    /// Verb-agnostic mapping
    Request,
    Put,
    Patch,
    Delete,
}

/// Fixed disambiguation order when a method carries more than one mapping
pub const MAPPING_PRIORITY: [MappingKind; 6] = [
    MappingKind::Post,
    MappingKind::Get,
    MappingKind::Request,
    MappingKind::Put,
    MappingKind::Patch,
    MappingKind::Delete,
];

impl std::fmt::Display for MappingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingKind::Post => write!(f, "POST"),
            MappingKind::Get => write!(f, "GET"),
            MappingKind::Request => write!(f, "REQUEST"),
            MappingKind::Put => write!(f, "PUT"),
            MappingKind::Patch => write!(f, "PATCH"),
            MappingKind::Delete => write!(f, "DELETE"),
        }
    }
}

/// One declared verb mapping with its request path(s)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMapping {
    pub kind: MappingKind,
    pub paths: Vec<String>,
}

impl MethodMapping {
    pub fn new(kind: MappingKind, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

/// A declared client method and its verb mappings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    pub name: String,
    pub mappings: Vec<MethodMapping>,
}

impl MethodMetadata {
    pub fn new(name: impl Into<String>, mappings: Vec<MethodMapping>) -> Self {
        Self {
            name: name.into(),
            mappings,
        }
    }

    /// The mapping that wins under the fixed priority order, if any.
    /// A method without any verb mapping is not a remote-call endpoint.
    pub fn primary_mapping(&self) -> Option<&MethodMapping> {
        MAPPING_PRIORITY
            .iter()
            .find_map(|kind| self.mappings.iter().find(|m| m.kind == *kind))
    }
}

/// A declared client type: fully-qualified name, its marker names and its
/// public methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub type_name: String,
    pub markers: Vec<String>,
    pub methods: Vec<MethodMetadata>,
}

impl ClientMetadata {
    pub fn new(
        type_name: impl Into<String>,
        markers: impl IntoIterator<Item = impl Into<String>>,
        methods: Vec<MethodMetadata>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            markers: markers.into_iter().map(Into::into).collect(),
            methods,
        }
    }

    /// Eligibility test: any marker containing the fixed substring
    pub fn is_remote_client(&self) -> bool {
        self.markers
            .iter()
            .any(|marker| marker.contains(REMOTE_CLIENT_MARKER))
    }

    /// Last path segment of the fully-qualified type name
    pub fn simple_name(&self) -> &str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.type_name)
    }
}

/// Name lookup for extension types declared outside the candidate set
pub trait MetadataLookup: Send + Sync {
    fn find(&self, type_name: &str) -> Option<ClientMetadata>;
}

/// HashMap-backed lookup over a known metadata set
#[derive(Debug, Default)]
pub struct MetadataIndex {
    by_name: HashMap<String, ClientMetadata>,
}

impl MetadataIndex {
    pub fn new(entries: impl IntoIterator<Item = ClientMetadata>) -> Self {
        Self {
            by_name: entries
                .into_iter()
                .map(|meta| (meta.type_name.clone(), meta))
                .collect(),
        }
    }
}

impl MetadataLookup for MetadataIndex {
    fn find(&self, type_name: &str) -> Option<ClientMetadata> {
        self.by_name.get(type_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_substring_eligibility() {
        let meta = ClientMetadata::new(
            "billing::api::InvoiceClient",
            ["derive(RemoteClient)"],
            vec![],
        );
        assert!(meta.is_remote_client(), "substring match must qualify");

        let meta = ClientMetadata::new("billing::api::InvoiceClient", ["LocalService"], vec![]);
        assert!(!meta.is_remote_client());
    }

    #[test]
    fn test_primary_mapping_priority() {
        // POST beats a verb-agnostic REQUEST mapping regardless of order
        let method = MethodMetadata::new(
            "create_invoice",
            vec![
                MethodMapping::new(MappingKind::Request, ["/invoices"]),
                MethodMapping::new(MappingKind::Post, ["/invoices/create"]),
            ],
        );
        let primary = method.primary_mapping().unwrap();
        assert_eq!(primary.kind, MappingKind::Post);
        assert_eq!(primary.paths, vec!["/invoices/create"]);
    }

    #[test]
    fn test_primary_mapping_all_pairs_ordered() {
        for (i, higher) in MAPPING_PRIORITY.iter().enumerate() {
            for lower in &MAPPING_PRIORITY[i + 1..] {
                let method = MethodMetadata::new(
                    "m",
                    vec![
                        MethodMapping::new(*lower, ["/low"]),
                        MethodMapping::new(*higher, ["/high"]),
                    ],
                );
                assert_eq!(
                    method.primary_mapping().unwrap().kind,
                    *higher,
                    "{higher} must beat {lower}"
                );
            }
        }
    }

    #[test]
    fn test_no_mapping_is_not_an_endpoint() {
        let method = MethodMetadata::new("helper", vec![]);
        assert!(method.primary_mapping().is_none());
    }

    #[test]
    fn test_simple_name() {
        let meta = ClientMetadata::new("billing::api::InvoiceClient", ["RemoteClient"], vec![]);
        assert_eq!(meta.simple_name(), "InvoiceClient");
    }

    #[test]
    fn test_metadata_json_round_trip() {
        let meta = ClientMetadata::new(
            "billing::api::InvoiceClient",
            ["RemoteClient"],
            vec![MethodMetadata::new(
                "list_invoices",
                vec![MethodMapping::new(MappingKind::Get, ["/invoices"])],
            )],
        );
        let json = serde_json::to_string(&meta).unwrap();
        let back: ClientMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_index_lookup() {
        let index = MetadataIndex::new([ClientMetadata::new(
            "billing::api::InvoiceClient",
            ["RemoteClient"],
            vec![],
        )]);
        assert!(index.find("billing::api::InvoiceClient").is_some());
        assert!(index.find("billing::api::MissingClient").is_none());
    }
}
