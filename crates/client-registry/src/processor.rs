// Cross-Cutting Request Processors
// A processor declares which routes it applies to through include/exclude
// path patterns; its request-handling behavior is opaque to this crate.

use tracing::error;

use crate::pattern::PathPattern;

/// A cross-cutting handler bound to routes by path patterns
pub trait ClientProcessor: Send + Sync {
    /// Patterns selecting the routes this processor applies to.
    /// An empty list applies to nothing.
    fn include_patterns(&self) -> Vec<String>;

    /// Patterns revoking a match found through the include list
    fn exclude_patterns(&self) -> Vec<String>;
}

/// Compiled form of a processor's declared patterns
pub struct ProcessorBinding {
    includes: Vec<PathPattern>,
    excludes: Vec<PathPattern>,
}

impl ProcessorBinding {
    /// Compile the processor's declared patterns. Invalid patterns are
    /// logged and dropped; one bad pattern never disables the rest.
    pub fn compile(processor: &dyn ClientProcessor) -> Self {
        Self {
            includes: compile_patterns(processor.include_patterns()),
            excludes: compile_patterns(processor.exclude_patterns()),
        }
    }

    /// Match rule: some include pattern matches some declared path, and no
    /// exclude pattern matches any declared path.
    pub fn matches(&self, declared_paths: &[String]) -> bool {
        if self.includes.is_empty() {
            return false;
        }
        let included = self
            .includes
            .iter()
            .any(|pattern| declared_paths.iter().any(|path| pattern.matches(path)));
        if !included {
            return false;
        }
        let excluded = self
            .excludes
            .iter()
            .any(|pattern| declared_paths.iter().any(|path| pattern.matches(path)));
        !excluded
    }
}

fn compile_patterns(raw: Vec<String>) -> Vec<PathPattern> {
    raw.iter()
        .filter_map(|source| match PathPattern::new(source) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                error!(pattern = %source, error = %e, "invalid path pattern, skipping");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PatternsOnly {
        includes: Vec<String>,
        excludes: Vec<String>,
    }

    impl ClientProcessor for PatternsOnly {
        fn include_patterns(&self) -> Vec<String> {
            self.includes.clone()
        }

        fn exclude_patterns(&self) -> Vec<String> {
            self.excludes.clone()
        }
    }

    fn binding(includes: &[&str], excludes: &[&str]) -> ProcessorBinding {
        ProcessorBinding::compile(&PatternsOnly {
            includes: includes.iter().map(|s| s.to_string()).collect(),
            excludes: excludes.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_include_match() {
        let binding = binding(&["/api/**"], &[]);
        assert!(binding.matches(&paths(&["/api/users/list"])));
        // A route declared at exactly the prefix still matches
        assert!(binding.matches(&paths(&["/api"])));
        assert!(!binding.matches(&paths(&["/internal/metrics"])));
    }

    #[test]
    fn test_exclude_revokes_match() {
        let binding = binding(&["/api/**"], &["/api/admin/**"]);
        assert!(binding.matches(&paths(&["/api/users/list"])));
        assert!(!binding.matches(&paths(&["/api/admin/delete"])));
    }

    #[test]
    fn test_exclude_applies_across_declared_paths() {
        // One excluded path revokes the match even if another path matched
        // an include pattern
        let binding = binding(&["/api/**"], &["/api/admin/**"]);
        assert!(!binding.matches(&paths(&["/api/users/list", "/api/admin/delete"])));
    }

    #[test]
    fn test_empty_includes_never_match() {
        let binding = binding(&[], &[]);
        assert!(!binding.matches(&paths(&["/api/users/list"])));
    }

    #[test]
    fn test_invalid_include_is_dropped_not_fatal() {
        let binding = binding(&["/api/a**b", "/api/**"], &[]);
        assert!(binding.matches(&paths(&["/api/users/list"])));
    }
}
