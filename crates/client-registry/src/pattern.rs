// Ant-Style Path Patterns
// `*` matches within one path segment, `**` across segments, `?` one
// non-separator character. Backed by glob with literal separators
// required, which yields exactly these semantics over request paths.

use glob::{MatchOptions, Pattern};
use relaykit_core::{AppError, Result};

fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

/// A compiled request-path pattern
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    compiled: Pattern,
    /// A trailing `/**` also matches the prefix itself (zero segments),
    /// which glob alone does not cover
    zero_segment: Option<Pattern>,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern)
            .map_err(|e| AppError::Pattern(format!("{pattern}: {e}")))?;
        let zero_segment = match pattern.strip_suffix("/**") {
            Some(prefix) if !prefix.is_empty() => Some(
                Pattern::new(prefix).map_err(|e| AppError::Pattern(format!("{prefix}: {e}")))?,
            ),
            _ => None,
        };
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
            zero_segment,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.compiled.matches_with(path, match_options()) {
            return true;
        }
        self.zero_segment
            .as_ref()
            .map_or(false, |prefix| prefix.matches_with(path, match_options()))
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_star_crosses_segments() {
        let pattern = PathPattern::new("/api/**").unwrap();
        assert!(pattern.matches("/api/v1/users"));
        assert!(pattern.matches("/api/v1"));
    }

    #[test]
    fn test_double_star_matches_zero_segments() {
        let pattern = PathPattern::new("/api/**").unwrap();
        assert!(pattern.matches("/api"));
        assert!(!pattern.matches("/apix"));

        // The stripped prefix keeps its own wildcards
        let pattern = PathPattern::new("/api/*/files/**").unwrap();
        assert!(pattern.matches("/api/v1/files"));
        assert!(pattern.matches("/api/v1/files/archive/2026"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        let pattern = PathPattern::new("/api/*").unwrap();
        assert!(pattern.matches("/api/v1"));
        assert!(!pattern.matches("/api/v1/users"));
    }

    #[test]
    fn test_question_mark_single_character() {
        let pattern = PathPattern::new("/api/v?").unwrap();
        assert!(pattern.matches("/api/v1"));
        assert!(pattern.matches("/api/v2"));
        assert!(!pattern.matches("/api/v10"));
        assert!(!pattern.matches("/api/v1/users"));
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::new("/health").unwrap();
        assert!(pattern.matches("/health"));
        assert!(!pattern.matches("/healthz"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = PathPattern::new("/api/a**b");
        assert!(matches!(result, Err(AppError::Pattern(_))));
    }
}
