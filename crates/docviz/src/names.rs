//! Deterministic per-scope artifact naming.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::consts::ARTIFACT_PREFIX;

/// Hands out unique artifact base names within each scope.
///
/// Each scope (e.g. a package identifier) keeps its own counter, starting at
/// zero and bumped once per name handed out. Names are unique within a scope
/// for the lifetime of the namer, but not across scopes; callers combine the
/// name with the scope's path to get a globally unique location.
#[derive(Debug, Default)]
pub struct ScopeNamer {
    counters: HashMap<String, u32>,
}

impl ScopeNamer {
    /// Create a namer with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next base name for `scope`, e.g. `graphviz3`.
    ///
    /// The first call for a scope returns `graphviz1`; suffixes are strictly
    /// increasing per scope.
    pub fn next(&mut self, scope: &str) -> String {
        let counter = self.counters.entry(scope.to_owned()).or_insert(0);
        *counter += 1;
        tracing::debug!(scope = %scope, counter = *counter, "Named artifact");
        format!("{ARTIFACT_PREFIX}{counter}")
    }
}

/// Map a dotted scope to a relative directory path (`a.b.c` → `a/b/c`).
///
/// An empty scope maps to the empty path, i.e. the output root itself.
#[must_use]
pub fn scope_path(scope: &str) -> PathBuf {
    if scope.is_empty() {
        return PathBuf::new();
    }
    scope.split('.').collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_starts_at_one() {
        let mut namer = ScopeNamer::new();

        assert_eq!(namer.next("pkg"), "graphviz1");
    }

    #[test]
    fn test_next_strictly_increasing() {
        let mut namer = ScopeNamer::new();

        assert_eq!(namer.next("pkg"), "graphviz1");
        assert_eq!(namer.next("pkg"), "graphviz2");
        assert_eq!(namer.next("pkg"), "graphviz3");
    }

    #[test]
    fn test_scopes_count_independently() {
        let mut namer = ScopeNamer::new();

        namer.next("a");
        namer.next("a");

        assert_eq!(namer.next("b"), "graphviz1");
        assert_eq!(namer.next("a"), "graphviz3");
    }

    #[test]
    fn test_scope_path_dotted() {
        assert_eq!(scope_path("a.b.c"), PathBuf::from("a/b/c"));
    }

    #[test]
    fn test_scope_path_single_segment() {
        assert_eq!(scope_path("pkg"), PathBuf::from("pkg"));
    }

    #[test]
    fn test_scope_path_empty() {
        assert_eq!(scope_path(""), PathBuf::new());
    }
}
