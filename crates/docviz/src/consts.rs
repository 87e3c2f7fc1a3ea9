//! Internal constants for artifact naming and rendering.

/// Prefix for generated artifact base names (e.g. `graphviz3`).
pub const ARTIFACT_PREFIX: &str = "graphviz";

/// Default timeout for rendering requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
