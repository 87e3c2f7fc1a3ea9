//! Artifact store: at-most-once rendering per documentation anchor.
//!
//! The store memoizes one rendered artifact per anchor for the lifetime of a
//! documentation run. A miss runs the full pipeline: extract the block,
//! render its body, name the output for the anchor's scope, and write the
//! bytes under the output root.

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::path::PathBuf;

use crate::extract::{ExtractError, extract};
use crate::names::{ScopeNamer, scope_path};
use crate::render::{OutputFormat, RenderError, Renderer};

/// Reference to one rendered artifact, as a `/`-separated path relative to
/// the output root. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    /// The relative path, e.g. `a/b/graphviz1.png`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error from the render-or-reuse pipeline.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Malformed(#[from] ExtractError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Memoizes one rendered artifact per anchor.
///
/// Anchors are opaque to the store; anything hashable works. Entries are
/// never evicted or updated, so each anchor is rendered at most once per
/// store lifetime. The store is synchronous and takes `&mut self`; hosts
/// invoking it from multiple threads must synchronize externally.
#[derive(Debug)]
pub struct ArtifactStore<A> {
    output_root: PathBuf,
    format: OutputFormat,
    namer: ScopeNamer,
    artifacts: HashMap<A, ArtifactRef>,
}

impl<A: Eq + Hash + Clone> ArtifactStore<A> {
    /// Create an empty store writing PNG artifacts under `output_root`.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self::with_format(output_root, OutputFormat::default())
    }

    /// Create an empty store with an explicit output format.
    #[must_use]
    pub fn with_format(output_root: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_root: output_root.into(),
            format,
            namer: ScopeNamer::new(),
            artifacts: HashMap::new(),
        }
    }

    /// Return the artifact for `anchor`, rendering it on first use.
    ///
    /// A hit returns the stored reference without touching the renderer. A
    /// miss extracts `raw`, renders the body, names the output within
    /// `scope`, and writes the bytes to
    /// `<output_root>/<scope-as-path>/<name>.<ext>`. Nothing is cached on
    /// failure, so the next call for the same anchor renders again.
    ///
    /// # Errors
    ///
    /// [`StoreError::Malformed`] for a fragment without the wrapper shape,
    /// [`StoreError::Render`] when the engine fails, [`StoreError::Io`] when
    /// the artifact cannot be written.
    pub fn render_or_reuse<R: Renderer + ?Sized>(
        &mut self,
        anchor: A,
        raw: &str,
        scope: &str,
        renderer: &R,
    ) -> Result<ArtifactRef, StoreError> {
        if let Some(artifact) = self.artifacts.get(&anchor) {
            tracing::debug!(artifact = %artifact, "Reusing rendered artifact");
            return Ok(artifact.clone());
        }

        let block = extract(raw)?;
        let data = renderer.render(&block.body, self.format)?;

        let base = self.namer.next(scope);
        let filename = format!("{base}.{}", self.format.as_str());

        let dir = self.output_root.join(scope_path(scope));
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&filename), &data)?;

        let relative = if scope.is_empty() {
            filename
        } else {
            format!("{}/{filename}", scope.replace('.', "/"))
        };
        let artifact = ArtifactRef(relative);
        tracing::debug!(scope = %scope, artifact = %artifact, "Rendered artifact");
        self.artifacts.insert(anchor, artifact.clone());
        Ok(artifact)
    }
}
