//! Embedded Graphviz block rendering for documentation generators.
//!
//! This crate lets documentation tooling embed DOT graph descriptions inside
//! tagged fragments (`{@graphviz …}`) and have each block rendered once to an
//! image file, referenced by generated `<img>` markup:
//!
//! - [`extract`]: split a tagged fragment into DOT body and optional title
//! - [`ScopeNamer`]: deterministic per-scope output filenames
//! - [`ArtifactStore`]: at-most-once rendering per documentation anchor
//! - [`Renderer`]: boundary to the external rendering engine, with
//!   [`KrokiRenderer`] as the HTTP implementation
//! - [`html`]: `<img>` tag generation for host tools
//!
//! # Example
//!
//! ```no_run
//! use docviz::{ArtifactStore, KrokiRenderer, html};
//!
//! let renderer = KrokiRenderer::new("https://kroki.io");
//! let mut store = ArtifactStore::new("target/doc");
//!
//! let raw = "{@graphviz\ngraph deps {\na -- b\n}\n}";
//! let tag = html::embed_tag(&mut store, "my.pkg.MyType", raw, "my.pkg", &renderer)?;
//! assert_eq!(tag, r#"<img title="deps" src="my/pkg/graphviz1.png">"#);
//! # Ok::<(), docviz::StoreError>(())
//! ```

mod consts;
mod extract;
pub mod html;
mod names;
mod render;
mod store;

pub use extract::{EmbeddedBlock, ExtractError, extract};
pub use names::{ScopeNamer, scope_path};
pub use render::{KrokiRenderer, OutputFormat, RenderError, Renderer, png_dimensions};
pub use store::{ArtifactRef, ArtifactStore, StoreError};
