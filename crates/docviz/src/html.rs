//! HTML embedding for rendered artifacts.
//!
//! Thin adapter between the core pipeline and a host documentation tool:
//! the host hands over one tagged fragment per embedded block and splices
//! the returned `<img>` markup into its generated output.

use std::hash::Hash;

use crate::extract::extract;
use crate::render::Renderer;
use crate::store::{ArtifactStore, StoreError};

/// Escape a string for use in an HTML attribute value.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate an `<img>` tag referencing a rendered artifact.
///
/// `src` is used as-is apart from attribute escaping; hosts that serve
/// artifacts from elsewhere prepend their own path prefix first.
#[must_use]
pub fn img_tag(title: &str, src: &str) -> String {
    format!(
        r#"<img title="{}" src="{}">"#,
        escape_attr(title),
        escape_attr(src)
    )
}

/// Render the block for `anchor` (or reuse it) and return its `<img>` markup.
///
/// This is the whole host-facing surface: one call per embedded block
/// encountered during a documentation pass.
///
/// # Errors
///
/// Propagates [`StoreError`] from the pipeline.
pub fn embed_tag<A: Eq + Hash + Clone, R: Renderer + ?Sized>(
    store: &mut ArtifactStore<A>,
    anchor: A,
    raw: &str,
    scope: &str,
    renderer: &R,
) -> Result<String, StoreError> {
    let title = extract(raw)?.title;
    let artifact = store.render_or_reuse(anchor, raw, scope, renderer)?;
    Ok(img_tag(&title, artifact.as_str()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::render::{OutputFormat, RenderError};

    use super::*;

    struct StubRenderer;

    impl Renderer for StubRenderer {
        fn render(&self, _source: &str, _format: OutputFormat) -> Result<Vec<u8>, RenderError> {
            Ok(vec![0])
        }
    }

    #[test]
    fn test_img_tag() {
        assert_eq!(
            img_tag("test", "pkg/graphviz1.png"),
            r#"<img title="test" src="pkg/graphviz1.png">"#
        );
    }

    #[test]
    fn test_img_tag_escapes_title() {
        assert_eq!(
            img_tag(r#"a<b>&"c""#, "x.png"),
            r#"<img title="a&lt;b&gt;&amp;&quot;c&quot;" src="x.png">"#
        );
    }

    #[test]
    fn test_embed_tag() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ArtifactStore::new(dir.path());

        let tag = embed_tag(
            &mut store,
            "anchor",
            "{@graphviz\ngraph test {\na -- b\n}\n}",
            "pkg",
            &StubRenderer,
        )
        .unwrap();

        assert_eq!(tag, r#"<img title="test" src="pkg/graphviz1.png">"#);
    }

    #[test]
    fn test_embed_tag_untitled_block() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ArtifactStore::new(dir.path());

        let tag = embed_tag(
            &mut store,
            "anchor",
            "{@graphviz\nb -- c\n}",
            "pkg",
            &StubRenderer,
        )
        .unwrap();

        assert_eq!(tag, r#"<img title="" src="pkg/graphviz1.png">"#);
    }

    #[test]
    fn test_embed_tag_reuse_keeps_markup_stable() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ArtifactStore::new(dir.path());
        let raw = "{@graphviz\ngraph g {\na -- b\n}\n}";

        let first = embed_tag(&mut store, "anchor", raw, "pkg", &StubRenderer).unwrap();
        let second = embed_tag(&mut store, "anchor", raw, "pkg", &StubRenderer).unwrap();

        assert_eq!(first, second);
    }
}
