//! Extraction of embedded Graphviz blocks from tagged fragments.
//!
//! A fragment looks like `{@graphviz <dot source>}`, where the DOT source may
//! span multiple lines. Extraction splits the fragment into the verbatim
//! inner body and an optional title taken from the DOT header line.

use std::sync::LazyLock;

use regex::Regex;

/// Wrapper shape: optional leading whitespace, `{@graphviz`, the body
/// (non-greedy, newlines included), a closing `}`, optional trailing
/// whitespace, end of input.
static FULL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*\{\s*@graphviz\s*(.*?)\}\s*$").unwrap());

/// DOT header line: optional `di` prefix, `graph`, an optional name token,
/// whitespace, opening brace. The name token becomes the block title.
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:di)?graph\s*(.*?)\s\{").unwrap());

/// One embedded Graphviz block, split into DOT source and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedBlock {
    /// Verbatim DOT source between the wrapper markers.
    pub body: String,
    /// Graph name from the header line, or empty when the graph is anonymous
    /// or the body has no recognizable header.
    pub title: String,
}

/// Error extracting a block from a tagged fragment.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The fragment does not have the `{@graphviz …}` wrapper shape.
    ///
    /// This signals a caller bug or a malformed document and is never
    /// retried.
    #[error("fragment had not the expected {{@graphviz …}} format: '{fragment}'")]
    Malformed {
        /// The offending fragment, verbatim.
        fragment: String,
    },
}

/// Extract the DOT body and title from one tagged fragment.
///
/// The body is the verbatim inner text of the wrapper, ending at the first
/// `}` from which only whitespace remains to the end of the fragment. A DOT
/// body whose own closing `}` is the last non-whitespace character cannot be
/// told apart from the wrapper's closer; bodies with content after their
/// inner braces are unambiguous.
///
/// Title extraction never fails: a body without a matching header line
/// yields an empty title.
///
/// # Errors
///
/// [`ExtractError::Malformed`] when the fragment does not match the wrapper
/// shape.
pub fn extract(raw: &str) -> Result<EmbeddedBlock, ExtractError> {
    let captures = FULL_PATTERN
        .captures(raw)
        .ok_or_else(|| ExtractError::Malformed {
            fragment: raw.to_owned(),
        })?;
    let body = &captures[1];

    let title = HEADER_PATTERN
        .captures(body)
        .map_or("", |header| header.get(1).map_or("", |m| m.as_str()));

    Ok(EmbeddedBlock {
        body: body.to_owned(),
        title: title.to_owned(),
    })
}
