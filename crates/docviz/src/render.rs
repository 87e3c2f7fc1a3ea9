//! Rendering-engine boundary.
//!
//! The core treats rendering as an opaque collaborator behind [`Renderer`].
//! [`KrokiRenderer`] is the production implementation, POSTing DOT source to
//! a Kroki service over HTTP.

use std::time::Duration;

use ureq::Agent;

use crate::consts::DEFAULT_TIMEOUT_SECS;

/// Output encoding for rendered artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// PNG raster output (default).
    #[default]
    Png,
    /// SVG vector output.
    Svg,
}

impl OutputFormat {
    /// Format name as used in request paths and file extensions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("invalid PNG data")]
    InvalidPng,
}

/// Renders DOT source to encoded image bytes.
pub trait Renderer {
    /// Render `source` to `format`-encoded bytes.
    ///
    /// # Errors
    ///
    /// [`RenderError`] when the engine rejects the source or the transport
    /// fails.
    fn render(&self, source: &str, format: OutputFormat) -> Result<Vec<u8>, RenderError>;
}

/// Graphviz rendering via a Kroki server.
#[derive(Debug)]
pub struct KrokiRenderer {
    server_url: String,
    agent: Agent,
}

impl KrokiRenderer {
    /// Create a renderer for `server_url` (e.g. `https://kroki.io`) with the
    /// default timeout.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_timeout(server_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a renderer with an explicit global request timeout.
    #[must_use]
    pub fn with_timeout(server_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            server_url: server_url.into().trim_end_matches('/').to_owned(),
            agent,
        }
    }

    /// Send DOT source to Kroki and return the response body as bytes.
    ///
    /// Handles HTTP errors by reading the response body for error details.
    fn send_request(&self, source: &str, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
        let url = format!("{}/graphviz/{}", self.server_url, format.as_str());

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "text/plain")
            .send(source.as_bytes())
            .map_err(|e| RenderError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(RenderError::Http(format!("HTTP {status}: {error_body}")));
        }

        body.read_to_vec().map_err(|e| RenderError::Io(e.to_string()))
    }
}

impl Renderer for KrokiRenderer {
    fn render(&self, source: &str, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
        let data = self.send_request(source, format)?;

        if format == OutputFormat::Png && png_dimensions(&data).is_none() {
            return Err(RenderError::InvalidPng);
        }

        Ok(data)
    }
}

/// Extract width and height from PNG image data.
///
/// PNG format: 8-byte signature, then IHDR chunk with width/height at bytes 16-24.
pub fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 24 {
        return None;
    }

    // PNG signature check
    if &data[0..8] != b"\x89PNG\r\n\x1a\n" {
        return None;
    }

    // IHDR chunk: width at bytes 16-20, height at bytes 20-24 (big-endian)
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_dimensions() {
        // Minimal valid PNG with 100x50 dimensions
        let mut png_data = vec![
            0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
            0x00, 0x00, 0x00, 0x0D, // IHDR length
            b'I', b'H', b'D', b'R', // IHDR type
            0x00, 0x00, 0x00, 0x64, // width = 100
            0x00, 0x00, 0x00, 0x32, // height = 50
        ];
        png_data.extend_from_slice(&[0; 5]); // bit depth, color type, etc.

        let dims = png_dimensions(&png_data);
        assert_eq!(dims, Some((100, 50)));
    }

    #[test]
    fn test_png_dimensions_invalid() {
        let invalid_data = b"not a png";
        assert_eq!(png_dimensions(invalid_data), None);
    }

    #[test]
    fn test_png_dimensions_truncated() {
        assert_eq!(png_dimensions(b"\x89PNG\r\n\x1a\n"), None);
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::Png.as_str(), "png");
        assert_eq!(OutputFormat::Svg.as_str(), "svg");
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }

    #[test]
    fn test_server_url_trailing_slash_trimmed() {
        let renderer = KrokiRenderer::new("https://kroki.io/");
        assert_eq!(renderer.server_url, "https://kroki.io");
    }
}
