//! Shared shape of the tag rewriters

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub conversions: usize,
}

/// A single-pass rewrite of one legacy tag kind.
pub trait TagRewriter {
    /// Singular human-readable name, e.g. "codeblock".
    fn label(&self) -> &'static str;

    /// Substring whose absence means the document has nothing to convert.
    fn marker(&self) -> &'static str;

    /// Rewrite every tag occurrence in `content`.
    fn rewrite(&self, content: &str) -> Rewrite;

    /// Whether a file containing the marker is written even when the
    /// rewrite produced identical content.
    fn writes_unchanged(&self) -> bool {
        false
    }
}
