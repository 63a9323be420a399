/// Document-query capability the extractors run against.
///
/// A parsed document root is itself a node, so one trait covers both the
/// whole document and any element inside it. Node-sets are plain `Vec`s,
/// which gives length checks, iteration, mapping and collection for free.
pub trait QueryNode: Sized {
    /// All nodes matching `selector`, scoped under this node, in document
    /// order. Zero matches (including a selector the backing parser cannot
    /// understand) is an empty `Vec`, never an error.
    fn find(&self, selector: &str) -> Vec<Self>;

    /// Full descendant text content, whitespace and embedded newlines
    /// preserved. Callers trim.
    fn text(&self) -> String;
}
