use scraper::{ElementRef, Html, Selector};

use crate::query::QueryNode;

/// CSS-selector implementation of [`QueryNode`] over a parsed HTML page.
///
/// The extractors never require this type; they take any `QueryNode`. This
/// is the concrete collaborator callers (and the integration tests) plug in.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full page. Malformed markup parses to whatever tree the
    /// html5ever recovery produces; there is no failure path.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// The document root as a queryable node.
    pub fn root(&self) -> DomNode<'_> {
        DomNode {
            el: self.html.root_element(),
        }
    }

    /// Shorthand for `root().find(selector)`.
    pub fn find(&self, selector: &str) -> Vec<DomNode<'_>> {
        self.root().find(selector)
    }
}

/// An element inside an [`HtmlDocument`].
#[derive(Clone, Copy)]
pub struct DomNode<'a> {
    el: ElementRef<'a>,
}

impl QueryNode for DomNode<'_> {
    fn find(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(sel) => self.el.select(&sel).map(|el| DomNode { el }).collect(),
            // A selector the parser rejects reads as "nothing matched".
            Err(_) => Vec::new(),
        }
    }

    fn text(&self) -> String {
        self.el.text().collect()
    }
}

// ── Tests ──
