use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::query::QueryNode;

/// Runs of blank lines collapse to a single newline in the final text.
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

const DESCRIPTION_CONTAINER: &str = "#productDescription";
const FEATURE_BULLETS: &str = "#feature-bullets .a-list-item";
const FALLBACK_SELECTORS: &[&str] = &[".a-unordered-list .a-list-item", ".a-expander-content p"];

/// Primary text at or above this many chars is substantial enough to keep.
const SUBSTANTIAL_CHARS: usize = 100;
/// Below this, the primary text is treated as effectively missing.
const MINIMAL_CHARS: usize = 20;

/// Best-effort product description from the document root, as an ordered
/// chain of tiers. Each tier is consulted only when the previous one came up
/// empty or short:
///
/// 1. The dedicated description container: its paragraphs joined by newline,
///    or the container's own text when it has no paragraphs.
/// 2. Feature bullets, whenever tier 1 produced fewer than 100 chars.
///    Bullets *replace* the primary text outright, minimal or not.
/// 3. A fixed list of alternate selectors, first one with any text wins.
///
/// Whatever accumulated gets blank runs collapsed and ends trimmed. A page
/// with nothing anywhere yields an empty string; no tier ever errors on a
/// missing container.
pub fn extract_description<N: QueryNode>(doc: &N) -> String {
    let mut description = primary_text(doc).unwrap_or_default();

    if description.chars().count() < SUBSTANTIAL_CHARS {
        if let Some(bullets) = bullet_text(doc) {
            let n = description.chars().count();
            if n < MINIMAL_CHARS {
                debug!(chars = n, "primary description minimal, using feature bullets");
            } else {
                // 20–99 chars: bullets still replace. Intentional carry-over
                // of the scraper this was ported from; see DESIGN.md.
                debug!(chars = n, "primary description short, feature bullets replace it");
            }
            description = bullets;
        }
    }

    if description.is_empty() {
        if let Some(fallback) = fallback_text(doc) {
            description = fallback;
        }
    }

    if description.is_empty() {
        return description;
    }
    BLANK_RUN_RE.replace_all(&description, "\n").trim().to_string()
}

/// Tier 1: the dedicated description container.
fn primary_text<N: QueryNode>(doc: &N) -> Option<String> {
    let container = doc.find(DESCRIPTION_CONTAINER).into_iter().next()?;
    let paragraphs = container.find("p");
    let text = if paragraphs.is_empty() {
        container.text().trim().to_string()
    } else {
        join_nonempty(&paragraphs)
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Tier 2: "About this item" feature bullets.
fn bullet_text<N: QueryNode>(doc: &N) -> Option<String> {
    let items = doc.find(FEATURE_BULLETS);
    if items.is_empty() {
        return None;
    }
    let text = join_nonempty(&items);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Tier 3: alternate selectors, tried in order, first non-empty text wins.
fn fallback_text<N: QueryNode>(doc: &N) -> Option<String> {
    for &selector in FALLBACK_SELECTORS {
        let nodes = doc.find(selector);
        if nodes.is_empty() {
            continue;
        }
        let text = join_nonempty(&nodes);
        if !text.is_empty() {
            debug!(selector, "description from fallback selector");
            return Some(text);
        }
    }
    None
}

fn join_nonempty<N: QueryNode>(nodes: &[N]) -> String {
    nodes
        .iter()
        .map(|n| n.text().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──
