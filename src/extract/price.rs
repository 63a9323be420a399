use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::query::QueryNode;

/// Canonical price shape after stripping: digits, one period, two decimals.
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d{2}").unwrap());

/// Extract a normalized price string from an ordered list of candidate
/// nodes. The order encodes priority (sale price node before list price
/// node); the first candidate with non-empty trimmed text wins and later
/// candidates are never read — even when the winning text turns out to hold
/// no usable price.
///
/// The winning text is stripped to digits and periods. If the stripped text
/// contains a `D+.DD` run, the first such run is the price (stray digits
/// like trailing size codes are discarded); otherwise the stripped text is
/// returned verbatim and the caller must parse it defensively. No viable
/// candidate at all yields an empty string.
pub fn extract_price<N: QueryNode>(candidates: &[N]) -> String {
    for node in candidates {
        let text = node.text();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let stripped: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if let Some(m) = PRICE_RE.find(&stripped) {
            return m.as_str().to_string();
        }
        debug!(raw = %stripped, "price text has no canonical D+.DD run");
        return stripped;
    }

    String::new()
}

/// First character of the node's trimmed text, or empty. Purely positional;
/// nothing checks that the character is actually a currency symbol.
pub fn extract_currency<N: QueryNode>(node: &N) -> String {
    node.text()
        .trim()
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    /// Test node: fixed text, no children. `Tripwire` panics when read,
    /// proving the extractor stops at the first viable candidate.
    enum Probe {
        Text(&'static str),
        Tripwire,
    }

    impl QueryNode for Probe {
        fn find(&self, _selector: &str) -> Vec<Self> {
            Vec::new()
        }

        fn text(&self) -> String {
            match self {
                Probe::Text(t) => (*t).to_string(),
                Probe::Tripwire => panic!("read a candidate past the first viable one"),
            }
        }
    }

    #[test]
    fn strips_symbols_and_separators() {
        let out = extract_price(&[Probe::Text("$1,234.56 each")]);
        assert_eq!(out, "1234.56");
    }

    #[test]
    fn no_canonical_run_returns_raw_strip() {
        let out = extract_price(&[Probe::Text("Only 3 left")]);
        assert_eq!(out, "3");
    }

    #[test]
    fn trailing_size_code_discarded() {
        // "12" from the pack size survives stripping but not the D+.DD match.
        let out = extract_price(&[Probe::Text("£29.99 x 12")]);
        assert_eq!(out, "29.99");
    }

    #[test]
    fn empty_candidate_list() {
        let out = extract_price::<Probe>(&[]);
        assert_eq!(out, "");
    }

    #[test]
    fn all_blank_candidates() {
        let out = extract_price(&[Probe::Text(""), Probe::Text("   \n ")]);
        assert_eq!(out, "");
    }

    #[test]
    fn later_candidates_never_read() {
        let out = extract_price(&[
            Probe::Text("  "),
            Probe::Text("$9.99"),
            Probe::Tripwire,
        ]);
        assert_eq!(out, "9.99");
    }

    #[test]
    fn low_quality_first_source_still_wins() {
        // First non-empty text short-circuits even when it strips to nothing.
        let out = extract_price(&[Probe::Text("Currently unavailable"), Probe::Tripwire]);
        assert_eq!(out, "");
    }

    #[test]
    fn multiple_periods_take_first_run() {
        let out = extract_price(&[Probe::Text("12.34.56")]);
        assert_eq!(out, "12.34");
    }

    #[test]
    fn currency_first_char() {
        assert_eq!(extract_currency(&Probe::Text("  €45.00 ")), "€");
        assert_eq!(extract_currency(&Probe::Text("$")), "$");
        assert_eq!(extract_currency(&Probe::Text("   ")), "");
    }
}
