//! Extraction and classification core for a product price tracker.
//!
//! Three independent, pure components composed by an external caller:
//!
//! - [`extract`] — normalized price, currency symbol and best-effort
//!   description out of semi-structured product markup.
//! - [`history`] — highest / lowest / average over a product's observed
//!   price history.
//! - [`notify`] — which notification (if any) a fresh scrape warrants
//!   against the last stored snapshot.
//!
//! The extractors run against the abstract [`query::QueryNode`] capability;
//! [`dom`] supplies the CSS-selector implementation over real HTML. Fetching
//! pages, persisting snapshots, sending notifications and scheduling scrapes
//! all live in the caller. Degenerate input — missing containers, empty
//! text, malformed prices — yields empty strings, zeros or `None`, never an
//! error.

pub mod dom;
pub mod extract;
pub mod format;
pub mod history;
pub mod model;
pub mod notify;
pub mod query;

pub use extract::{extract_currency, extract_description, extract_price};
pub use format::format_number;
pub use history::{analyze, average_price, highest_price, lowest_price, EmptyHistory, PriceStats};
pub use model::{Notification, PriceHistoryItem, ProductSnapshot};
pub use notify::{classify, DISCOUNT_THRESHOLD};
pub use query::QueryNode;
