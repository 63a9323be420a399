use tracing::debug;

use crate::history;
use crate::model::{Notification, ProductSnapshot};

/// Discount percentage at or above which a deal alert fires.
pub const DISCOUNT_THRESHOLD: f64 = 40.0;

/// Decide which notification (if any) a fresh scrape warrants against the
/// last persisted snapshot. An ordered decision list; the first matching
/// rule wins and later rules are never evaluated:
///
/// 1. Price dropped below everything in the stored history.
/// 2. Product was out of stock and is back.
/// 3. Discount at or above [`DISCOUNT_THRESHOLD`].
/// 4. Nothing worth sending.
///
/// [`Notification::Welcome`] never comes out of here; the caller raises it
/// itself on the first scrape of a newly tracked product.
pub fn classify(scraped: &ProductSnapshot, current: &ProductSnapshot) -> Option<Notification> {
    // A stored snapshot with no history cannot have a historical low, so
    // rule 1 simply cannot match. Callers normally guarantee at least one
    // observation.
    if let Ok(lowest) = history::lowest_price(&current.price_history) {
        if scraped.current_price < lowest {
            debug!(
                price = scraped.current_price,
                lowest, "price below historical low"
            );
            return Some(Notification::LowestPrice);
        }
    }

    if current.is_out_of_stock && !scraped.is_out_of_stock {
        debug!("product back in stock");
        return Some(Notification::ChangeOfStock);
    }

    if scraped.discount_rate >= DISCOUNT_THRESHOLD {
        debug!(discount = scraped.discount_rate, "discount threshold met");
        return Some(Notification::ThresholdMet);
    }

    None
}

// ── Tests ──
