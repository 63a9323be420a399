use thiserror::Error;

use crate::model::PriceHistoryItem;

/// The one precondition violation this module surfaces: highest/lowest have
/// no answer for an empty history. Average does not share it (empty averages
/// to zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price history is empty")]
pub struct EmptyHistory;

/// Descriptive statistics over one product's price history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

/// Highest observed price. Ties keep the earliest-seen maximum.
pub fn highest_price(history: &[PriceHistoryItem]) -> Result<f64, EmptyHistory> {
    let (first, rest) = history.split_first().ok_or(EmptyHistory)?;
    let mut best = first;
    for item in rest {
        if item.price > best.price {
            best = item;
        }
    }
    Ok(best.price)
}

/// Lowest observed price. Ties keep the earliest-seen minimum.
pub fn lowest_price(history: &[PriceHistoryItem]) -> Result<f64, EmptyHistory> {
    let (first, rest) = history.split_first().ok_or(EmptyHistory)?;
    let mut best = first;
    for item in rest {
        if item.price < best.price {
            best = item;
        }
    }
    Ok(best.price)
}

/// Mean of all observed prices; exactly `0.0` for an empty history.
pub fn average_price(history: &[PriceHistoryItem]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let sum: f64 = history.iter().map(|item| item.price).sum();
    sum / history.len() as f64
}

/// All three reductions in one pass-shaped bundle.
pub fn analyze(history: &[PriceHistoryItem]) -> Result<PriceStats, EmptyHistory> {
    Ok(PriceStats {
        highest: highest_price(history)?,
        lowest: lowest_price(history)?,
        average: average_price(history),
    })
}

// ── Tests ──
