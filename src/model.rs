use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed price for a product. History order is scrape order; the
/// timestamp is informational and never used to re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryItem {
    pub price: f64,
    pub date: DateTime<Utc>,
}

/// A single scrape's captured product state. Two instances matter per
/// classification: the fresh *scraped* snapshot and the last persisted
/// *current* snapshot. This core only reads snapshots; it never stores or
/// mutates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub url: String,
    pub title: String,
    /// Currency symbol as extracted, kept separate from the amounts.
    pub currency: String,
    pub current_price: f64,
    pub original_price: f64,
    /// Discount as a percentage (0–100, occasionally above).
    pub discount_rate: f64,
    pub is_out_of_stock: bool,
    pub description: String,
    pub price_history: Vec<PriceHistoryItem>,
}

/// Which alert (if any) the notification collaborator should send.
///
/// `Welcome` is never produced by classification; the caller raises it on
/// the first scrape of a newly tracked product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notification {
    Welcome,
    ChangeOfStock,
    LowestPrice,
    ThresholdMet,
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_wire_names() {
        // The notification sender matches on these exact strings.
        assert_eq!(
            serde_json::to_value(Notification::Welcome).unwrap(),
            serde_json::json!("WELCOME")
        );
        assert_eq!(
            serde_json::to_value(Notification::ChangeOfStock).unwrap(),
            serde_json::json!("CHANGE_OF_STOCK")
        );
        assert_eq!(
            serde_json::to_value(Notification::LowestPrice).unwrap(),
            serde_json::json!("LOWEST_PRICE")
        );
        assert_eq!(
            serde_json::to_value(Notification::ThresholdMet).unwrap(),
            serde_json::json!("THRESHOLD_MET")
        );
    }

    #[test]
    fn snapshot_round_trips() {
        let snapshot = ProductSnapshot {
            url: "https://example.com/dp/B000".into(),
            title: "Stainless Kettle".into(),
            currency: "€".into(),
            current_price: 34.99,
            original_price: 49.99,
            discount_rate: 30.0,
            is_out_of_stock: false,
            description: "1.7L cordless kettle".into(),
            price_history: vec![PriceHistoryItem {
                price: 49.99,
                date: "2026-01-05T09:00:00Z".parse().unwrap(),
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ProductSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
