pub mod description;
pub mod price;

pub use description::extract_description;
pub use price::{extract_currency, extract_price};
