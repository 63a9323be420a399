/// Round to the nearest whole amount and insert thousands separators:
/// `1234567.5` → `"1,234,568"`. Used by the presentation layer; no currency
/// symbol is attached here.
pub fn format_number(n: f64) -> String {
    let rounded = n.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ── Tests ──
