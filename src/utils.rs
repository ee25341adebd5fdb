/// Formats an f64 to 4 decimal places, or returns "—" if non-finite.
pub fn fmt_float(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.4}")
    } else {
        "—".to_owned()
    }
}

/// Formats value counts as `[('a', 3), ('b', 1)]`.
pub fn fmt_pairs(pairs: &[(String, usize)]) -> String {
    let items: Vec<String> = pairs
        .iter()
        .map(|(value, count)| format!("('{value}', {count})"))
        .collect();
    format!("[{}]", items.join(", "))
}
