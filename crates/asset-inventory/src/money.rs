//! Money Formatting
//!
//! Indian-rupee display: no fraction digits, rounded half away from zero,
//! Indian digit grouping (last three digits, then pairs). A negative amount
//! keeps its sign even when it rounds to zero.

/// Format `value` as rupees, e.g. `1200000.0` → `₹12,00,000`
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "₹NaN".to_string()
        } else if value > 0.0 {
            "₹∞".to_string()
        } else {
            "-₹∞".to_string()
        };
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", value.abs().round());
    format!("{}₹{}", sign, group_indian(&digits))
}

/// Y-axis tick in lakhs, e.g. `1250000.0` → `13L`.
///
/// Halves round towards positive infinity and zero is never signed, so
/// `-250000.0` is `-2L` and `-20000.0` is `0L`.
pub fn format_lakhs(value: f64) -> String {
    let lakhs = (value / 100_000.0 + 0.5).floor() + 0.0;
    format!("{}L", lakhs)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
