//! Normalization of timer amounts and unit words into seconds.

/// Converts an amount and a unit word into a seconds count.
///
/// The amount is accepted as a decimal number or a simple `num/den`
/// fraction. The unit is matched case-insensitively on its first letter:
/// `s` for seconds, `m` for minutes, `h` for hours. Anything that fails to
/// parse, a non-positive amount, or an unknown unit normalizes to `0.0`
/// rather than erroring, so one bad timer never aborts a parse.
pub fn normalize(amount: &str, unit: &str) -> f64 {
    let amount = parse_amount(amount);
    if amount > 0.0 {
        let unit = unit.to_lowercase();
        if unit.starts_with('s') {
            amount
        } else if unit.starts_with('m') {
            amount * 60.0
        } else if unit.starts_with('h') {
            amount * 60.0 * 60.0
        } else {
            0.0
        }
    } else {
        0.0
    }
}

fn parse_amount(s: &str) -> f64 {
    if let Some(value) = parse_exact(s) {
        return value;
    }
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 2 {
            if let (Some(num), Some(den)) = (parse_exact(parts[0]), parse_exact(parts[1])) {
                return num / den;
            }
        }
    }
    0.0
}

/// Accepts only numbers whose canonical string form round-trips exactly,
/// so trailing garbage like `10x` is rejected rather than truncated.
fn parse_exact(s: &str) -> Option<f64> {
    let value: f64 = s.parse().ok()?;
    if value.to_string() == s {
        Some(value)
    } else {
        None
    }
}
