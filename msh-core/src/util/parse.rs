/// Parses a decimal number written with either a dot or a comma
/// as decimal separator. Infinite and NaN values are rejected.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let normalized = if s.contains('.') {
        s.to_string()
    } else {
        s.replacen(',', ".", 1)
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a non-negative integer; decimals are truncated.
pub fn parse_unsigned(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    parse_decimal(s)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.trunc() as u32)
}

const TRUTHY: &[&str] = &["true", "1", "yes", "y", "oui", "o", "vrai", "x"];

/// Everything that is not a known truthy token is `false`.
pub fn parse_truthy(s: &str) -> bool {
    let s = s.trim().to_lowercase();
    TRUTHY.contains(&s.as_str())
}

/// Splits a list cell at `,`, `;` or `|`.
pub fn split_list(s: &str) -> Vec<String> {
    s.split([',', ';', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
