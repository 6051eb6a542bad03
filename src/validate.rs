//! Hex text validation for input fields.

/// True when `value` is 3 or 6 hex digits (4 or 8 with `alpha`), with an
/// optional leading `#`.
pub fn valid_hex(value: &str, alpha: bool) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    match digits.len() {
        3 | 6 => true,
        4 | 8 => alpha,
        _ => false,
    }
}

/// Strip everything that is not a hex digit and cap the length at 6 digits
/// (8 with `alpha`).
pub fn escape_hex(value: &str, alpha: bool) -> String {
    let limit = if alpha { 8 } else { 6 };
    value
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(limit)
        .collect()
}

/// Add or drop the leading `#`.
pub fn prefix_hex(value: &str, prefixed: bool) -> String {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if prefixed {
        format!("#{digits}")
    } else {
        digits.to_string()
    }
}
