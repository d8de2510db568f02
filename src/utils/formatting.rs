//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with one decimal, e.g. "4.5h". Negative zero prints as "0.0h".
pub fn fmt_hours(h: f64) -> String {
    let h = if h == 0.0 { 0.0 } else { h };
    format!("{:.1}h", h)
}

/// Whole kronor with a space as thousands separator, e.g. "12 825 kr".
pub fn fmt_kr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} kr", sign, grouped)
}

/// Compact number for CSV cells: no trailing ".0".
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
