//! Number formatting for the board.
//!
//! All formatters are en-US and return `—` for values that cannot be shown.

/// Placeholder for missing values.
pub const MISSING: &str = "—";

const COMPACT_UNITS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Formats a dollar amount with thousands separators and two decimals.
///
/// ```
/// use coinboard::market::format::usd;
///
/// assert_eq!(usd(1234.5), "$1,234.50");
/// assert_eq!(usd(-0.5), "-$0.50");
/// ```
pub fn usd(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Same as [`usd`] for an optional price.
pub fn usd_opt(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), usd)
}

/// Compact notation with at most two fraction digits: `999`, `1.23K`,
/// `1.5M`, `2.1B`, `3T`.
///
/// A value that rounds up to 1000 of a unit is promoted to the next unit,
/// so `999_999` is `1M` rather than `1000K`.
pub fn compact(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }

    let abs = value.abs();
    let mut idx = COMPACT_UNITS
        .iter()
        .rposition(|(threshold, _)| abs >= *threshold)
        .unwrap_or(0);
    let mut scaled = round2(abs / COMPACT_UNITS[idx].0);
    if scaled >= 1000.0 && idx + 1 < COMPACT_UNITS.len() {
        idx += 1;
        scaled = round2(abs / COMPACT_UNITS[idx].0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, trim_fraction(scaled), COMPACT_UNITS[idx].1)
}

/// [`compact`] with a leading `$`, or `—` when missing.
pub fn compact_usd(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("${}", compact(v)),
        None => MISSING.to_string(),
    }
}

/// Signed percentage with two decimals: `+1.23%`, `-0.50%`, `0.00%`.
pub fn pct(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => {
            let sign = if v > 0.0 { "+" } else { "" };
            format!("{}{:.2}%", sign, v)
        }
        _ => MISSING.to_string(),
    }
}

/// Direction of a change, used to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Flat,
    Unknown,
}

impl Tone {
    pub fn of(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_nan() => Tone::Unknown,
            Some(v) if v > 0.0 => Tone::Positive,
            Some(v) if v < 0.0 => Tone::Negative,
            Some(_) => Tone::Flat,
            None => Tone::Unknown,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn trim_fraction(v: f64) -> String {
    let fixed = format!("{:.2}", v);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
