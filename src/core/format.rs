use serde::{Deserialize, Serialize};

/// Display formatting for animated balances and KPI tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: u8,
    pub group_separator: Option<char>,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            decimals: 2,
            group_separator: Some(','),
        }
    }
}

impl AmountFormat {
    #[must_use]
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self {
            prefix: symbol.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn without_grouping(mut self) -> Self {
        self.group_separator = None;
        self
    }

    /// Formats `value` as `-{prefix}{grouped integer}.{fraction}{suffix}`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        let precision = usize::from(self.decimals);
        let rounded = format!("{:.precision$}", value.abs());
        let (integer, fraction) = match rounded.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rounded.as_str(), None),
        };
        // Values that round to zero never carry a minus sign.
        let negative = value < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0');

        let mut out = String::with_capacity(rounded.len() + self.prefix.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.prefix);
        match self.group_separator {
            Some(separator) => push_grouped(&mut out, integer, separator),
            None => out.push_str(integer),
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

/// `$1,234.50` style amount with the given prefix and two decimals.
#[must_use]
pub fn format_amount(value: f64, prefix: &str) -> String {
    AmountFormat::currency(prefix).format(value)
}

/// Whole or fractional percentage, e.g. `42%` or `42.5%`.
#[must_use]
pub fn format_percent(value: f64, decimals: u8) -> String {
    AmountFormat::default()
        .with_decimals(decimals)
        .without_grouping()
        .with_suffix("%")
        .format(value)
}

/// Short magnitude form used on compact KPI tiles: `950`, `12.3K`, `4.5M`, `1.2B`.
///
/// The unit is picked after rounding, so `999_950` reads `1M` rather than `1000K`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];

    if !value.is_finite() {
        return "nan".to_owned();
    }

    let whole = value.round();
    if whole.abs() < 1e3 {
        // `+ 0.0` folds `-0` into `0`.
        return format!("{}", whole + 0.0);
    }

    let mut scaled = 0.0;
    let mut unit = "";
    for (scale, name) in UNITS {
        scaled = (value / scale * 10.0).round() / 10.0;
        unit = name;
        if scaled.abs() < 1e3 {
            break;
        }
    }

    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{unit}")
}
