// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Number Codec
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decimal numbers in scenario files and edit fields.
//!
//! Reading accepts `.` or `,` as the decimal separator. Writing uses the
//! separator of an explicit [`NumberFormat`]; there is no process-wide
//! locale.

/// Character placed between the integer and fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

/// Result of reading one numeric token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// Blank token or a lone `-`: the value is absent, not wrong.
    Empty,
    Value(f64),
    /// Token that is not a number.
    Invalid,
}

/// Parse a decimal number written with either separator.
pub fn parse_decimal(token: &str) -> ParsedNumber {
    let token = token.trim();
    if token.is_empty() || token == "-" {
        return ParsedNumber::Empty;
    }
    match token.replace(',', ".").parse::<f64>() {
        Ok(v) => ParsedNumber::Value(v),
        Err(_) => ParsedNumber::Invalid,
    }
}

/// Fixed-point formatting with a chosen separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    pub separator: DecimalSeparator,
}

impl NumberFormat {
    pub fn new(separator: DecimalSeparator) -> Self {
        NumberFormat { separator }
    }

    /// `value` with exactly `precision` fractional digits.
    pub fn format_fixed(&self, value: f64, precision: usize) -> String {
        let text = format!("{value:.precision$}");
        match self.separator {
            DecimalSeparator::Point => text,
            DecimalSeparator::Comma => text.replace('.', ","),
        }
    }

    /// Like [`format_fixed`](Self::format_fixed); an absent value is empty.
    pub fn format_optional(&self, value: Option<f64>, precision: usize) -> String {
        value
            .map(|v| self.format_fixed(v, precision))
            .unwrap_or_default()
    }
}
