// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary unit conversions.
//!
//! The model works in SI (m, s, MPa). Persisted and edited values use
//! millimetres and 365-day years; conversion happens only at that boundary.

use serde::{Deserialize, Serialize};

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: f64 = 31536e3;

/// Crack growth rate conversion m/s → mm/year.
pub const MPS_TO_MM_PER_YEAR: f64 = 31536e6;

pub fn seconds_to_years(value: f64) -> f64 {
    value / SECONDS_PER_YEAR
}

pub fn years_to_seconds(value: f64) -> f64 {
    value * SECONDS_PER_YEAR
}

pub fn meters_to_millimeters(value: f64) -> f64 {
    value * 1e3
}

pub fn millimeters_to_meters(value: f64) -> f64 {
    value * 1e-3
}

/// Unit a field is shown and persisted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayUnit {
    /// Same as the internal unit (A/m², MPa, MPa·√m).
    Native,
    /// Internal metres, displayed millimetres.
    Millimeter,
    /// Internal seconds, displayed years.
    Year,
}

impl DisplayUnit {
    /// Internal SI value → display value.
    pub fn to_display(self, si: f64) -> f64 {
        match self {
            DisplayUnit::Native => si,
            DisplayUnit::Millimeter => meters_to_millimeters(si),
            DisplayUnit::Year => seconds_to_years(si),
        }
    }

    /// Display value → internal SI value.
    pub fn from_display(self, shown: f64) -> f64 {
        match self {
            DisplayUnit::Native => shown,
            DisplayUnit::Millimeter => millimeters_to_meters(shown),
            DisplayUnit::Year => years_to_seconds(shown),
        }
    }
}
