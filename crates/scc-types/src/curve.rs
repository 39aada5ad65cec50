// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Curves
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// One sample of a generated curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        CurvePoint { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The three curves computed for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    /// Crack growth rate (mm/year) vs stress intensity factor (MPa·√m).
    Cgr,
    /// Stress intensity factor (MPa·√m) vs crack depth (mm).
    Sif,
    /// Crack depth (mm) vs time (years).
    Ccd,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Cgr, CurveKind::Sif, CurveKind::Ccd];
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            CurveKind::Cgr => "CGR",
            CurveKind::Sif => "SIF",
            CurveKind::Ccd => "CCD",
        };
        f.write_str(tag)
    }
}
