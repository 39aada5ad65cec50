// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Degradation Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form stress-corrosion cracking formulas.
//!
//! `crack_growth_rate` is the film-rupture / anodic-dissolution model of
//! subcritical growth; `stress_intensity_factor` is the part-through
//! surface-crack approximation. Both are pure and unguarded: a
//! non-positive log argument yields NaN, and the SIF is singular as the
//! depth approaches the wall thickness.

use std::f64::consts::PI;

use scc_types::constants::{
    BETA_RICE, E0_FILM_DUCTILITY, E_YOUNG, FARADAY, M_IRON, N_HARDENING, N_REPASSIVATION,
    R0_CRACK_TIP, RHO_IRON, T0_REPASSIVATION, Z_ELECTRONS,
};

/// Crack growth rate (m/s).
///
/// `k`: stress intensity factor, `k0`: threshold (MPa·√m),
/// `i0`: anodic current density (A/m²), `s0`: yield strength (MPa).
/// Zero at or below the threshold.
pub fn crack_growth_rate(k: f64, k0: f64, i0: f64, s0: f64) -> f64 {
    if k > k0 {
        let v1 = ((k * k - k0 * k0) / (3.0 * PI * R0_CRACK_TIP * s0 * s0)).ln();
        let v2 = v1.powf((N_HARDENING + 1.0) / (N_HARDENING - 1.0));
        let v3 = T0_REPASSIVATION * 2.0 * N_HARDENING * BETA_RICE * s0 * v2
            / (E0_FILM_DUCTILITY * R0_CRACK_TIP * (N_HARDENING - 1.0) * E_YOUNG);
        let v4 = v3.powf(N_REPASSIVATION);
        let v5 = M_IRON * i0 * v4 / (Z_ELECTRONS * FARADAY * RHO_IRON * (1.0 - N_REPASSIVATION));
        v5.powf(1.0 / (1.0 - N_REPASSIVATION))
    } else {
        0.0
    }
}

/// Stress intensity factor (MPa·√m) of a surface crack of depth `a` (m)
/// in a wall of thickness `w` (m) under stress `s` (MPa).
pub fn stress_intensity_factor(a: f64, w: f64, s: f64) -> f64 {
    let k1 = (2.0 * w * (PI * a / 2.0 / w).tan()).sqrt();
    let k2 = (PI * a / 2.0 / w).cos();
    let k3 = 0.752 + 2.02 * a / w + 0.37 * (1.0 - (PI * a / 2.0 / w).sin()).powf(3.0);
    s * k1 / k2 * k3
}
