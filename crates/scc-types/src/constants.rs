// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed constants of the film-rupture / anodic-dissolution growth model
//! and of the sweep machinery.

/// Number of electrons exchanged in the corrosion reaction.
pub const Z_ELECTRONS: f64 = 2.0;

/// Atomic mass of iron (kg/mol).
pub const M_IRON: f64 = 55.845e-3;

/// Faraday constant (C/mol).
pub const FARADAY: f64 = 96485.0;

/// Density of iron (kg/m³).
pub const RHO_IRON: f64 = 7847.0;

/// Repassivation incubation time (s).
pub const T0_REPASSIVATION: f64 = 1e-2;

/// Characteristic crack-tip length (m).
pub const R0_CRACK_TIP: f64 = 1e-6;

/// Rupture ductility of the passive film.
pub const E0_FILM_DUCTILITY: f64 = 1e-3;

/// Rice coefficient.
pub const BETA_RICE: f64 = 5.08;

/// Repassivation kinetic exponent.
pub const N_REPASSIVATION: f64 = 0.667;

/// Strain-hardening exponent.
pub const N_HARDENING: f64 = 6.0;

/// Young's modulus (MPa).
pub const E_YOUNG: f64 = 200e3;

/// Fraction of the wall thickness beyond which the crack model is not valid.
pub const DEPTH_LIMIT_FRACTION: f64 = 0.9;

/// Integration substeps per reported CCD sample.
pub const TIME_SUBSTEP_COUNT: usize = 10_000;

/// Maximum number of scenarios held at once.
pub const MAX_SCENARIOS: usize = 9;
