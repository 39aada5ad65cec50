// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — SCC Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stress-corrosion cracking model.
//!
//! - `degradation`: crack growth rate and stress intensity factor formulas
//! - `curves`: CGR, SIF and CCD sweeps over a parameter set
pub mod curves;
pub mod degradation;
