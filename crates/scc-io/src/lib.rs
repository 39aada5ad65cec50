// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — SCC I/O
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scenario persistence.
//!
//! - `number`: decimal-separator aware parsing and fixed-point formatting
//! - `persistence`: the sixteen-line scenario record and file helpers
pub mod number;
pub mod persistence;

pub use persistence::{load_from_file, save_to_file, LoadedScenario, ScenarioCodec};
