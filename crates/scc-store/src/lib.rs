// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — SCC Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scenario store: the set of open scenarios an application works on.
pub mod store;

pub use store::{ScenarioStore, Series};
