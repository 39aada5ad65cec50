// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Scenario Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordered, capacity-bounded collection of scenarios with one active entry.
//!
//! Entries are appended on create/load and removed only by an explicit
//! delete. The store never edits an entry on its own; callers change
//! inputs or run sweeps through `get_mut`/`active_mut`.

use std::path::Path;

use scc_io::persistence::{load_from_file, save_to_file};
use scc_model::curves::{calculate, SweepOutcome};
use scc_types::constants::MAX_SCENARIOS;
use scc_types::curve::{CurveKind, CurvePoint};
use scc_types::error::{SccError, SccResult};
use scc_types::params::ParameterSet;
use tracing::{debug, warn};

/// One curve of one scenario, keyed the way chart series are numbered.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    /// 1-based position of the scenario in the store.
    pub key: usize,
    pub name: &'a str,
    pub points: &'a [CurvePoint],
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    scenarios: Vec<ParameterSet>,
    active: Option<usize>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        ScenarioStore::default()
    }

    pub fn capacity(&self) -> usize {
        MAX_SCENARIOS
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= MAX_SCENARIOS
    }

    fn ensure_room(&self) -> SccResult<()> {
        if self.is_full() {
            return Err(SccError::CapacityExceeded {
                capacity: MAX_SCENARIOS,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> SccResult<()> {
        if index >= self.scenarios.len() {
            return Err(SccError::IndexOutOfRange {
                index,
                len: self.scenarios.len(),
            });
        }
        Ok(())
    }

    /// Append a scenario and return its index.
    pub fn add(&mut self, params: ParameterSet) -> SccResult<usize> {
        self.ensure_room()?;
        self.scenarios.push(params);
        let index = self.scenarios.len() - 1;
        debug!(index, len = self.scenarios.len(), "scenario added");
        Ok(index)
    }

    /// Delete a scenario. The active selection is cleared.
    pub fn remove(&mut self, index: usize) -> SccResult<ParameterSet> {
        self.check_index(index)?;
        let removed = self.scenarios.remove(index);
        self.active = None;
        debug!(index, len = self.scenarios.len(), "scenario removed");
        Ok(removed)
    }

    /// Make `index` the active scenario, or clear the selection with `None`.
    pub fn select(&mut self, index: Option<usize>) -> SccResult<()> {
        if let Some(i) = index {
            self.check_index(i)?;
        }
        self.active = index;
        debug!(active = ?index, "scenario selected");
        Ok(())
    }

    pub fn list(&self) -> &[ParameterSet] {
        &self.scenarios
    }

    pub fn get(&self, index: usize) -> Option<&ParameterSet> {
        self.scenarios.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ParameterSet> {
        self.scenarios.get_mut(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&ParameterSet> {
        self.active.and_then(|i| self.scenarios.get(i))
    }

    pub fn active_mut(&mut self) -> Option<&mut ParameterSet> {
        self.active.and_then(|i| self.scenarios.get_mut(i))
    }

    /// Run the `kind` sweep on the active scenario. `Ok(None)` when nothing
    /// is selected.
    pub fn calculate_active(&mut self, kind: CurveKind) -> SccResult<Option<SweepOutcome>> {
        match self.active_mut() {
            Some(params) => calculate(params, kind).map(Some),
            None => Ok(None),
        }
    }

    /// Run the `kind` sweep on every scenario, in store order. A failing
    /// scenario does not stop the others; its slot carries the error and its
    /// curve is left empty.
    pub fn calculate_all(&mut self, kind: CurveKind) -> Vec<SccResult<SweepOutcome>> {
        self.scenarios
            .iter_mut()
            .enumerate()
            .map(|(index, params)| {
                let result = calculate(params, kind);
                if let Err(err) = &result {
                    warn!(index, curve = %kind, error = %err, "sweep failed");
                }
                result
            })
            .collect()
    }

    /// The `kind` curve of every scenario, in store order.
    pub fn series(&self, kind: CurveKind) -> Vec<Series<'_>> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(i, params)| Series {
                key: i + 1,
                name: &params.name,
                points: params.curve(kind),
            })
            .collect()
    }

    /// Load a scenario file and append it. Capacity is checked before the
    /// file is touched. Returns the new index and the parse-error count.
    pub fn open_scenario(&mut self, path: impl AsRef<Path>) -> SccResult<(usize, usize)> {
        self.ensure_room()?;
        let loaded = load_from_file(path)?;
        let index = self.add(loaded.params)?;
        Ok((index, loaded.parse_errors))
    }

    /// Save one scenario to a file.
    pub fn save_entry(&mut self, index: usize, path: impl AsRef<Path>) -> SccResult<()> {
        self.check_index(index)?;
        save_to_file(&mut self.scenarios[index], path)
    }
}
