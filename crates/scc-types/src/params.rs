// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Parameter Set
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical and numeric inputs of one SCC scenario.
//!
//! Values are stored in SI units. A numeric field is `None` when it could
//! not be read; sweeps that need such a field report
//! [`SccError::MissingParameter`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::TIME_SUBSTEP_COUNT;
use crate::curve::{CurveKind, CurvePoint};
use crate::error::{SccError, SccResult};
use crate::units::{years_to_seconds, DisplayUnit};

/// Numeric input of a [`ParameterSet`], in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurrentDensity,
    YieldStrength,
    ThresholdSif,
    WallThickness,
    InitDepth,
    Stress,
    TimeBegin,
    TimeEnd,
    TimeStep,
    DepthBegin,
    DepthEnd,
    DepthStep,
    StressIfBegin,
    StressIfEnd,
    StressIfStep,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::CurrentDensity,
        Field::YieldStrength,
        Field::ThresholdSif,
        Field::WallThickness,
        Field::InitDepth,
        Field::Stress,
        Field::TimeBegin,
        Field::TimeEnd,
        Field::TimeStep,
        Field::DepthBegin,
        Field::DepthEnd,
        Field::DepthStep,
        Field::StressIfBegin,
        Field::StressIfEnd,
        Field::StressIfStep,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CurrentDensity => "anodic current density",
            Field::YieldStrength => "yield strength",
            Field::ThresholdSif => "threshold stress intensity factor",
            Field::WallThickness => "wall thickness",
            Field::InitDepth => "initial crack depth",
            Field::Stress => "stress",
            Field::TimeBegin => "time interval begin",
            Field::TimeEnd => "time interval end",
            Field::TimeStep => "time interval step",
            Field::DepthBegin => "depth interval begin",
            Field::DepthEnd => "depth interval end",
            Field::DepthStep => "depth interval step",
            Field::StressIfBegin => "stress intensity factor interval begin",
            Field::StressIfEnd => "stress intensity factor interval end",
            Field::StressIfStep => "stress intensity factor interval step",
        }
    }

    /// Unit the field is edited and persisted in.
    pub fn display_unit(self) -> DisplayUnit {
        match self {
            Field::WallThickness
            | Field::InitDepth
            | Field::DepthBegin
            | Field::DepthEnd
            | Field::DepthStep => DisplayUnit::Millimeter,
            Field::TimeBegin | Field::TimeEnd | Field::TimeStep => DisplayUnit::Year,
            _ => DisplayUnit::Native,
        }
    }

    /// Decimal places used when the field is written out.
    pub fn precision(self) -> usize {
        match self {
            Field::TimeStep | Field::DepthStep | Field::StressIfStep => 4,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One scenario: inputs plus the three most recently generated curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub name: String,
    /// Where the scenario was last loaded from or saved to.
    pub source_file: String,
    /// Anodic current density i0 (A/m²).
    pub current_density: Option<f64>,
    /// Yield strength σ0 (MPa).
    pub yield_strength: Option<f64>,
    /// Threshold stress intensity factor K0 (MPa·√m).
    pub threshold_sif: Option<f64>,
    /// Wall thickness w (m).
    pub wall_thickness: Option<f64>,
    /// Initial crack depth a0 (m).
    pub init_depth: Option<f64>,
    /// Applied stress σ (MPa).
    pub stress: Option<f64>,
    pub time_begin: Option<f64>,
    pub time_end: Option<f64>,
    pub time_step: Option<f64>,
    pub depth_begin: Option<f64>,
    pub depth_end: Option<f64>,
    pub depth_step: Option<f64>,
    pub stress_if_begin: Option<f64>,
    pub stress_if_end: Option<f64>,
    pub stress_if_step: Option<f64>,
    #[serde(skip)]
    pub cgr: Vec<CurvePoint>,
    #[serde(skip)]
    pub sif: Vec<CurvePoint>,
    #[serde(skip)]
    pub ccd: Vec<CurvePoint>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet {
            name: String::new(),
            source_file: String::new(),
            current_density: Some(200.0),
            yield_strength: Some(384.0),
            threshold_sif: Some(20.0),
            wall_thickness: Some(16e-3),
            init_depth: Some(1.5e-3),
            stress: Some(250.0),
            time_begin: Some(0.0),
            time_end: Some(years_to_seconds(3.0)),
            time_step: Some(years_to_seconds(0.03)),
            depth_begin: Some(0.0),
            depth_end: Some(4e-3),
            depth_step: Some(1e-5),
            stress_if_begin: Some(0.0),
            stress_if_end: Some(50.0),
            stress_if_step: Some(0.5),
            cgr: Vec::new(),
            sif: Vec::new(),
            ccd: Vec::new(),
        }
    }
}

impl ParameterSet {
    pub fn new(name: impl Into<String>) -> Self {
        ParameterSet {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Substeps per reported CCD sample. Fixed for every scenario.
    pub fn time_substep_count(&self) -> usize {
        TIME_SUBSTEP_COUNT
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::CurrentDensity => self.current_density,
            Field::YieldStrength => self.yield_strength,
            Field::ThresholdSif => self.threshold_sif,
            Field::WallThickness => self.wall_thickness,
            Field::InitDepth => self.init_depth,
            Field::Stress => self.stress,
            Field::TimeBegin => self.time_begin,
            Field::TimeEnd => self.time_end,
            Field::TimeStep => self.time_step,
            Field::DepthBegin => self.depth_begin,
            Field::DepthEnd => self.depth_end,
            Field::DepthStep => self.depth_step,
            Field::StressIfBegin => self.stress_if_begin,
            Field::StressIfEnd => self.stress_if_end,
            Field::StressIfStep => self.stress_if_step,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::CurrentDensity => &mut self.current_density,
            Field::YieldStrength => &mut self.yield_strength,
            Field::ThresholdSif => &mut self.threshold_sif,
            Field::WallThickness => &mut self.wall_thickness,
            Field::InitDepth => &mut self.init_depth,
            Field::Stress => &mut self.stress,
            Field::TimeBegin => &mut self.time_begin,
            Field::TimeEnd => &mut self.time_end,
            Field::TimeStep => &mut self.time_step,
            Field::DepthBegin => &mut self.depth_begin,
            Field::DepthEnd => &mut self.depth_end,
            Field::DepthStep => &mut self.depth_step,
            Field::StressIfBegin => &mut self.stress_if_begin,
            Field::StressIfEnd => &mut self.stress_if_end,
            Field::StressIfStep => &mut self.stress_if_step,
        };
        *slot = value;
    }

    /// Value of a field that a computation cannot do without.
    pub fn require(&self, field: Field) -> SccResult<f64> {
        self.get(field).ok_or(SccError::MissingParameter(field))
    }

    /// Field value in its display unit (mm, years or native).
    pub fn display_value(&self, field: Field) -> Option<f64> {
        self.get(field).map(|v| field.display_unit().to_display(v))
    }

    /// Set a field from a value given in its display unit.
    pub fn set_display_value(&mut self, field: Field, shown: Option<f64>) {
        let unit = field.display_unit();
        self.set(field, shown.map(|v| unit.from_display(v)));
    }

    /// Fields that are currently missing.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    pub fn curve(&self, kind: CurveKind) -> &[CurvePoint] {
        match kind {
            CurveKind::Cgr => &self.cgr,
            CurveKind::Sif => &self.sif,
            CurveKind::Ccd => &self.ccd,
        }
    }

    /// Load a scenario from JSON. Keys that are absent take default values,
    /// keys set to `null` stay missing.
    pub fn from_json_file(path: impl AsRef<Path>) -> SccResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        Ok(params)
    }

    pub fn to_json_pretty(&self) -> SccResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Scenario built from values in display units, in [`Field::ALL`] order.
    pub fn from_display_values(name: &str, shown: [f64; 15]) -> Self {
        let mut params = ParameterSet::new(name);
        for (field, value) in Field::ALL.into_iter().zip(shown) {
            params.set_display_value(field, Some(value));
        }
        params
    }
}
