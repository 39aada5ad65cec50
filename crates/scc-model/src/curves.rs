// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Curve Generator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! CGR, SIF and CCD sweeps over a [`ParameterSet`].
//!
//! Each sweep clears its curve and rebuilds it from scratch. Sweep
//! variables advance by plain repeated addition, so accumulated rounding
//! decides the last sample exactly as it would in a hand-written loop.
//! Non-finite model values are written into the curve as they come.

use scc_types::constants::DEPTH_LIMIT_FRACTION;
use scc_types::curve::{CurveKind, CurvePoint};
use scc_types::error::{SccError, SccResult};
use scc_types::params::{Field, ParameterSet};
use scc_types::units::{meters_to_millimeters, seconds_to_years, MPS_TO_MM_PER_YEAR};
use tracing::debug;

use crate::degradation::{crack_growth_rate, stress_intensity_factor};

/// Why a sweep stopped emitting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The sweep variable passed the end of its range.
    RangeEnd,
    /// The crack depth reached the model validity bound (0.9 of the wall).
    DepthBound,
}

/// Summary of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    pub points: usize,
    pub stop: StopReason,
}

/// A non-empty range must be crossed in finitely many steps: the step has to
/// move the sweep variable at both ends of the range, where float spacing is
/// widest. Rejects non-positive and NaN steps, steps lost to rounding, and an
/// infinite end.
fn check_step(begin: f64, end: f64, step: f64, field: Field) -> SccResult<()> {
    let advances = begin + step > begin && end + step > end;
    if begin <= end && !advances {
        return Err(SccError::InvalidStep(field));
    }
    Ok(())
}

/// Crack growth rate (mm/year) against stress intensity factor.
pub fn calculate_cgr(params: &mut ParameterSet) -> SccResult<SweepOutcome> {
    params.cgr.clear();
    let begin = params.require(Field::StressIfBegin)?;
    let end = params.require(Field::StressIfEnd)?;
    let step = params.require(Field::StressIfStep)?;
    let k0 = params.require(Field::ThresholdSif)?;
    let i0 = params.require(Field::CurrentDensity)?;
    let s0 = params.require(Field::YieldStrength)?;
    check_step(begin, end, step, Field::StressIfStep)?;

    let mut k = begin;
    while k <= end {
        let rate = crack_growth_rate(k, k0, i0, s0) * MPS_TO_MM_PER_YEAR;
        params.cgr.push(CurvePoint::new(k, rate));
        k += step;
    }

    let outcome = SweepOutcome {
        points: params.cgr.len(),
        stop: StopReason::RangeEnd,
    };
    debug!(curve = %CurveKind::Cgr, points = outcome.points, stop = ?outcome.stop, "sweep finished");
    Ok(outcome)
}

/// Stress intensity factor against crack depth (mm). Stops for good at the
/// first depth at or beyond the validity bound.
pub fn calculate_sif(params: &mut ParameterSet) -> SccResult<SweepOutcome> {
    params.sif.clear();
    let begin = params.require(Field::DepthBegin)?;
    let end = params.require(Field::DepthEnd)?;
    let step = params.require(Field::DepthStep)?;
    let w = params.require(Field::WallThickness)?;
    let s = params.require(Field::Stress)?;
    check_step(begin, end, step, Field::DepthStep)?;

    let depth_limit = DEPTH_LIMIT_FRACTION * w;

    let mut stop = StopReason::RangeEnd;
    let mut a = begin;
    while a <= end {
        if a >= depth_limit {
            stop = StopReason::DepthBound;
            break;
        }
        params
            .sif
            .push(CurvePoint::new(meters_to_millimeters(a), stress_intensity_factor(a, w, s)));
        a += step;
    }

    let outcome = SweepOutcome {
        points: params.sif.len(),
        stop,
    };
    debug!(curve = %CurveKind::Sif, points = outcome.points, stop = ?outcome.stop, "sweep finished");
    Ok(outcome)
}

/// Crack depth (mm) against time (years) by forward Euler.
///
/// Physics advances in substeps of `time_step / time_substep_count`; a
/// sample is reported before every substep whose index is a multiple of
/// the substep count, starting with substep 0. Integration stops, without
/// clamping, as soon as the depth exceeds the validity bound.
pub fn calculate_ccd(params: &mut ParameterSet) -> SccResult<SweepOutcome> {
    params.ccd.clear();
    let a0 = params.require(Field::InitDepth)?;
    let w = params.require(Field::WallThickness)?;
    let s = params.require(Field::Stress)?;
    let k0 = params.require(Field::ThresholdSif)?;
    let i0 = params.require(Field::CurrentDensity)?;
    let s0 = params.require(Field::YieldStrength)?;
    let t_begin = params.require(Field::TimeBegin)?;
    let t_end = params.require(Field::TimeEnd)?;
    let t_step = params.require(Field::TimeStep)?;
    let substeps = params.time_substep_count();
    let ts = t_step / substeps as f64;
    check_step(t_begin, t_end, ts, Field::TimeStep)?;

    let depth_limit = DEPTH_LIMIT_FRACTION * w;
    let mut stop = StopReason::RangeEnd;
    let mut a = a0;
    let mut t = t_begin;
    let mut i: usize = 0;
    while t <= t_end {
        if a > depth_limit {
            stop = StopReason::DepthBound;
            break;
        }
        if i % substeps == 0 {
            params
                .ccd
                .push(CurvePoint::new(seconds_to_years(t), meters_to_millimeters(a)));
        }
        let k = stress_intensity_factor(a, w, s);
        let v = crack_growth_rate(k, k0, i0, s0);
        a += v * ts;
        t += ts;
        i += 1;
    }

    let outcome = SweepOutcome {
        points: params.ccd.len(),
        stop,
    };
    debug!(
        curve = %CurveKind::Ccd,
        points = outcome.points,
        substeps = i,
        stop = ?outcome.stop,
        "integration finished"
    );
    Ok(outcome)
}

/// Run the sweep that produces `kind`.
pub fn calculate(params: &mut ParameterSet, kind: CurveKind) -> SccResult<SweepOutcome> {
    match kind {
        CurveKind::Cgr => calculate_cgr(params),
        CurveKind::Sif => calculate_sif(params),
        CurveKind::Ccd => calculate_ccd(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scc_types::units::years_to_seconds;

    #[test]
    fn test_cgr_below_threshold_all_zero() {
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(0.0);
        p.stress_if_end = Some(10.0);
        p.stress_if_step = Some(0.5);
        p.threshold_sif = Some(20.0);
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 21);
        assert!(p.cgr.iter().all(|pt| pt.y == 0.0));
        assert_eq!(p.cgr[20].x, 10.0);
    }

    #[test]
    fn test_cgr_default_sweep() {
        let mut p = ParameterSet::default();
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 101);
        assert_eq!(out.stop, StopReason::RangeEnd);
        // k = 20.5 is the first sample above threshold
        assert_eq!(p.cgr[40].y, 0.0);
        assert!((p.cgr[41].y - 0.29306663773108454).abs() < 1e-9);
        assert!((p.cgr[100].y - 4.911199892779297).abs() < 1e-9);
    }

    #[test]
    fn test_cgr_accumulates_without_rebasing() {
        // 0.1 added ten times is 0.9999999999999999, so 1.0 itself is never
        // reached and the eleventh sample sits just below it.
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(0.0);
        p.stress_if_end = Some(1.0);
        p.stress_if_step = Some(0.1);
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 11);
        assert!(p.cgr[10].x < 1.0);
        assert!((p.cgr[3].x - 0.30000000000000004).abs() < 1e-18);
    }

    #[test]
    fn test_cgr_keeps_non_finite_samples() {
        let mut p = ParameterSet::default();
        p.threshold_sif = Some(19.99);
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 101);
        assert!(p.cgr[40].y.is_nan(), "k = 20 sits in the log-negative band");
        assert!(p.cgr[41].y.is_finite());
    }

    #[test]
    fn test_cgr_reversed_range_is_empty() {
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(30.0);
        p.stress_if_end = Some(10.0);
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 0);
        assert!(p.cgr.is_empty());
    }

    #[test]
    fn test_recalculation_replaces_previous_curve() {
        let mut p = ParameterSet::default();
        calculate_cgr(&mut p).unwrap();
        p.stress_if_end = Some(5.0);
        calculate_cgr(&mut p).unwrap();
        assert_eq!(p.cgr.len(), 11);
    }

    #[test]
    fn test_sif_stops_at_depth_bound() {
        let mut p = ParameterSet::default();
        p.depth_begin = Some(0.0);
        p.depth_end = Some(20e-3);
        p.depth_step = Some(1e-3);
        p.wall_thickness = Some(16e-3);
        let out = calculate_sif(&mut p).unwrap();
        assert_eq!(out.stop, StopReason::DepthBound);
        assert_eq!(out.points, 15);
        assert!(p.sif.iter().all(|pt| pt.x < 14.4));
    }

    #[test]
    fn test_sif_default_sweep_drift() {
        // 0.01 mm steps accumulate to just over 4 mm, dropping the last sample.
        let mut p = ParameterSet::default();
        let out = calculate_sif(&mut p).unwrap();
        assert_eq!(out.points, 400);
        assert_eq!(out.stop, StopReason::RangeEnd);
        assert_eq!(p.sif[0], CurvePoint::new(0.0, 0.0));
    }

    #[test]
    fn test_sif_begin_past_bound_is_empty() {
        let mut p = ParameterSet::default();
        p.depth_begin = Some(15e-3);
        p.depth_end = Some(16e-3);
        let out = calculate_sif(&mut p).unwrap();
        assert_eq!(out.points, 0);
        assert_eq!(out.stop, StopReason::DepthBound);
    }

    #[test]
    fn test_ccd_default_hits_depth_bound() {
        let mut p = ParameterSet::default();
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.stop, StopReason::DepthBound);
        assert_eq!(out.points, 80);
        assert_eq!(p.ccd[0], CurvePoint::new(0.0, 1.5));
        let last = p.ccd.last().unwrap();
        assert!(last.y < 14.4);
        assert!((last.x - 2.37).abs() < 1e-6);
    }

    #[test]
    fn test_ccd_reports_every_substep_block() {
        let mut p = ParameterSet::default();
        p.current_density = Some(20.0);
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.stop, StopReason::RangeEnd);
        assert_eq!(out.points, 101);
        for pair in p.ccd.windows(2) {
            assert!(pair[1].y >= pair[0].y);
            assert!((pair[1].x - pair[0].x - 0.03).abs() < 1e-9);
        }
        assert!(p.ccd[100].y > 1.5);
    }

    #[test]
    fn test_ccd_below_threshold_depth_constant() {
        let mut p = ParameterSet::default();
        p.threshold_sif = Some(100.0);
        p.time_end = Some(years_to_seconds(1.0));
        p.time_step = Some(years_to_seconds(0.1));
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.points, 11);
        assert!(p.ccd.iter().all(|pt| pt.y == 1.5));
    }

    #[test]
    fn test_ccd_non_finite_depth_runs_to_time_end() {
        // K(a0) = 20.01 lands in the log-negative band: depth turns NaN and
        // the loop only ends on the time bound.
        let mut p = ParameterSet::default();
        p.stress = Some(245.3);
        p.time_end = Some(years_to_seconds(0.3));
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.stop, StopReason::RangeEnd);
        assert_eq!(out.points, 11);
        assert_eq!(p.ccd[0].y, 1.5);
        assert!(p.ccd[0].is_finite());
        assert!(p.ccd[1..].iter().all(|pt| pt.y.is_nan() && !pt.is_finite()));
    }

    #[test]
    fn test_ccd_initial_depth_past_bound_emits_nothing() {
        let mut p = ParameterSet::default();
        p.init_depth = Some(15e-3);
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.points, 0);
        assert_eq!(out.stop, StopReason::DepthBound);
    }

    #[test]
    fn test_missing_field_leaves_curve_empty() {
        let mut p = ParameterSet::default();
        calculate_ccd(&mut p).unwrap();
        assert!(!p.ccd.is_empty());
        p.init_depth = None;
        let err = calculate_ccd(&mut p).unwrap_err();
        assert!(matches!(err, SccError::MissingParameter(Field::InitDepth)));
        assert!(p.ccd.is_empty());
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut p = ParameterSet::default();
        p.depth_step = Some(0.0);
        let err = calculate_sif(&mut p).unwrap_err();
        assert!(matches!(err, SccError::InvalidStep(Field::DepthStep)));
    }

    #[test]
    fn test_step_lost_to_rounding_rejected() {
        // 1e17 + 1 == 1e17: the sweep variable would never move.
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(1e17);
        p.stress_if_end = Some(1e17 + 100.0);
        p.stress_if_step = Some(1.0);
        let err = calculate_cgr(&mut p).unwrap_err();
        assert!(matches!(err, SccError::InvalidStep(Field::StressIfStep)));
        assert!(p.cgr.is_empty());
    }

    #[test]
    fn test_step_stalling_before_range_end_rejected() {
        // Starts fine but stops advancing at 2^53, long before the end.
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(0.0);
        p.stress_if_end = Some(1e17);
        p.stress_if_step = Some(1.0);
        assert!(matches!(
            calculate_cgr(&mut p),
            Err(SccError::InvalidStep(Field::StressIfStep))
        ));
    }

    #[test]
    fn test_infinite_range_end_rejected() {
        let mut p = ParameterSet::default();
        p.depth_end = Some(f64::INFINITY);
        assert!(matches!(
            calculate_sif(&mut p),
            Err(SccError::InvalidStep(Field::DepthStep))
        ));
    }

    #[test]
    fn test_substep_lost_to_rounding_rejected() {
        // One year in 1e4 substeps is 3153.6 s, below the spacing at 1e20 s.
        let mut p = ParameterSet::default();
        p.time_begin = Some(1e20);
        p.time_end = Some(1e20 + years_to_seconds(3.0));
        p.time_step = Some(years_to_seconds(1.0));
        assert!(matches!(
            calculate_ccd(&mut p),
            Err(SccError::InvalidStep(Field::TimeStep))
        ));
    }

    #[test]
    fn test_negative_range_with_usable_step() {
        let mut p = ParameterSet::default();
        p.stress_if_begin = Some(-2.0);
        p.stress_if_end = Some(0.0);
        p.stress_if_step = Some(0.5);
        let out = calculate_cgr(&mut p).unwrap();
        assert_eq!(out.points, 5);
    }

    #[test]
    fn test_zero_step_on_empty_range_is_fine() {
        let mut p = ParameterSet::default();
        p.time_begin = Some(10.0);
        p.time_end = Some(0.0);
        p.time_step = Some(0.0);
        let out = calculate_ccd(&mut p).unwrap();
        assert_eq!(out.points, 0);
    }

    #[test]
    fn test_calculate_dispatch() {
        let mut p = ParameterSet::default();
        for kind in CurveKind::ALL {
            let out = calculate(&mut p, kind).unwrap();
            assert_eq!(out.points, p.curve(kind).len());
        }
    }
}
