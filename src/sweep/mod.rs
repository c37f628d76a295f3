//! # Sweep
//!
//! Sequential bias sweeps. The outgoing polarization of each operating point is the
//! incoming polarization of the next, so a single trace is an explicit fold over the
//! bias schedule and must not be parallelised. Independent devices carry independent
//! polarization threads and are swept in parallel.

use crate::device::DeviceParameters;
use crate::error::ModelError;
use crate::operating_point::{evaluate, Bias};
use crate::switching::Polarization;
use itertools::Itertools;
use nalgebra::RealField;
use rayon::prelude::*;

/// One emitted point of a sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepRecord<T> {
    /// The two-terminal bias in V
    pub voltage: T,
    /// Magnitude of the tunneling current in A
    pub current: T,
    /// The polarization state after this point
    pub polarization: Polarization,
    /// Creep delay of a switching event at this point, if one occurred
    pub switching_delay: Option<T>,
}

/// Scans the bias schedule sequentially, threading the polarization state.
///
/// Fails on the first degenerate point; no partial trace is returned.
pub fn scan<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    schedule: &[Bias<T>],
    initial: Polarization,
) -> Result<Vec<SweepRecord<T>>, ModelError> {
    let (records, _) = schedule.iter().try_fold(
        (Vec::with_capacity(schedule.len()), initial),
        |(mut records, polarization), &bias| {
            let point = evaluate(device, bias, polarization)?;
            tracing::debug!(
                "bias point solved: {} state after evaluation",
                point.polarization
            );
            records.push(SweepRecord {
                voltage: point.voltage,
                current: point.current,
                polarization: point.polarization,
                switching_delay: point.switching_delay,
            });
            Ok::<_, ModelError>((records, point.polarization))
        },
    )?;
    Ok(records)
}

/// Scans several independent devices in parallel, each over the same schedule
pub fn scan_devices<T: Copy + RealField + Send + Sync>(
    devices: &[DeviceParameters<T>],
    schedule: &[Bias<T>],
    initial: Polarization,
) -> Result<Vec<Vec<SweepRecord<T>>>, ModelError> {
    devices
        .par_iter()
        .map(|device| scan(device, schedule, initial))
        .collect()
}

/// Number of polarization flips along a trace
pub fn transition_count<T>(records: &[SweepRecord<T>]) -> usize {
    records
        .iter()
        .map(|record| record.polarization)
        .tuple_windows()
        .filter(|(previous, next)| previous != next)
        .count()
}

/// The four-segment terminal-1 schedule of a full hysteresis loop: up, back down,
/// through zero to the opposite extreme, and back
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
pub fn hysteresis_schedule<T: Copy + RealField>() -> Vec<Bias<T>> {
    let rising = linspace(0.1, 1.9, 19);
    let falling: Vec<T> = linspace(0.1, 1.8, 18).into_iter().rev().collect();
    rising
        .iter()
        .chain(falling.iter())
        .copied()
        .chain(rising.iter().map(|&v| -v))
        .chain(falling.iter().map(|&v| -v))
        .map(Bias::grounded)
        .collect()
}

/// A single monotone terminal-1 sweep with terminal 2 grounded
pub fn trace_schedule<T: Copy + RealField>(start: T, stop: T, points: usize) -> Vec<Bias<T>> {
    linspace(start, stop, points)
        .into_iter()
        .map(Bias::grounded)
        .collect()
}

pub(crate) fn linspace<T: Copy + RealField>(start: T, end: T, points: usize) -> Vec<T> {
    assert!(points > 1, "A voltage schedule needs at least two points");
    let step = (end - start) / T::from_usize(points - 1).unwrap();
    (0..points)
        .map(|i| start + step * T::from_usize(i).unwrap())
        .collect()
}
