//! # Calculations
//!
//! Delegated functions from `App` to run the bias sweeps and persist their traces
//!

use super::{error::FerrojunctionError, styles::Styles, Configuration};
use crate::device::DeviceParameters;
use crate::switching::Polarization;
use crate::sweep::{self, SweepRecord};
use nalgebra::RealField;
use num_traits::ToPrimitive;
use owo_colors::OwoColorize;
use std::fs;
use std::io::Write;
use std::path::Path;

pub(crate) fn hysteresis<T>(
    device: &DeviceParameters<T>,
    config: &Configuration<T>,
    term: &console::Term,
) -> Result<(), FerrojunctionError>
where
    T: Copy + RealField + ToPrimitive,
{
    let mut styles = Styles::default();
    if console::colors_enabled() {
        styles.colorize();
    }
    term.write_line(&format!(
        "Hysteresis loop of a {} junction",
        device.structure.style(styles.device_style)
    ))?;
    tracing::info!("Hysteresis calculation");

    let initial = Polarization::try_from_sign(config.sweep.initial_polarization)?;
    let schedule = sweep::hysteresis_schedule::<T>();
    let records = sweep::scan(device, &schedule, initial)?;
    tracing::info!(
        "Loop closed with {} switching events",
        sweep::transition_count(&records)
    );

    write_records(Path::new(&config.output.directory), "hysteresis.csv", &records)
}

pub(crate) fn trace<T>(
    device: &DeviceParameters<T>,
    config: &Configuration<T>,
    term: &console::Term,
) -> Result<(), FerrojunctionError>
where
    T: Copy + RealField + ToPrimitive,
{
    let mut styles = Styles::default();
    if console::colors_enabled() {
        styles.colorize();
    }
    term.write_line(&format!(
        "Single trace of a {} junction",
        device.structure.style(styles.device_style)
    ))?;
    tracing::info!("Single trace calculation");

    let initial = Polarization::try_from_sign(config.sweep.initial_polarization)?;
    let schedule = sweep::trace_schedule(config.sweep.start, config.sweep.stop, config.sweep.points);
    let records = sweep::scan(device, &schedule, initial)?;

    write_records(Path::new(&config.output.directory), "trace.csv", &records)
}

fn write_records<T>(
    directory: &Path,
    name: &str,
    records: &[SweepRecord<T>],
) -> Result<(), FerrojunctionError>
where
    T: Copy + RealField + ToPrimitive,
{
    fs::create_dir_all(directory)?;
    let mut file = fs::File::create(directory.join(name))?;
    writeln!(file, "voltage,current,polarization,switching_delay")?;
    for record in records {
        let delay = record
            .switching_delay
            .and_then(|delay| delay.to_f64())
            .map(|delay| format!("{:e}", delay))
            .unwrap_or_default();
        writeln!(
            file,
            "{:e},{:e},{},{}",
            record.voltage.to_f64().unwrap_or(f64::NAN),
            record.current.to_f64().unwrap_or(f64::NAN),
            record.polarization.sign::<f64>(),
            delay
        )?;
    }
    Ok(())
}
