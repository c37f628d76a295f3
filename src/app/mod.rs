/// This module governs the high-level implementation of the simulation
mod calculations;
mod configuration;
mod error;
mod styles;
mod telemetry;

pub(crate) use configuration::Configuration;

use crate::device::DeviceParameters;
use clap::{ArgEnum, Parser};
use color_eyre::eyre::eyre;
use nalgebra::RealField;
use num_traits::ToPrimitive;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    file_path: Option<PathBuf>,
    #[clap(arg_enum, short, long)]
    log_level: LogLevel,
    #[clap(arg_enum, short, long)]
    calculation: Calculation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum LogLevel {
    Trace,
    Info,
    Debug,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum Calculation {
    Hysteresis,
    Trace,
}

/// Parses the command line, loads the run configuration and the device description,
/// and runs the requested sweep
pub fn run<T>() -> color_eyre::Result<()>
where
    T: Copy + DeserializeOwned + RealField + ToPrimitive + Send + Sync,
{
    let cli = App::parse();

    std::fs::create_dir_all("results")?;
    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level);
    telemetry::init_subscriber(subscriber);

    let config: Configuration<T> = Configuration::build()?;

    let path = cli
        .file_path
        .ok_or(eyre!("A device file path needs to be passed."))?;
    let device: DeviceParameters<T> = DeviceParameters::build(path)?;
    device.validate()?;

    let term = console::Term::stdout();
    match cli.calculation {
        Calculation::Hysteresis => calculations::hysteresis(&device, &config, &term)?,
        Calculation::Trace => calculations::trace(&device, &config, &term)?,
    }

    Ok(())
}
