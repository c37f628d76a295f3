// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Ferrojunction is a ferroelectric tunneling junction device model written in Rust
//!
//! # Overview
//! A ferroelectric tunneling junction (FTJ) is a two-terminal device in which a thin
//! ferroelectric film is sandwiched between two electrodes. The remnant polarization of
//! the film sets a non-volatile resistance state: electrons tunnel through the film, and
//! the tunneling probability depends on the barrier profile, which the polarization
//! charge distorts. Ferrojunction evaluates a single quasi-static operating point per
//! call: it partitions the applied bias across the device interfaces, integrates the
//! WKB transmission probability over a discrete energy window to find the tunneling
//! current, and updates the polarization state against the coercive voltages given by
//! the modified JKD scaling law. Switching kinetics (Merz's law and the creep process
//! model) yield a nucleation-and-growth delay which is reported alongside the state.
//!
//! Every evaluation is a pure function of the terminal voltages, the device parameters
//! and the incoming polarization. A voltage sweep is a sequential fold threading the
//! polarization from one bias point to the next; independent devices can be swept in
//! parallel.
//!
//! # Usage
//! Ferrojunction is distributed as a binary crate, and is intended to be run from the
//! command line. To run the software first define a device in a `.toml` file:
//!
//! ```toml
//! structure = "MetalFeMetal"
//! radius = 250e-9
//! thickness = 4e-9
//! dielectric_constant = 10.0
//! transverse_mass = 0.5
//! longitudinal_mass = 0.95
//! barrier_height_1 = 1.4
//! barrier_height_2 = 1.0
//! contact_capacitance_1 = 0.45
//! contact_capacitance_2 = 0.35
//! quantum_capacitance = 0.26
//! scaling_factor = 1650.0
//! spontaneous_polarization = 0.07
//! nucleation_attempt_time = 2.8e-15
//! growth_attempt_time = 2.25e-13
//! nucleation_barrier = 6.18e9
//! growth_barrier = 4.64e9
//! temperature = 300.0
//! reference_temperature = 300.0
//! ```
//!
//! then sweep it with `ferrojunction device.toml -l info -c hysteresis`.

#![warn(missing_docs)]
#![allow(dead_code)]

/// The command line global application, tracing and display primitives
pub mod app;

/// Physical constants
mod constants;

/// Device parameters and their deserialization
pub mod device;

/// The electrostatic partition of the applied bias across the junction
pub mod electrostatics;

/// Error handling
mod error;

/// The single operating-point evaluation
pub mod operating_point;

/// Discrete energy window for the transmission quadrature
mod spectral;

/// Coercive-voltage switching and creep kinetics
pub mod switching;

/// The WKB tunneling current integrator
pub mod transmission;

/// Sequential bias sweeps threading the polarization state
pub mod sweep;

pub use device::{DeviceParameters, Structure};
pub use error::ModelError;
pub use operating_point::{evaluate, Bias, OperatingPoint};
pub use switching::Polarization;
