// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines physical constants used in the simulation

pub const THERMAL_ENERGY: f64 = 0.0259; // kT at 300 K in eV, fixed in the occupation functions
pub const ELECTRON_CHARGE: f64 = 1.6e-19; // Single electron charge in C
pub const ELECTRON_MASS: f64 = 9.11e-31; // Single electron mass in kg
pub const EPSILON_0: f64 = 8.854e-12; // Permitivitty of free space in F / m
pub const HBAR: f64 = 1.055e-34; // Reduced Planck constant
pub const SCREENING_LENGTH: f64 = 0.165e-9; // Normalised screening length of the two terminals in m

// The transmission quadrature runs over a fixed grid of 1001 energies. The accumulated
// spectrum is normalised per-point, and the bookkeeping factor pairs the millivolt
// energy step with the ampere output. The pair must stay in the current expression in
// this exact order to keep the normalisation bit-identical.
pub const SPECTRUM_POINTS: usize = 1001;
pub const UNIT_BOOKKEEPING: f64 = 1000.0;
