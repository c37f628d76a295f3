// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! The error type for the device model

use miette::Diagnostic;

/// Domain errors raised by a single operating-point evaluation.
///
/// All variants are precondition violations local to one call. None are recoverable
/// internally, and no partial results are returned alongside them.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ModelError {
    /// The interface barriers are level, so the field across the ferroelectric layer
    /// vanishes and the transmission exponent is undefined
    #[error("degenerate field: the interface barriers are level and the transmission is undefined")]
    #[diagnostic(code(ferrojunction::degenerate_field))]
    DegenerateField,
    /// The incoming polarization was not exactly -1 or +1
    #[error("polarization must be exactly -1 or +1, got {0}")]
    #[diagnostic(code(ferrojunction::invalid_polarization))]
    InvalidPolarization(f64),
    /// A device parameter failed validation on load
    #[error("invalid device parameter: {0}")]
    #[diagnostic(code(ferrojunction::invalid_parameter))]
    InvalidParameter(String),
}
