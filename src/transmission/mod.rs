//! # Transmission
//!
//! The WKB tunneling current integrator. Electrons tunnel between two 2D reservoirs
//! through the trapezoidal barrier fixed by the interface state. At each energy on a
//! fixed 1001-point window the semiclassical transmission probability is weighted by
//! the occupation difference of the reservoirs, and the rectangle-rule sum gives the
//! net current density through the junction area.

use crate::constants::{
    ELECTRON_CHARGE, ELECTRON_MASS, HBAR, SPECTRUM_POINTS, THERMAL_ENERGY, UNIT_BOOKKEEPING,
};
use crate::device::DeviceParameters;
use crate::electrostatics::InterfaceState;
use crate::error::ModelError;
use crate::spectral::EnergyGrid;
use nalgebra::RealField;

/// Integrated occupation of a 2D electron reservoir at energy `x` above its Fermi
/// level, in units of kT.
///
/// This is `ln(1 + exp(-x/kT))`, written so energies deep below the Fermi level do not
/// overflow the exponential.
pub(crate) fn occupation<T: Copy + RealField>(energy: T, thermal_energy: T) -> T {
    let reduced = -energy / thermal_energy;
    reduced.max(T::zero()) + (-reduced.abs()).exp().ln_1p()
}

/// Net tunneling current magnitude through the junction at one operating point.
///
/// The energy window spans from five thermal energies below the lowest Fermi level up
/// to the taller barrier. A vanishing field across the ferroelectric layer leaves the
/// transmission exponent undefined and is reported as [`ModelError::DegenerateField`].
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
pub fn tunneling_current<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    interfaces: &InterfaceState<T>,
    bias: T,
) -> Result<T, ModelError> {
    if interfaces.field == T::zero() {
        return Err(ModelError::DegenerateField);
    }

    let thermal_energy = T::from_f64(THERMAL_ENERGY).expect("Thermal energy must fit in T");
    let charge = T::from_f64(ELECTRON_CHARGE).expect("Electron charge must fit in T");
    let mass = T::from_f64(ELECTRON_MASS).expect("Electron mass must fit in T");
    let hbar = T::from_f64(HBAR).expect("hbar must fit in T");
    let two_pi = 2.0 * T::pi();

    let area = T::pi() * device.radius * device.radius;
    // Sheet density of states of the transverse 2D reservoir
    let density_2d =
        2.0 * device.transverse_mass * mass * thermal_energy * charge / (two_pi * hbar * hbar);
    // Conductance quantum
    let conductance = charge * charge / (two_pi * hbar);

    let fermi_1 = -bias;
    let fermi_2 = T::zero();
    let window_floor = T::zero().min(fermi_1).min(fermi_2) - 5.0 * thermal_energy;
    let window_ceiling = interfaces.barrier_1.max(interfaces.barrier_2);
    let grid = EnergyGrid::new(window_floor..window_ceiling, SPECTRUM_POINTS);

    let exponent_scale = 4.0 * (2.0 * device.longitudinal_mass * mass * charge).sqrt()
        / (3.0 * hbar * interfaces.field.abs());

    let mut spectrum = T::zero();
    for energy in grid.points() {
        let upper = (interfaces.barrier_1 - energy).max(T::zero()).powf(1.5);
        let lower = (interfaces.barrier_2 - energy).max(T::zero()).powf(1.5);
        let transmission = (-exponent_scale * (upper - lower).abs()).exp();
        spectrum -= conductance
            * transmission
            * (occupation(energy - fermi_1, thermal_energy)
                - occupation(energy - fermi_2, thermal_energy));
    }

    let points = T::from_usize(SPECTRUM_POINTS).unwrap();
    let bookkeeping = T::from_f64(UNIT_BOOKKEEPING).expect("Bookkeeping factor must fit in T");
    let current = area * density_2d * spectrum / points * bookkeeping * grid.width() / bookkeeping;
    Ok(current.abs())
}

#[cfg(test)]
mod test {
    use super::{occupation, tunneling_current};
    use crate::device::DeviceParameters;
    use crate::electrostatics::{partition, InterfaceState};
    use crate::error::ModelError;
    use crate::switching::Polarization;
    use approx::assert_relative_eq;

    const KT: f64 = 0.0259;

    #[test]
    fn occupation_matches_the_naive_form_at_moderate_energies() {
        for energy in [-0.2_f64, -0.05, 0.0, 0.05, 0.2] {
            let naive = (1.0 + (-energy / KT).exp()).ln();
            assert_relative_eq!(occupation(energy, KT), naive, epsilon = 1e-12);
        }
    }

    #[test]
    fn occupation_does_not_overflow_deep_below_the_fermi_level() {
        let value = occupation(-30.0, KT);
        assert!(value.is_finite());
        // Far below the Fermi level the occupation goes over to the linear tail
        assert_relative_eq!(value, 30.0 / KT, epsilon = 1e-9);
    }

    #[test]
    fn zero_bias_drives_no_current() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let interfaces = partition(&device, 0.0, Polarization::HighResistance);
        let current = tunneling_current(&device, &interfaces, 0.0).unwrap();
        assert_relative_eq!(current, 0.0);
    }

    #[test]
    fn degenerate_field_is_reported_not_propagated() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let interfaces = InterfaceState {
            v1: 0.0,
            v2: 0.0,
            barrier_1: 1.2,
            barrier_2: 1.2,
            field: 0.0,
            injected_charge: None,
        };
        let result = tunneling_current(&device, &interfaces, 0.0);
        assert!(matches!(result, Err(ModelError::DegenerateField)));
    }

    #[test]
    fn small_bias_drives_a_small_finite_current() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let bias = -0.1;
        let interfaces = partition(&device, bias, Polarization::HighResistance);
        let current = tunneling_current(&device, &interfaces, bias).unwrap();
        assert!(current.is_finite());
        assert!(current > 0.0);
        assert!(current < 1e-6);
    }
}
