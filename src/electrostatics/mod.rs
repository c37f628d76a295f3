//! # Electrostatics
//!
//! Partitions the applied two-terminal bias across the junction. The ferroelectric
//! layer and the two contacts form a capacitive divider which, together with the
//! polarization charge, fixes the potential at each interface. The interface potentials
//! shift the barrier heights seen by a tunneling electron and set the field across the
//! ferroelectric layer.

use crate::constants::EPSILON_0;
use crate::device::{DeviceParameters, Structure};
use crate::switching::Polarization;
use nalgebra::RealField;

/// The solved internal electrostatic configuration at one bias point
#[derive(Debug, Clone, Copy)]
pub struct InterfaceState<T> {
    /// Potential at the near interface in V
    pub v1: T,
    /// Potential at the far interface in V
    pub v2: T,
    /// Barrier height at the near interface, offset by the local potential, in eV
    pub barrier_1: T,
    /// Barrier height at the far interface, offset by the local potential, in eV
    pub barrier_2: T,
    /// Electric field across the ferroelectric layer in V / m
    pub field: T,
    /// Charge injected into the graphene contact, for the graphene structure only
    pub injected_charge: Option<T>,
}

/// Solves the capacitive divider for the interface potentials at the given bias.
///
/// The polarization charge term `Pp = P·Pr - Cf·Vb` enters with the sign of the
/// incoming polarization state, so the same bias produces different barrier profiles
/// on the two resistance branches.
pub fn partition<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    bias: T,
    polarization: Polarization,
) -> InterfaceState<T> {
    let epsilon_0 = T::from_f64(EPSILON_0).expect("Vacuum permittivity must fit in T");
    let cf = device.dielectric_constant * epsilon_0 / device.thickness;
    let beta = device.contact_capacitance_2 / (device.contact_capacitance_2 + cf);
    let sign: T = polarization.sign();
    let pp = sign * device.spontaneous_polarization - cf * bias;

    let (v1, v2, injected_charge) = match device.structure {
        Structure::MetalFeMetal => {
            let (v1, v2) = metal_fe_metal(device, bias, sign, cf);
            (v1, v2, None)
        }
        Structure::GrapheneFeMetal => {
            let (v1, v2, qg) = graphene_fe_metal(device, bias, sign, cf, beta, pp);
            (v1, v2, Some(qg))
        }
    };

    let barrier_1 = device.barrier_height_1 - v1;
    let barrier_2 = device.barrier_height_2 - v2;
    let field = (barrier_1 - barrier_2) / device.thickness;

    InterfaceState {
        v1,
        v2,
        barrier_1,
        barrier_2,
        field,
        injected_charge,
    }
}

/// Interface potentials for the metal-FE-metal structure.
///
/// Both potentials are linear in the bias and the polarization charge, weighted by the
/// series combination of the contact capacitances with the ferroelectric layer.
pub(crate) fn metal_fe_metal<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    bias: T,
    sign: T,
    cf: T,
) -> (T, T) {
    let cm0 = device.contact_capacitance_1;
    let cm = device.contact_capacitance_2;
    let pr = sign * device.spontaneous_polarization;
    let v1 = (cm0 * bias + pr + cf * cm0 / cm * bias) / (cm0 + cf + cf * cm0 / cm);
    let v2 = (cf * bias - pr) / (cm + cf + cf * cm / cm0);
    (v1, v2)
}

/// Interface potentials for the graphene-FE-metal structure.
///
/// The graphene quantum capacitance makes the charge balance at the near interface
/// quadratic in `V1`. The closed-form root branches on the sign of the polarization
/// charge term; both branches reduce to `V1 = Vb` at `Pp = 0`.
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
pub(crate) fn graphene_fe_metal<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    bias: T,
    sign: T,
    cf: T,
    beta: T,
    pp: T,
) -> (T, T, T) {
    let alpha = device.quantum_capacitance;
    let v1 = if pp > T::zero() {
        (-cf * beta + ((cf * beta).powi(2) + 2.0 * alpha * beta * pp).sqrt()) / alpha + bias
    } else {
        -((-cf * beta + ((cf * beta).powi(2) - 2.0 * alpha * beta * pp).sqrt()) / alpha) + bias
    };
    let injected_charge = 0.5 * alpha * (bias - v1).abs() * (bias - v1);
    let v2 = -sign * device.spontaneous_polarization / (cf + device.contact_capacitance_2)
        + (1.0 - beta) * v1;
    (v1, v2, injected_charge)
}

#[cfg(test)]
mod test {
    use super::{graphene_fe_metal, metal_fe_metal, partition};
    use crate::constants::EPSILON_0;
    use crate::device::{DeviceParameters, Structure};
    use crate::switching::Polarization;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn ferroelectric_capacitance(device: &DeviceParameters<f64>) -> f64 {
        device.dielectric_constant * EPSILON_0 / device.thickness
    }

    #[test]
    fn metal_solver_is_affine_in_the_bias() {
        let mut rng = rand::thread_rng();
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let cf = ferroelectric_capacitance(&device);
        let first: f64 = rng.gen();
        let second: f64 = rng.gen();
        let (v1_sum, v2_sum) = metal_fe_metal(&device, first + second, -1.0, cf);
        let (v1_first, v2_first) = metal_fe_metal(&device, first, -1.0, cf);
        let (v1_second, v2_second) = metal_fe_metal(&device, second, -1.0, cf);
        let (v1_rest, v2_rest) = metal_fe_metal(&device, 0.0, -1.0, cf);
        assert_relative_eq!(v1_sum, v1_first + v1_second - v1_rest, epsilon = 1e-12);
        assert_relative_eq!(v2_sum, v2_first + v2_second - v2_rest, epsilon = 1e-12);
    }

    #[test]
    fn metal_potentials_have_equal_magnitude_with_balanced_contacts_at_zero_bias() {
        let mut device: DeviceParameters<f64> = DeviceParameters::bto();
        device.contact_capacitance_1 = device.contact_capacitance_2;
        let cf = ferroelectric_capacitance(&device);
        let (v1, v2) = metal_fe_metal(&device, 0.0, -1.0, cf);
        assert_relative_eq!(v1, -v2);
    }

    #[test]
    fn graphene_branches_are_continuous_at_vanishing_polarization_charge() {
        let device = DeviceParameters::bto().with_structure(Structure::GrapheneFeMetal);
        let cf = ferroelectric_capacitance(&device);
        let beta = device.contact_capacitance_2 / (device.contact_capacitance_2 + cf);
        let bias = 0.4;
        let (above, _, _) = graphene_fe_metal(&device, bias, 1.0, cf, beta, 1e-12);
        let (below, _, _) = graphene_fe_metal(&device, bias, 1.0, cf, beta, -1e-12);
        assert_relative_eq!(above, below, epsilon = 1e-8);
        assert_relative_eq!(above, bias, epsilon = 1e-5);
    }

    #[test]
    fn polarization_sign_flips_the_polarization_charge_contribution() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let high = partition(&device, 0.0, Polarization::HighResistance);
        let low = partition(&device, 0.0, Polarization::LowResistance);
        assert_relative_eq!(high.v1, -low.v1);
        assert_relative_eq!(high.v2, -low.v2);
    }

    #[test]
    fn default_barriers_remain_asymmetric_at_zero_bias() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let state = partition(&device, 0.0, Polarization::HighResistance);
        assert!(state.field != 0.0);
    }

    #[test]
    fn injected_charge_is_reported_for_the_graphene_structure_only() {
        let metal: DeviceParameters<f64> = DeviceParameters::bto();
        let graphene = DeviceParameters::bto().with_structure(Structure::GrapheneFeMetal);
        assert!(partition(&metal, 0.2, Polarization::LowResistance)
            .injected_charge
            .is_none());
        assert!(partition(&graphene, 0.2, Polarization::LowResistance)
            .injected_charge
            .is_some());
    }
}
