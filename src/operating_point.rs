//! # Operating point
//!
//! A single quasi-static evaluation of the junction: the electrostatic partition fixes
//! the barrier profile, the WKB integrator yields the current magnitude, and the
//! switching check yields the outgoing polarization. There is no persistent state; a
//! caller sweeping many bias points threads the returned polarization into the next
//! call.

use crate::device::DeviceParameters;
use crate::electrostatics::{self, InterfaceState};
use crate::error::ModelError;
use crate::switching::{self, Polarization};
use crate::transmission;
use nalgebra::RealField;
use num_traits::ToPrimitive;

/// The potentials applied at the two real terminals of the junction
#[derive(Debug, Clone, Copy)]
pub struct Bias<T> {
    /// Potential at terminal 1 in V
    pub terminal_1: T,
    /// Potential at terminal 2 in V
    pub terminal_2: T,
}

impl<T: Copy + RealField> Bias<T> {
    /// A bias between two terminal potentials
    pub fn new(terminal_1: T, terminal_2: T) -> Self {
        Self {
            terminal_1,
            terminal_2,
        }
    }

    /// A bias with terminal 2 grounded
    pub fn grounded(terminal_1: T) -> Self {
        Self {
            terminal_1,
            terminal_2: T::zero(),
        }
    }

    /// The two-terminal bias `Vb = V(T2) - V(T1)`
    pub fn voltage(&self) -> T {
        self.terminal_2 - self.terminal_1
    }
}

/// The full result of one evaluation
#[derive(Debug, Clone, Copy)]
pub struct OperatingPoint<T> {
    /// The two-terminal bias the point was evaluated at, in V
    pub voltage: T,
    /// Magnitude of the tunneling current, in A
    pub current: T,
    /// The outgoing polarization state
    pub polarization: Polarization,
    /// The nucleation-and-growth delay of a switching event, present only when the
    /// state flipped at this point. Reported as a diagnostic; the flip is not gated
    /// on it.
    pub switching_delay: Option<T>,
    /// The solved internal electrostatic configuration
    pub interfaces: InterfaceState<T>,
}

/// Evaluates one operating point of the junction.
///
/// Pure in all its inputs: the same bias, parameters and incoming polarization always
/// produce the same point. Fails on a degenerate barrier profile where the field
/// across the ferroelectric layer vanishes.
pub fn evaluate<T: Copy + RealField>(
    device: &DeviceParameters<T>,
    bias: Bias<T>,
    polarization: Polarization,
) -> Result<OperatingPoint<T>, ModelError> {
    let voltage = bias.voltage();
    let interfaces = electrostatics::partition(device, voltage, polarization);
    let current = transmission::tunneling_current(device, &interfaces, voltage)?;
    let transition = switching::update_state(device, voltage, polarization);
    Ok(OperatingPoint {
        voltage,
        current,
        polarization: transition.polarization,
        switching_delay: transition.delay,
        interfaces,
    })
}

/// Evaluates one operating point from the signed polarization encoding.
///
/// The raw value must be exactly -1 or +1; anything else is rejected with
/// [`ModelError::InvalidPolarization`] before any physics runs.
pub fn evaluate_signed<T: Copy + RealField + ToPrimitive>(
    device: &DeviceParameters<T>,
    bias: Bias<T>,
    polarization_sign: T,
) -> Result<OperatingPoint<T>, ModelError> {
    let polarization = Polarization::try_from_sign(polarization_sign)?;
    evaluate(device, bias, polarization)
}

#[cfg(test)]
mod test {
    use super::{evaluate, evaluate_signed, Bias};
    use crate::device::DeviceParameters;
    use crate::error::ModelError;
    use crate::switching::Polarization;

    #[test]
    fn sub_coercive_point_holds_the_high_resistance_state() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let point = evaluate(
            &device,
            Bias::grounded(0.1),
            Polarization::HighResistance,
        )
        .unwrap();
        assert_eq!(point.polarization, Polarization::HighResistance);
        assert!(point.switching_delay.is_none());
        assert!(point.current.is_finite() && point.current >= 0.0);
    }

    #[test]
    fn signed_entry_point_rejects_fractional_polarization() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let result = evaluate_signed(&device, Bias::grounded(0.1), 0.25);
        assert!(matches!(result, Err(ModelError::InvalidPolarization(_))));
    }

    #[test]
    fn switching_point_reports_its_creep_delay() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        // Terminal 1 at +1.5 V puts Vb at -1.5 V, past the high-to-low threshold
        let point = evaluate(
            &device,
            Bias::grounded(1.5),
            Polarization::HighResistance,
        )
        .unwrap();
        assert_eq!(point.polarization, Polarization::LowResistance);
        assert!(point.switching_delay.unwrap() > 0.0);
    }

    #[test]
    fn evaluation_is_pure() {
        let device: DeviceParameters<f64> = DeviceParameters::bto();
        let bias = Bias::new(0.7, 0.0);
        let first = evaluate(&device, bias, Polarization::LowResistance).unwrap();
        let second = evaluate(&device, bias, Polarization::LowResistance).unwrap();
        assert_eq!(first.current, second.current);
        assert_eq!(first.polarization, second.polarization);
    }
}
