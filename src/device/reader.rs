use super::Structure;
use crate::error::ModelError;
use color_eyre::eyre::eyre;
use config::{Config, File};
use nalgebra::RealField;
use serde::{de::DeserializeOwned, Deserialize};
use std::path::PathBuf;

/// The full parameter bundle describing one junction.
///
/// All fields are plain scalars, set once per simulation run and never mutated during
/// an evaluation. Capacitances are per unit area, barrier heights are in eV, times in
/// seconds and lengths in meters.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceParameters<T> {
    /// Junction structure, selecting the interface-voltage solver
    pub structure: Structure,
    /// Junction surface radius in m
    pub radius: T,
    /// Ferroelectric barrier thickness in m
    pub thickness: T,
    /// Relative dielectric constant of the ferroelectric layer
    pub dielectric_constant: T,
    /// Effective tunneling mass in the transverse direction
    pub transverse_mass: T,
    /// Effective tunneling mass in the longitudinal direction
    pub longitudinal_mass: T,
    /// Barrier height at the near interface in eV
    pub barrier_height_1: T,
    /// Barrier height at the metal-ferroelectric interface in eV
    pub barrier_height_2: T,
    /// Near contact capacitance in F / m^2
    pub contact_capacitance_1: T,
    /// Far contact capacitance in F / m^2
    pub contact_capacitance_2: T,
    /// Graphene quantum capacitance constant in F / m^2 / V
    pub quantum_capacitance: T,
    /// Coefficient of the modified JKD semi-empirical scaling law
    pub scaling_factor: T,
    /// Spontaneous polarization of the ferroelectric in F / m^2
    pub spontaneous_polarization: T,
    /// Attempt time of domain nucleation in s
    pub nucleation_attempt_time: T,
    /// Attempt time of domain growth in s
    pub growth_attempt_time: T,
    /// Creep energy barrier for nucleation in V / m
    pub nucleation_barrier: T,
    /// Creep energy barrier for growth in V / m
    pub growth_barrier: T,
    /// Device temperature in K
    pub temperature: T,
    /// Reference temperature of the creep model in K
    pub reference_temperature: T,
}

impl<T: DeserializeOwned + RealField> DeviceParameters<T> {
    /// Reads and deserializes a device description from a `.toml` file
    pub fn build(path: PathBuf) -> color_eyre::Result<Self> {
        let s = Config::builder().add_source(File::from(path)).build()?;
        s.try_deserialize()
            .map_err(|e| eyre!("Failed to deserialize device: {:?}", e))
    }
}

impl<T: Copy + RealField> DeviceParameters<T> {
    /// A barium-titanate junction with the parameter set the model was published with
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn bto() -> Self {
        Self {
            structure: Structure::MetalFeMetal,
            radius: 250e-9,
            thickness: 4e-9,
            dielectric_constant: 10.0,
            transverse_mass: 0.5,
            longitudinal_mass: 0.95,
            barrier_height_1: 1.4,
            barrier_height_2: 1.0,
            contact_capacitance_1: 0.45,
            contact_capacitance_2: 0.35,
            quantum_capacitance: 0.26,
            scaling_factor: 1650.0,
            spontaneous_polarization: 0.07,
            nucleation_attempt_time: 2.8e-15,
            growth_attempt_time: 2.25e-13,
            nucleation_barrier: 6.18e9,
            growth_barrier: 4.64e9,
            temperature: 300.0,
            reference_temperature: 300.0,
        }
    }

    /// Replaces the structure variant, leaving the material parameters untouched
    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = structure;
        self
    }

    /// Checks the parameter bundle is physically meaningful
    pub fn validate(&self) -> Result<(), ModelError> {
        let positive: [(&str, T); 7] = [
            ("radius", self.radius),
            ("thickness", self.thickness),
            ("dielectric_constant", self.dielectric_constant),
            ("transverse_mass", self.transverse_mass),
            ("longitudinal_mass", self.longitudinal_mass),
            ("temperature", self.temperature),
            ("reference_temperature", self.reference_temperature),
        ];
        for (name, value) in positive {
            if value <= T::zero() {
                return Err(ModelError::InvalidParameter(format!(
                    "{} must be positive",
                    name
                )));
            }
        }
        Ok(())
    }
}
