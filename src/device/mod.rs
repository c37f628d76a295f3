//! Controls the deserialization and validation of the device parameter bundle, and the
//! structure variant which selects between the two interface-voltage solvers

/// The deserialization and storage of the `DeviceParameters`
pub(crate) mod reader;

pub use reader::DeviceParameters;

/// Enum with all implemented junction structures
///
/// As structures may be added in future this is labelled as `non_exhaustive`
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
pub enum Structure {
    /// A metal-ferroelectric-metal junction
    MetalFeMetal,
    /// A graphene-ferroelectric-metal junction, with a quantum capacitance at the
    /// graphene contact
    GrapheneFeMetal,
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Structure::MetalFeMetal => {
                write!(f, "metal-FE-metal")
            }
            Structure::GrapheneFeMetal => {
                write!(f, "graphene-FE-metal")
            }
        }
    }
}
