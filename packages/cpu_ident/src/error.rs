use thiserror::Error;

use crate::Manufacturer;

/// The stage at which classification of a processor gave up.
///
/// All variants collapse to the classification code 0. The variant tells a caller which stage
/// failed, which the numeric code alone cannot.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Unrecognized {
    /// The vendor string matched neither known manufacturer.
    #[error("unknown processor manufacturer")]
    Manufacturer,

    /// The effective family is absent from the manufacturer's family table.
    #[error("unknown {manufacturer} processor family {family:#04x}")]
    Family {
        /// The manufacturer whose family table was consulted.
        manufacturer: Manufacturer,

        /// The effective family value.
        family: u32,
    },

    /// The effective model is absent from the Intel model table.
    #[error("unknown Intel processor model {model:#04x} in family {family:#04x}")]
    Model {
        /// The effective family value, which was recognized.
        family: u32,

        /// The effective model value.
        model: u32,
    },
}
