use tracing::debug;

use crate::pal::{Cpuid, CpuidFacade};
use crate::{
    Architecture, Manufacturer, Unrecognized, VERSION_LEAF, VersionFields, amd_family,
    intel_family, intel_model,
};

/// Maps the version fields of a processor from the given manufacturer to its architecture.
///
/// For Intel, the effective family must be the P6 family before the effective model is even
/// looked at. For AMD, only the effective family is used. Every miss is reported as the stage
/// that failed; there is no partial or nearest match.
///
/// # Example
///
/// ```
/// use cpu_ident::{Manufacturer, VersionFields, decode_fields};
///
/// let fields = VersionFields::from_eax(0x0005_06E3);
/// let architecture = decode_fields(Manufacturer::Intel, &fields).unwrap();
///
/// assert_eq!(architecture.id, 11);
/// assert_eq!(architecture.name, "Skylake");
/// ```
pub fn decode_fields(
    manufacturer: Manufacturer,
    fields: &VersionFields,
) -> Result<&'static Architecture, Unrecognized> {
    let family = fields.effective_family();

    match manufacturer {
        Manufacturer::Intel => {
            intel_family(family).ok_or(Unrecognized::Family {
                manufacturer,
                family,
            })?;

            let model = fields.effective_model();

            intel_model(model).ok_or(Unrecognized::Model { family, model })
        }
        Manufacturer::Amd => amd_family(family).ok_or(Unrecognized::Family {
            manufacturer,
            family,
        }),
        Manufacturer::Unknown => Err(Unrecognized::Manufacturer),
    }
}

/// Classifies the family and model of the processor the current thread is executing on, assuming
/// it was made by the given manufacturer.
///
/// Returns the architecture identifier, or 0 if the family or model is not recognized. For
/// [`Manufacturer::Unknown`] this returns 0 without querying the processor.
#[must_use]
pub fn decode(manufacturer: Manufacturer) -> u32 {
    decode_with(&CpuidFacade::target(), manufacturer).map_or(0, |architecture| architecture.id)
}

pub(crate) fn decode_with(
    cpuid: &impl Cpuid,
    manufacturer: Manufacturer,
) -> Result<&'static Architecture, Unrecognized> {
    if manufacturer == Manufacturer::Unknown {
        return Err(Unrecognized::Manufacturer);
    }

    let fields = read_version_fields(cpuid);

    decode_fields(manufacturer, &fields)
}

pub(crate) fn read_version_fields(cpuid: &impl Cpuid) -> VersionFields {
    let registers = cpuid.query(VERSION_LEAF);
    let fields = VersionFields::from_registers(registers);

    debug!(
        eax = registers.eax,
        family = fields.effective_family(),
        model = fields.effective_model(),
        stepping = fields.stepping,
        "queried version leaf"
    );

    fields
}
