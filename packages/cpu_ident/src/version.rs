use crate::Registers;

const STEPPING_SHIFT: u32 = 0;
const STEPPING_MASK: u32 = 0xF;
const BASE_MODEL_SHIFT: u32 = 4;
const BASE_MODEL_MASK: u32 = 0xF;
const BASE_FAMILY_SHIFT: u32 = 8;
const BASE_FAMILY_MASK: u32 = 0xF;
const EXTENDED_MODEL_SHIFT: u32 = 16;
const EXTENDED_MODEL_MASK: u32 = 0xF;
const EXTENDED_FAMILY_SHIFT: u32 = 20;
const EXTENDED_FAMILY_MASK: u32 = 0xFF;

/// Extended fields are combined with the base fields after shifting them past the base nibble.
const EXTENDED_FIELD_OFFSET: u32 = 4;

/// The family and model bit fields of the version information register (EAX of `CPUID` leaf 1).
///
/// Each field is stored right-aligned at its documented width.
///
/// The effective values are a bitwise OR of the base field and the extended field shifted left by
/// four bits. This is not the additive formula of the vendor manuals: the extended family is
/// always merged in, even when the base family is not `0xF`. The lookup tables of this package
/// are keyed by values computed this way.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct VersionFields {
    /// Bits 0..=3.
    pub stepping: u8,

    /// Bits 4..=7.
    pub base_model: u8,

    /// Bits 8..=11.
    pub base_family: u8,

    /// Bits 16..=19.
    pub extended_model: u8,

    /// Bits 20..=27.
    pub extended_family: u8,
}

impl VersionFields {
    /// Extracts the fields from a raw version information register value.
    #[must_use]
    pub fn from_eax(eax: u32) -> Self {
        Self {
            stepping: field(eax, STEPPING_SHIFT, STEPPING_MASK),
            base_model: field(eax, BASE_MODEL_SHIFT, BASE_MODEL_MASK),
            base_family: field(eax, BASE_FAMILY_SHIFT, BASE_FAMILY_MASK),
            extended_model: field(eax, EXTENDED_MODEL_SHIFT, EXTENDED_MODEL_MASK),
            extended_family: field(eax, EXTENDED_FAMILY_SHIFT, EXTENDED_FAMILY_MASK),
        }
    }

    /// Extracts the fields from the output of `CPUID` leaf 1.
    #[must_use]
    pub fn from_registers(registers: Registers) -> Self {
        Self::from_eax(registers.eax)
    }

    /// The family value that the lookup tables are keyed by.
    #[must_use]
    pub fn effective_family(&self) -> u32 {
        (u32::from(self.extended_family) << EXTENDED_FIELD_OFFSET) | u32::from(self.base_family)
    }

    /// The model value that the lookup tables are keyed by.
    #[must_use]
    pub fn effective_model(&self) -> u32 {
        (u32::from(self.extended_model) << EXTENDED_FIELD_OFFSET) | u32::from(self.base_model)
    }
}

fn field(eax: u32, shift: u32, mask: u32) -> u8 {
    let value = (eax >> shift) & mask;

    // Every mask is at most 8 bits wide.
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(VersionFields: Send, Sync, Copy);

    #[test]
    fn extracts_fields_at_documented_positions() {
        let fields = VersionFields::from_eax(0x0009_06EA);

        assert_eq!(fields.stepping, 0xA);
        assert_eq!(fields.base_model, 0xE);
        assert_eq!(fields.base_family, 0x6);
        assert_eq!(fields.extended_model, 0x9);
        assert_eq!(fields.extended_family, 0x0);

        assert_eq!(fields.effective_family(), 0x6);
        assert_eq!(fields.effective_model(), 0x9E);
    }

    #[test]
    fn each_field_is_isolated() {
        let fields = VersionFields::from_eax(0x0000_00A0);
        assert_eq!(fields.base_model, 0xA);
        assert_eq!(fields.extended_model, 0);
        assert_eq!(fields.stepping, 0);

        let fields = VersionFields::from_eax(0x0009_0000);
        assert_eq!(fields.extended_model, 0x9);
        assert_eq!(fields.base_model, 0);
        assert_eq!(fields.effective_model(), 0x90);

        let fields = VersionFields::from_eax(0x0000_0F00);
        assert_eq!(fields.base_family, 0xF);
        assert_eq!(fields.extended_family, 0);

        let fields = VersionFields::from_eax(0x0AB0_0000);
        assert_eq!(fields.extended_family, 0xAB);
        assert_eq!(fields.base_family, 0);
        assert_eq!(fields.effective_family(), 0xAB0);
    }

    #[test]
    fn reserved_bits_are_ignored() {
        // Bits 12..=15 (processor type and a reserved pair) and 28..=31 are not part of any field.
        let fields = VersionFields::from_eax(0xF000_F000);

        assert_eq!(fields, VersionFields::default());
    }

    #[test]
    fn all_bits_set() {
        let fields = VersionFields::from_eax(u32::MAX);

        assert_eq!(fields.stepping, 0xF);
        assert_eq!(fields.base_model, 0xF);
        assert_eq!(fields.base_family, 0xF);
        assert_eq!(fields.extended_model, 0xF);
        assert_eq!(fields.extended_family, 0xFF);
        assert_eq!(fields.effective_family(), 0xFFF);
        assert_eq!(fields.effective_model(), 0xFF);
    }

    #[test]
    fn combination_is_bitwise_or_not_addition() {
        // Base family 0xF with extended family 0x8 would be 0x17 when added.
        let fields = VersionFields::from_eax(0x0080_0F00);

        assert_eq!(fields.effective_family(), 0x8F);
    }

    #[test]
    fn from_registers_reads_eax_only() {
        let registers = Registers {
            eax: 0x0005_06E3,
            ebx: u32::MAX,
            ecx: u32::MAX,
            edx: u32::MAX,
        };

        let fields = VersionFields::from_registers(registers);

        assert_eq!(fields.effective_family(), 0x6);
        assert_eq!(fields.effective_model(), 0x5E);
        assert_eq!(fields.stepping, 0x3);
    }
}
