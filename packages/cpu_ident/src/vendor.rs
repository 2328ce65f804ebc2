use std::fmt;

use derive_more::Display;
use tracing::{debug, info};

use crate::pal::{Cpuid, CpuidFacade};
use crate::{Registers, VENDOR_LEAF};

/// Number of significant bytes in a vendor identity string.
pub const VENDOR_STRING_LEN: usize = 12;

/// Vendor identity string reported by Intel processors.
pub const VENDOR_A_STRING: &[u8; VENDOR_STRING_LEN] = b"GenuineIntel";

/// Vendor identity string reported by AMD processors.
pub const VENDOR_B_STRING: &[u8; VENDOR_STRING_LEN] = b"AuthenticAMD";

/// The 12-byte vendor identity string returned by `CPUID` leaf 0.
///
/// The bytes are taken from EBX, EDX and ECX in that order, each register contributing its four
/// bytes in little-endian order. This is the order documented by both manufacturers and it is
/// applied identically on every platform.
///
/// The bytes are not required to be valid UTF-8. Comparisons are always made on the raw bytes.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct VendorString([u8; VENDOR_STRING_LEN]);

impl VendorString {
    /// Wraps raw vendor string bytes, e.g. to classify a string obtained elsewhere.
    #[must_use]
    pub const fn new(bytes: [u8; VENDOR_STRING_LEN]) -> Self {
        Self(bytes)
    }

    /// Assembles the vendor string from the output of `CPUID` leaf 0.
    #[must_use]
    pub fn from_registers(registers: Registers) -> Self {
        let mut bytes = [0_u8; VENDOR_STRING_LEN];

        for (chunk, register) in bytes
            .chunks_exact_mut(4)
            .zip([registers.ebx, registers.edx, registers.ecx])
        {
            chunk.copy_from_slice(&register.to_le_bytes());
        }

        Self(bytes)
    }

    /// The raw bytes of the vendor string.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; VENDOR_STRING_LEN] {
        &self.0
    }
}

impl fmt::Display for VendorString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for VendorString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VendorString")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

/// The processor manufacturers this package can tell apart.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Manufacturer {
    /// The vendor string matched neither known manufacturer.
    #[display("unknown")]
    Unknown,

    /// The vendor string is [`VENDOR_A_STRING`].
    #[display("Intel")]
    Intel,

    /// The vendor string is [`VENDOR_B_STRING`].
    #[display("AMD")]
    Amd,
}

impl Manufacturer {
    /// Maps a vendor string to a manufacturer by exact, case-sensitive comparison.
    #[must_use]
    pub fn from_vendor_string(vendor: &VendorString) -> Self {
        let bytes = vendor.as_bytes();

        if bytes == VENDOR_A_STRING {
            Self::Intel
        } else if bytes == VENDOR_B_STRING {
            Self::Amd
        } else {
            Self::Unknown
        }
    }
}

/// Identifies the manufacturer of the processor the current thread is executing on.
///
/// Emits an informational event naming the detected manufacturer.
///
/// # Example
///
/// ```
/// use cpu_ident::{Manufacturer, classify_vendor};
///
/// match classify_vendor() {
///     Manufacturer::Intel => println!("running on Intel"),
///     Manufacturer::Amd => println!("running on AMD"),
///     _ => println!("running on something else"),
/// }
/// ```
#[must_use]
pub fn classify_vendor() -> Manufacturer {
    let vendor = read_vendor_string(&CpuidFacade::target());
    let manufacturer = Manufacturer::from_vendor_string(&vendor);

    info!(%vendor, %manufacturer, "detected processor manufacturer");

    manufacturer
}

pub(crate) fn read_vendor_string(cpuid: &impl Cpuid) -> VendorString {
    let registers = cpuid.query(VENDOR_LEAF);

    debug!(
        ebx = registers.ebx,
        ecx = registers.ecx,
        edx = registers.edx,
        "queried vendor leaf"
    );

    VendorString::from_registers(registers)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use mockall::predicate::eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::MockCpuid;

    assert_impl_all!(VendorString: Send, Sync, Copy);
    assert_impl_all!(Manufacturer: Send, Sync, Copy);

    // The register values real processors return for leaf 0.
    const INTEL_EBX: u32 = 0x756e_6547; // "Genu"
    const INTEL_EDX: u32 = 0x4965_6e69; // "ineI"
    const INTEL_ECX: u32 = 0x6c65_746e; // "ntel"
    const AMD_EBX: u32 = 0x6874_7541; // "Auth"
    const AMD_EDX: u32 = 0x6974_6e65; // "enti"
    const AMD_ECX: u32 = 0x444d_4163; // "cAMD"

    fn leaf0(ebx: u32, edx: u32, ecx: u32) -> Registers {
        Registers {
            eax: 0x16,
            ebx,
            ecx,
            edx,
        }
    }

    #[test]
    fn assembles_intel_string_in_ebx_edx_ecx_order() {
        let vendor = VendorString::from_registers(leaf0(INTEL_EBX, INTEL_EDX, INTEL_ECX));

        assert_eq!(vendor.as_bytes(), VENDOR_A_STRING);
        assert_eq!(vendor.to_string(), "GenuineIntel");
    }

    #[test]
    fn assembles_amd_string_in_ebx_edx_ecx_order() {
        let vendor = VendorString::from_registers(leaf0(AMD_EBX, AMD_EDX, AMD_ECX));

        assert_eq!(vendor.as_bytes(), VENDOR_B_STRING);
    }

    #[test]
    fn ebx_ecx_edx_order_is_not_accepted() {
        // The swapped order yields "GenuntelineI", which is nobody's vendor string.
        let vendor = VendorString::from_registers(leaf0(INTEL_EBX, INTEL_ECX, INTEL_EDX));

        assert_eq!(vendor.as_bytes(), b"GenuntelineI");
        assert_eq!(
            Manufacturer::from_vendor_string(&vendor),
            Manufacturer::Unknown
        );
    }

    #[test]
    fn known_strings_map_to_manufacturers() {
        assert_eq!(
            Manufacturer::from_vendor_string(&VendorString::new(*VENDOR_A_STRING)),
            Manufacturer::Intel
        );
        assert_eq!(
            Manufacturer::from_vendor_string(&VendorString::new(*VENDOR_B_STRING)),
            Manufacturer::Amd
        );
    }

    #[test]
    fn other_vendors_are_unknown() {
        for vendor in [
            b"HygonGenuine",
            b"CentaurHauls",
            b"  Shanghai  ",
            b"KVMKVMKVM\0\0\0",
            b"\0\0\0\0\0\0\0\0\0\0\0\0",
        ] {
            assert_eq!(
                Manufacturer::from_vendor_string(&VendorString::new(*vendor)),
                Manufacturer::Unknown,
                "{vendor:?}"
            );
        }
    }

    #[test]
    fn every_single_byte_perturbation_is_unknown() {
        for known in [VENDOR_A_STRING, VENDOR_B_STRING] {
            for (index, original) in known.iter().copied().enumerate() {
                for replacement in [b'x', b'\0', original.to_ascii_lowercase()] {
                    if replacement == original {
                        continue;
                    }

                    let mut bytes = *known;
                    *bytes.get_mut(index).unwrap() = replacement;

                    assert_eq!(
                        Manufacturer::from_vendor_string(&VendorString::new(bytes)),
                        Manufacturer::Unknown,
                        "{:?}",
                        VendorString::new(bytes)
                    );
                }
            }
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(
            Manufacturer::from_vendor_string(&VendorString::new(*b"genuineintel")),
            Manufacturer::Unknown
        );
        assert_eq!(
            Manufacturer::from_vendor_string(&VendorString::new(*b"AUTHENTICAMD")),
            Manufacturer::Unknown
        );
    }

    #[test]
    fn invalid_utf8_is_displayed_lossily() {
        let vendor = VendorString::new([0xFF; VENDOR_STRING_LEN]);

        assert_eq!(vendor.to_string().chars().count(), VENDOR_STRING_LEN);
        assert_eq!(
            Manufacturer::from_vendor_string(&vendor),
            Manufacturer::Unknown
        );
    }

    #[test]
    fn read_vendor_string_queries_leaf_zero() {
        let mut cpuid = MockCpuid::new();
        cpuid
            .expect_query()
            .with(eq(VENDOR_LEAF))
            .times(1)
            .return_const(leaf0(AMD_EBX, AMD_EDX, AMD_ECX));

        let vendor = read_vendor_string(&cpuid);

        assert_eq!(vendor.as_bytes(), VENDOR_B_STRING);
    }

    #[test]
    fn manufacturer_display() {
        assert_eq!(Manufacturer::Intel.to_string(), "Intel");
        assert_eq!(Manufacturer::Amd.to_string(), "AMD");
        assert_eq!(Manufacturer::Unknown.to_string(), "unknown");
    }
}
