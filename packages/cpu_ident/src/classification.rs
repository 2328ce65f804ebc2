use std::fmt::{self, Display};

use tracing::info;

use crate::decode::read_version_fields;
use crate::pal::{Cpuid, CpuidFacade};
use crate::vendor::read_vendor_string;
use crate::{Architecture, Manufacturer, Unrecognized, VendorString, VersionFields, decode_fields};

/// The outcome of identifying a processor.
///
/// Obtain one for the processor the current thread is executing on via [`classify()`].
///
/// The decision logic that produces this value does not log anything. Call [`log()`][Self::log]
/// to emit the outcome as `tracing` events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Classification {
    vendor: VendorString,
    manufacturer: Manufacturer,
    version_fields: Option<VersionFields>,
    architecture: Result<&'static Architecture, Unrecognized>,
}

impl Classification {
    /// The vendor string reported by the processor.
    #[must_use]
    pub fn vendor(&self) -> &VendorString {
        &self.vendor
    }

    /// The manufacturer identified from the vendor string.
    #[must_use]
    pub fn manufacturer(&self) -> Manufacturer {
        self.manufacturer
    }

    /// The version fields of the processor.
    ///
    /// `None` if the manufacturer is unknown, in which case the version information was never
    /// queried.
    #[must_use]
    pub fn version_fields(&self) -> Option<&VersionFields> {
        self.version_fields.as_ref()
    }

    /// The recognized architecture, or the stage at which recognition failed.
    ///
    /// # Errors
    ///
    /// Returns the [`Unrecognized`] stage if the manufacturer, family or model is not in the
    /// lookup tables.
    pub fn architecture(&self) -> Result<&'static Architecture, Unrecognized> {
        self.architecture
    }

    /// The classification code: the architecture identifier, or 0 if the processor is not
    /// recognized at any stage.
    ///
    /// Intel architectures are in the range 1..=11 and AMD architectures in the range 101..=106.
    #[must_use]
    pub fn code(&self) -> u32 {
        self.architecture.map_or(0, |architecture| architecture.id)
    }

    /// Emits the outcome as informational `tracing` events.
    #[cfg_attr(test, mutants::skip)] // Only observable through logging.
    pub fn log(&self) {
        info!(
            vendor = %self.vendor,
            manufacturer = %self.manufacturer,
            "detected processor manufacturer"
        );

        if let Some(fields) = &self.version_fields {
            info!(
                family = fields.effective_family(),
                model = fields.effective_model(),
                stepping = fields.stepping,
                "detected processor version"
            );
        }

        match self.architecture {
            Ok(architecture) => info!(
                architecture = architecture.name,
                id = architecture.id,
                "detected processor architecture"
            ),
            Err(reason) => info!(%reason, "processor architecture not recognized"),
        }

        info!(code = self.code(), "classification complete");
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.architecture {
            Ok(architecture) => write!(
                f,
                "{} {} ({})",
                self.manufacturer, architecture.name, architecture.id
            ),
            Err(reason) => write!(f, "{reason} ({})", self.code()),
        }
    }
}

/// Identifies the manufacturer and architecture of the processor the current thread is
/// executing on.
///
/// On hybrid or heterogeneous systems the result describes whichever processor the thread
/// happens to be on. Nothing is cached; every call queries the processor again.
///
/// # Example
///
/// ```
/// let classification = cpu_ident::classify();
///
/// match classification.architecture() {
///     Ok(architecture) => println!("running on {architecture}"),
///     Err(reason) => println!("{reason}"),
/// }
///
/// println!("classification code: {}", classification.code());
/// ```
#[must_use]
pub fn classify() -> Classification {
    classify_with(&CpuidFacade::target())
}

pub(crate) fn classify_with(cpuid: &impl Cpuid) -> Classification {
    let vendor = read_vendor_string(cpuid);
    let manufacturer = Manufacturer::from_vendor_string(&vendor);

    if manufacturer == Manufacturer::Unknown {
        return Classification {
            vendor,
            manufacturer,
            version_fields: None,
            architecture: Err(Unrecognized::Manufacturer),
        };
    }

    let version_fields = read_version_fields(cpuid);

    Classification {
        vendor,
        manufacturer,
        version_fields: Some(version_fields),
        architecture: decode_fields(manufacturer, &version_fields),
    }
}
