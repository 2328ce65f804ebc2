#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Identifies the manufacturer and microarchitecture of the processor the current thread is
//! executing on, by issuing the x86 `CPUID` instruction and decoding the returned registers
//! against static vendor tables.
//!
//! The result is a single numeric classification code that calling software can use to select
//! manufacturer- and architecture-specific code paths, such as SIMD kernels or tuning parameters.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Classification codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Unrecognized manufacturer, family or model |
//! | 1..=11 | Intel microarchitecture, from Core (Merom) to Skylake |
//! | 101..=106 | AMD microarchitecture, from K8 to Zen |
//!
//! # Example
//!
//! ```
//! let classification = cpu_ident::classify();
//!
//! println!("manufacturer: {}", classification.manufacturer());
//! println!("classification code: {}", classification.code());
//! ```
//!
//! The building blocks are also available separately, operating on raw register values:
//!
//! ```
//! use cpu_ident::{
//!     Manufacturer, VENDOR_B_STRING, VendorString, VersionFields, decode_fields,
//! };
//!
//! let vendor = VendorString::new(*VENDOR_B_STRING);
//! let manufacturer = Manufacturer::from_vendor_string(&vendor);
//!
//! // Extended family 0x1, base family 0x7.
//! let fields = VersionFields::from_eax(0x0010_0700);
//!
//! let architecture = decode_fields(manufacturer, &fields).unwrap();
//! assert_eq!(architecture.id, 106);
//! assert_eq!(architecture.name, "Zen");
//! ```
//!
//! # Platform support
//!
//! Only the `x86` and `x86_64` target architectures are supported. Building for any other target
//! architecture is a compile error.
//!
//! # Logging
//!
//! Diagnostic events are emitted via `tracing`. The classification logic itself only emits
//! `debug` events with raw register values; [`Classification::log()`] emits the outcome at
//! `info` level.

mod classification;
mod decode;
mod error;
mod pal;
mod registers;
mod tables;
mod vendor;
mod version;

pub use classification::*;
pub use decode::*;
pub use error::*;
pub use registers::*;
pub use tables::*;
pub use vendor::*;
pub use version::*;

use crate::pal::{Cpuid, CpuidFacade};

/// Executes `CPUID` with the given leaf on the processor the current thread is executing on.
///
/// # Example
///
/// ```
/// use cpu_ident::{VENDOR_LEAF, VERSION_LEAF, query};
///
/// let registers = query(VENDOR_LEAF);
///
/// // EAX of leaf 0 is the highest supported basic leaf.
/// assert!(registers.eax >= VERSION_LEAF);
/// ```
#[must_use]
pub fn query(leaf: Leaf) -> Registers {
    CpuidFacade::target().query(leaf)
}
