//! Platform Abstraction Layer (PAL). Every `CPUID` query goes through the [`Cpuid`] trait, which
//! lets the decoding logic run against mock register values in unit tests.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) use x86::*;

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
compile_error!(
    "cpu_ident requires the CPUID instruction and only supports the x86 and x86_64 target architectures"
);
