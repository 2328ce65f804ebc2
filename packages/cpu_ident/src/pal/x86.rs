#[cfg(target_arch = "x86")]
use std::arch::x86::__cpuid;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::__cpuid;

use crate::pal::Cpuid;
use crate::{Leaf, Registers};

/// `CPUID` bindings that target the real processor that the build is targeting.
///
/// You would only use different bindings in unit tests that need to control register values.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetCpuid;

// The real instruction is exercised by the integration tests on whatever hardware runs them.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Cpuid for BuildTargetCpuid {
    #[allow(
        unused_unsafe,
        reason = "__cpuid is a safe function on newer toolchains but unsafe on our minimum version"
    )]
    fn query(&self, leaf: Leaf) -> Registers {
        // SAFETY: Every processor that Rust supports as an x86 or x86_64 target implements CPUID
        // and leaves 0 and 1 are defined on all of them. The instruction only reads processor
        // state and has no memory safety requirements.
        let result = unsafe { __cpuid(leaf) };

        Registers {
            eax: result.eax,
            ebx: result.ebx,
            ecx: result.ecx,
            edx: result.edx,
        }
    }
}
