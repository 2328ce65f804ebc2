#![cfg_attr(coverage_nightly, coverage(off))]

use std::fmt::{self, Debug};
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockCpuid;
use crate::pal::{BuildTargetCpuid, Cpuid};
use crate::{Leaf, Registers};

/// Static instance of the real `CPUID` bindings for production use.
static BUILD_TARGET_CPUID: BuildTargetCpuid = BuildTargetCpuid;

/// Enum to hide the real/mock choice behind a single wrapper type.
#[derive(Clone)]
pub(crate) enum CpuidFacade {
    Target(&'static BuildTargetCpuid),

    #[cfg(test)]
    Mock(Arc<MockCpuid>),
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(test, mutants::skip)]
impl CpuidFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_CPUID)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockCpuid) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

#[cfg_attr(test, mutants::skip)]
impl Cpuid for CpuidFacade {
    fn query(&self, leaf: Leaf) -> Registers {
        match self {
            Self::Target(cpuid) => cpuid.query(leaf),
            #[cfg(test)]
            Self::Mock(mock) => mock.query(leaf),
        }
    }
}

// No API contract to test.
#[cfg_attr(test, mutants::skip)]
impl Debug for CpuidFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
