use std::fmt::Debug;

use crate::{Leaf, Registers};

/// Issues the processor identification instruction.
///
/// All PAL `CPUID` calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Cpuid: Debug + Send + Sync + 'static {
    /// Executes `CPUID` with the given leaf in EAX and returns the four output registers.
    fn query(&self, leaf: Leaf) -> Registers;
}
