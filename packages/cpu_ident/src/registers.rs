/// Selects which block of identification data the `CPUID` instruction returns.
///
/// The instruction takes this value in EAX and overwrites all four registers with its output.
pub type Leaf = u32;

/// Leaf that returns the highest supported basic leaf in EAX and the vendor string in EBX, EDX, ECX.
pub const VENDOR_LEAF: Leaf = 0;

/// Leaf that returns the version information (stepping, model, family) in EAX.
pub const VERSION_LEAF: Leaf = 1;

/// The four output registers of one `CPUID` query.
///
/// The field names follow the calling convention of the instruction. Values are produced fresh
/// on every query and are never cached.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "the instruction always returns exactly these four registers"
)]
pub struct Registers {
    /// Output register EAX.
    pub eax: u32,

    /// Output register EBX.
    pub ebx: u32,

    /// Output register ECX.
    pub ecx: u32,

    /// Output register EDX.
    pub edx: u32,
}
