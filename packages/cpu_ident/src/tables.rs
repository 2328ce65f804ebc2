//! Static lookup tables from effective family and model values to architecture identifiers.
//!
//! Intel identifiers are numbered 1..=11 in order of release. AMD identifiers are numbered
//! 101..=106 in order of release. Keys are unique within each table.

use derive_more::Display;

/// A microarchitecture (or, for the Intel family table, a processor family) that this package can
/// recognize.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{name}")]
#[non_exhaustive]
pub struct Architecture {
    /// Stable identifier, namespaced per manufacturer. Never zero.
    pub id: u32,

    /// Human-readable name.
    pub name: &'static str,
}

impl Architecture {
    const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: u32,
    pub(crate) architecture: Architecture,
}

const fn entry(key: u32, architecture: Architecture) -> Entry {
    Entry { key, architecture }
}

const P6_FAMILY: Architecture = Architecture::new(6, "P6 family");

pub(crate) static INTEL_FAMILIES: &[Entry] = &[entry(0x06, P6_FAMILY)];

const MEROM: Architecture = Architecture::new(1, "Core (Merom)");
const PENRYN: Architecture = Architecture::new(2, "Core (Penryn)");
const NEHALEM: Architecture = Architecture::new(3, "Nehalem");
const WESTMERE: Architecture = Architecture::new(4, "Westmere");
const BONNELL: Architecture = Architecture::new(5, "Bonnell");
const SANDY_BRIDGE: Architecture = Architecture::new(6, "Sandy Bridge");
const IVY_BRIDGE: Architecture = Architecture::new(7, "Ivy Bridge");
const HASWELL: Architecture = Architecture::new(8, "Haswell");
const BROADWELL: Architecture = Architecture::new(9, "Broadwell");
const SILVERMONT: Architecture = Architecture::new(10, "Silvermont");
const SKYLAKE: Architecture = Architecture::new(11, "Skylake");

pub(crate) static INTEL_MODELS: &[Entry] = &[
    entry(0x0F, MEROM),
    entry(0x16, MEROM),
    entry(0x17, PENRYN),
    entry(0x1D, PENRYN),
    entry(0x1A, NEHALEM),
    entry(0x1E, NEHALEM),
    entry(0x2E, NEHALEM),
    entry(0x25, WESTMERE),
    entry(0x2C, WESTMERE),
    entry(0x2F, WESTMERE),
    entry(0x1C, BONNELL),
    entry(0x26, BONNELL),
    entry(0x27, BONNELL),
    entry(0x35, BONNELL),
    entry(0x36, BONNELL),
    entry(0x2A, SANDY_BRIDGE),
    entry(0x2D, SANDY_BRIDGE),
    entry(0x3A, IVY_BRIDGE),
    entry(0x3E, IVY_BRIDGE),
    entry(0x3C, HASWELL),
    entry(0x3F, HASWELL),
    entry(0x45, HASWELL),
    entry(0x46, HASWELL),
    entry(0x3D, BROADWELL),
    entry(0x4F, BROADWELL),
    entry(0x4A, SILVERMONT),
    entry(0x4D, SILVERMONT),
    entry(0x5A, SILVERMONT),
    entry(0x4E, SKYLAKE),
    entry(0x5E, SKYLAKE),
];

pub(crate) static AMD_FAMILIES: &[Entry] = &[
    entry(0x0F, Architecture::new(101, "K8")),
    entry(0x10, Architecture::new(102, "K10")),
    entry(0x14, Architecture::new(103, "Bobcat")),
    entry(0x15, Architecture::new(104, "Bulldozer")),
    entry(0x16, Architecture::new(105, "Jaguar")),
    entry(0x17, Architecture::new(106, "Zen")),
];

fn lookup(table: &'static [Entry], key: u32) -> Option<&'static Architecture> {
    table
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| &entry.architecture)
}

/// Looks up an effective family value in the Intel family table.
///
/// Only the P6 family (`0x6`) is recognized. Its identifier is not a final classification, it
/// only gates the model lookup.
#[must_use]
pub fn intel_family(family: u32) -> Option<&'static Architecture> {
    lookup(INTEL_FAMILIES, family)
}

/// Looks up an effective model value in the Intel model table.
#[must_use]
pub fn intel_model(model: u32) -> Option<&'static Architecture> {
    lookup(INTEL_MODELS, model)
}

/// Looks up an effective family value in the AMD family table.
#[must_use]
pub fn amd_family(family: u32) -> Option<&'static Architecture> {
    lookup(AMD_FAMILIES, family)
}
