//! Identifies the current processor and selects a code path based on the classification.

use cpu_ident::Manufacturer;

fn main() {
    tracing_subscriber::fmt().init();

    let classification = cpu_ident::classify();
    classification.log();

    let kernel = match (classification.manufacturer(), classification.code()) {
        (Manufacturer::Intel, 8..=11) => "intel-avx2",
        (Manufacturer::Intel, 1..=7) => "intel-sse4",
        (Manufacturer::Amd, 104..=106) => "amd-avx",
        (Manufacturer::Amd, 101..=103) => "amd-sse2",
        _ => "portable",
    };

    println!("{classification}");
    println!("Selected kernel: {kernel}");
}
