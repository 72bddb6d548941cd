use std::env;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Lets the linker find link.ld next to the BSP code.
    println!("cargo:rustc-link-search={}/src/bsp/rp2040", manifest_dir);

    // Tells Cargo to run again if the linker script changes.
    println!("cargo:rerun-if-changed=src/bsp/rp2040/link.ld");
}
