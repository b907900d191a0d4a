// File: crates/benchplot-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
