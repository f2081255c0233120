// File: crates/chart-render-skia/build.rs
// Summary: Link the Windows system libraries Skia's font/ICU code expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
