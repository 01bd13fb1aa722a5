// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on MAX_LEVELS feature selection.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(max_levels_min_3)]` instead of `#[cfg(not(feature = "max_levels_2"))]`
//! - `#[cfg(max_levels_min_4)]` instead of `#[cfg(not(any(feature = "max_levels_2", feature = "max_levels_3")))]`
//! - `#[cfg(max_levels_eq_4)]` for the default case

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(max_levels_min_3)");
    println!("cargo:rustc-check-cfg=cfg(max_levels_min_4)");
    println!("cargo:rustc-check-cfg=cfg(max_levels_eq_4)");

    // MAX_LEVELS >= 3 (excludes only max_levels_2)
    #[cfg(not(feature = "max_levels_2"))]
    println!("cargo:rustc-cfg=max_levels_min_3");

    // MAX_LEVELS >= 4 (excludes max_levels_2 and max_levels_3)
    #[cfg(not(any(feature = "max_levels_2", feature = "max_levels_3")))]
    println!("cargo:rustc-cfg=max_levels_min_4");

    // MAX_LEVELS = 4 (default or explicit max_levels_4 feature)
    #[cfg(any(
        feature = "max_levels_4",
        not(any(feature = "max_levels_2", feature = "max_levels_3", feature = "max_levels_5"))
    ))]
    println!("cargo:rustc-cfg=max_levels_eq_4");
}
