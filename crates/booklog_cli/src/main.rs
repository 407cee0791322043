//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `booklog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Keep a tiny CLI probe to validate core crate wiring independently
    // from any UI runtime setup.
    println!("booklog_core version={}", booklog_core::core_version());
}
