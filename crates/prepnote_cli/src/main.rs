//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `prepnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("prepnote_core ping={}", prepnote_core::ping());
    println!("prepnote_core version={}", prepnote_core::core_version());
}
