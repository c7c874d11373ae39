//! smartdial-rs
//! ============
//!
//! Umbrella crate for the workspace. Everything lives in [`smartdial_core`];
//! this target only re-exports it so `cargo bench`/`cargo test` at the
//! workspace root have a package to attach to.

pub use smartdial_core::*;
