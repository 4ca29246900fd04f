// All extern "C" exports accept raw pointers from the binding layer and pass
// them through untouched; per-function safety docs would restate the same
// pass-through contract every time.
#![allow(clippy::missing_safety_doc)]
//! # vips-compat-abi
//!
//! ABI shim for libvips symbol drift: defines, under their old names, entry
//! points that libvips-rs 8.15.1 still references but the libvips 8.18
//! binaries no longer export. Renamed symbols forward to the current name;
//! removed symbols return the libvips failure sentinel and are licensed only
//! because the application never reaches them.
//!
//! The symbol set is enumerated in `vips_compat_core::manifest`; this crate
//! is its `extern "C"` realization.
//!
//! # Build contract
//!
//! Compile as a static archive and place it on the link line **before** the
//! libvips import library, so the linker resolves old-name references here
//! instead of failing with unresolved externals. With Cargo this falls out
//! of normal dependency order; for a foreign build system, link the
//! `staticlib` artifact ahead of `libvips.lib`/`libvips.so`. The build
//! script honors `VIPS_DIR` for the native search path, and the `link-vips`
//! feature makes this crate pull in libvips itself.
//!
//! Handles (`VipsTarget*`, `VipsImage*`) are never dereferenced, freed,
//! retained, or aliased here; their lifecycle belongs to libvips and the
//! binding layer.

pub mod handles;
pub mod operation_abi;

// The forwarder references `vips_target_end`, which only exists at final
// link (real libvips, or a test-provided definition). Compiled out of the
// in-crate unit-test binary so that binary links without either.
#[cfg(not(test))]
pub mod target_abi;

pub use handles::{VipsImage, VipsTarget};
