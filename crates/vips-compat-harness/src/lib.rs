//! # vips-compat-harness
//!
//! Audit tooling for the libvips compat shim.
//!
//! This crate provides:
//! - Symbol dump parsing: turn `nm`/`dumpbin`-style listings into name sets
//! - Audit reports: human-readable and machine-readable (JSON) views of a
//!   referenced-vs-exported symbol audit
//! - The `vips-compat-audit` CLI binary wrapping both
//!
//! The shim itself (the `extern "C"` definitions) lives in `vips-compat-abi`
//! and links no part of this crate; the harness reasons about symbol names
//! only, so it runs on any host without libvips installed.

#![forbid(unsafe_code)]

pub mod error;
pub mod report;
pub mod symbol_dump;

pub use error::HarnessError;
pub use report::{AuditReport, CoverageStatus, FindingRecord, ManifestReport};
pub use symbol_dump::{load_symbol_file, parse_symbol_dump};
