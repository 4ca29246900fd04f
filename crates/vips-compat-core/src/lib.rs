//! # vips-compat-core
//!
//! Safe logic behind the libvips compatibility shim: the drift manifest
//! (which old symbol names forward where, which are stubbed), library
//! version comparison, and the symbol audit that checks a binding's
//! referenced symbols against a binary's export set.
//!
//! Nothing in this crate touches a pointer. The `extern "C"` boundary that
//! actually defines the old-name symbols lives in `vips-compat-abi`.

#![deny(unsafe_code)]

pub mod audit;
pub mod manifest;
pub mod version;

pub use audit::{AuditFinding, SymbolAudit, SymbolCoverage, audit_symbols};
pub use manifest::{
    BUILTIN_MANIFEST, OPERATION_FAILED, ManifestError, ShimEntry, SymbolDisposition,
    entries_for_skew, entry, validate_manifest,
};
pub use version::{LibraryVersion, VersionParseError};
