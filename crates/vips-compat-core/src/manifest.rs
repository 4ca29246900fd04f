//! The drift manifest — which old libvips symbol names the shim covers.
//!
//! The shim exists because libvips-rs 8.15.1 was generated against a libvips
//! older than the 8.18 binaries actually linked. Each entry records one old
//! name and its disposition: forward to the renamed symbol, or stub with the
//! libvips failure sentinel. The ABI crate defines exactly these symbols;
//! keeping the table here lets the harness audit a symbol diff without
//! loading any native code.

use thiserror::Error;

use crate::version::LibraryVersion;

/// libvips operations report failure as a negative status; -1 is the value
/// the C API returns from `vips_call`-style entry points.
pub const OPERATION_FAILED: i32 = -1;

/// What the shim does when the old name is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolDisposition {
    /// Forward all arguments unchanged to the current symbol name.
    Forward { target: &'static str },
    /// Accept and discard the arguments, return a fixed failure sentinel.
    /// Licensed only for symbols unreachable from the application.
    Stub { sentinel: i32 },
}

/// One renamed or removed entry point covered by the shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShimEntry {
    /// The symbol name the binding layer still references.
    pub old_name: &'static str,
    pub disposition: SymbolDisposition,
    /// First libvips release where the old name no longer resolves.
    pub changed_in: LibraryVersion,
    /// Whether the old C signature carried a variadic options tail.
    /// The shim never reads the tail either way.
    pub variadic_tail: bool,
    pub note: &'static str,
}

const V8_17: LibraryVersion = LibraryVersion::new(8, 17, 0);

/// The concrete drift between libvips-rs 8.15.1 and libvips 8.18.
///
/// This list is exhaustive for that version pair; a different pair needs a
/// fresh audit of the symbol diff (see the harness `skew` command).
pub const BUILTIN_MANIFEST: &[ShimEntry] = &[
    ShimEntry {
        old_name: "vips_target_finish",
        disposition: SymbolDisposition::Forward {
            target: "vips_target_end",
        },
        changed_in: V8_17,
        variadic_tail: false,
        note: "renamed in 8.17; finalizes/flushes an output target",
    },
    ShimEntry {
        old_name: "vips_rawsave_fd",
        disposition: SymbolDisposition::Stub {
            sentinel: OPERATION_FAILED,
        },
        changed_in: V8_17,
        variadic_tail: true,
        note: "removed in 8.17+; raw save to a file descriptor, unused by the app",
    },
    ShimEntry {
        old_name: "vips_cache",
        disposition: SymbolDisposition::Stub {
            sentinel: OPERATION_FAILED,
        },
        changed_in: V8_17,
        variadic_tail: true,
        note: "cache operation shorthand restructured in 8.17+, unused by the app",
    },
];

/// Look up a manifest entry by old symbol name.
pub fn entry(name: &str) -> Option<&'static ShimEntry> {
    BUILTIN_MANIFEST.iter().find(|e| e.old_name == name)
}

/// Entries required for a binding built against `built_against` running on a
/// `deployed` binary: those whose change falls inside the skew window.
pub fn entries_for_skew(
    built_against: LibraryVersion,
    deployed: LibraryVersion,
) -> Vec<&'static ShimEntry> {
    BUILTIN_MANIFEST
        .iter()
        .filter(|e| built_against < e.changed_in && e.changed_in <= deployed)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("duplicate old name in manifest: {0}")]
    DuplicateOldName(String),
    #[error("forwarder {old_name} targets itself")]
    SelfForward { old_name: String },
    #[error("forwarder {old_name} targets {target}, which the manifest also shims")]
    ForwardIntoShim { old_name: String, target: String },
}

/// Structural checks on a manifest: old names unique, forward targets
/// neither self-referential nor themselves shimmed.
pub fn validate_manifest(entries: &[ShimEntry]) -> Result<(), ManifestError> {
    for (i, e) in entries.iter().enumerate() {
        if entries[..i].iter().any(|prev| prev.old_name == e.old_name) {
            return Err(ManifestError::DuplicateOldName(e.old_name.to_string()));
        }
        if let SymbolDisposition::Forward { target } = e.disposition {
            if target == e.old_name {
                return Err(ManifestError::SelfForward {
                    old_name: e.old_name.to_string(),
                });
            }
            if entries.iter().any(|other| other.old_name == target) {
                return Err(ManifestError::ForwardIntoShim {
                    old_name: e.old_name.to_string(),
                    target: target.to_string(),
                });
            }
        }
    }
    Ok(())
}
