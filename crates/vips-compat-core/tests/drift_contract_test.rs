//! Contract test for the concrete 8.15.1 -> 8.18.0 drift this shim exists for.

use std::collections::BTreeSet;

use vips_compat_core::audit::audit_symbols;
use vips_compat_core::manifest::{BUILTIN_MANIFEST, entries_for_skew, validate_manifest};
use vips_compat_core::version::LibraryVersion;

#[test]
fn the_shipped_skew_needs_exactly_the_builtin_manifest() {
    let built_against: LibraryVersion = "8.15.1".parse().unwrap();
    let deployed: LibraryVersion = "8.18.0".parse().unwrap();

    let required = entries_for_skew(built_against, deployed);
    let required_names: Vec<&str> = required.iter().map(|e| e.old_name).collect();
    assert_eq!(
        required_names,
        ["vips_target_finish", "vips_rawsave_fd", "vips_cache"]
    );
}

#[test]
fn builtin_manifest_validates_and_resolves_the_shipped_binding() {
    validate_manifest(BUILTIN_MANIFEST).unwrap();

    let referenced: BTreeSet<String> = BUILTIN_MANIFEST
        .iter()
        .map(|e| e.old_name.to_string())
        .collect();
    let exported: BTreeSet<String> = ["vips_target_end"]
        .into_iter()
        .map(String::from)
        .collect();

    let audit = audit_symbols(&referenced, &exported, BUILTIN_MANIFEST);
    assert!(audit.is_link_clean());
    assert_eq!(audit.shadowed().count(), 0);
}
