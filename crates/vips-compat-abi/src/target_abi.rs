//! Renamed target symbols — `vips_target_finish` -> `vips_target_end`.

use crate::handles::VipsTarget;

unsafe extern "C" {
    /// Current name of the target finalizer, renamed in libvips 8.17.
    fn vips_target_end(target: *mut VipsTarget);
}

/// Old name of the target finalizer. Forwards the handle unchanged,
/// including null: validation, if any, belongs to `vips_target_end`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vips_target_finish(target: *mut VipsTarget) {
    unsafe { vips_target_end(target) }
}
