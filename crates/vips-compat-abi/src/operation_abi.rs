//! Removed operation symbols — stubs that satisfy the linker.
//!
//! Both entry points vanished from libvips 8.17+ and are unreachable from
//! the application's processing paths; the stubs exist only so the old-name
//! references resolve. They inspect nothing, write nothing, and always
//! return the libvips failure sentinel.
//!
//! Both old C signatures ended in a `...` options tail. Stable Rust cannot
//! define a C-variadic function, so the stubs declare the named prefix only;
//! a callee that touches none of its parameters can ignore a trailing tail
//! the caller may or may not have populated.

use std::ffi::c_int;

use vips_compat_core::manifest::OPERATION_FAILED;

use crate::handles::VipsImage;

/// `vips_rawsave_fd(VipsImage *in, int fd, ...)` — removed in 8.17+.
/// The image handle and file descriptor are left untouched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vips_rawsave_fd(image: *mut VipsImage, fd: c_int) -> c_int {
    let _ = (image, fd);
    OPERATION_FAILED
}

/// `vips_cache(VipsImage *in, VipsImage **out, ...)` — the cache operation
/// shorthand, restructured in 8.17+. The out-pointer slot is never written.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vips_cache(image: *mut VipsImage, out: *mut *mut VipsImage) -> c_int {
    let _ = (image, out);
    OPERATION_FAILED
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn rawsave_stub_returns_sentinel_for_any_arguments() {
        for fd in [-1, 0, 3, c_int::MAX] {
            let status = unsafe { vips_rawsave_fd(ptr::null_mut(), fd) };
            assert_eq!(status, OPERATION_FAILED);
        }
    }

    #[test]
    fn cache_stub_leaves_out_slot_unwritten() {
        let mut marker = 0u8;
        let sentinel_ptr = (&mut marker as *mut u8).cast::<VipsImage>();
        let mut slot = sentinel_ptr;

        let status = unsafe { vips_cache(ptr::null_mut(), &mut slot) };
        assert_eq!(status, OPERATION_FAILED);
        assert_eq!(slot, sentinel_ptr);
    }

    #[test]
    fn cache_stub_tolerates_null_out_slot() {
        let status = unsafe { vips_cache(ptr::null_mut(), ptr::null_mut()) };
        assert_eq!(status, OPERATION_FAILED);
    }
}
