//! Opaque libvips handle types.
//!
//! Mirrors the forward-declared incomplete structs the C shim used: the shim
//! only ever names the pointer type, never the layout, so both types are
//! zero-sized opaque structs that cannot be constructed or dereferenced from
//! Rust.

use std::marker::{PhantomData, PhantomPinned};

/// An output sink (`VipsTarget *`). Finalized by `vips_target_end`.
#[repr(C)]
pub struct VipsTarget {
    _layout_unknown: [u8; 0],
    _unsend: PhantomData<(*mut u8, PhantomPinned)>,
}

/// An in-memory image object (`VipsImage *`).
#[repr(C)]
pub struct VipsImage {
    _layout_unknown: [u8; 0],
    _unsend: PhantomData<(*mut u8, PhantomPinned)>,
}
