//! Shuffle-intrinsic adapter for the AMD fallback build.
//!
//! The AMD toolchain modeled by this backend only ships the 3-argument
//! unsuffixed shuffle forms. Kernels in this codebase are written against
//! the `_sync`-suffixed calling convention, so this module supplies the
//! missing names and forwards each call to the native form.
//!
//! The participation mask is accepted for call-site compatibility and
//! **silently discarded**: the native forms have no such parameter and
//! every lane of the wavefront participates. A caller relying on a
//! non-full mask for divergence safety gets weaker behavior on this
//! backend than on the `cuda` backend. Masked participation is not
//! emulated here; doing so would change the performance and correctness
//! profile of calling kernels and belongs at the call sites.
//!
//! When the build declares that the toolchain already ships its own
//! `_sync` forms (`native-shfl-sync`), this module is compiled out and
//! the names resolve to the native definitions instead.

use super::amd;

/// Forwards to [`amd::shfl`]; `_mask` is discarded.
#[inline]
pub fn shfl_sync<T: Copy>(_mask: u32, vals: &[T], src_lane: u32, width: u32) -> Vec<T> {
    amd::shfl(vals, src_lane, width)
}

/// Forwards to [`amd::shfl_up`]; `_mask` is discarded.
#[inline]
pub fn shfl_up_sync<T: Copy>(_mask: u32, vals: &[T], delta: u32, width: u32) -> Vec<T> {
    amd::shfl_up(vals, delta, width)
}

/// Forwards to [`amd::shfl_xor`]; `_mask` is discarded.
#[inline]
pub fn shfl_xor_sync<T: Copy>(_mask: u32, vals: &[T], lane_mask: u32, width: u32) -> Vec<T> {
    amd::shfl_xor(vals, lane_mask, width)
}
