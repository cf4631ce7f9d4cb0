//! NVIDIA shuffle surface: `_sync`-suffixed forms over 32-lane warps.
//!
//! The participation mask is **honored** on this backend: a calling lane
//! whose bit is clear does not take part and keeps its own value, and a
//! read from a lane whose bit is clear resolves to the reader's own value
//! (hardware leaves that read undefined; the simulation pins it down so
//! tests can rely on it).

use super::lanes;

pub const BACKEND_NAME: &str = "cuda";

/// Lanes per hardware warp.
pub const WARP_WIDTH: u32 = 32;

/// All 32 lanes participating.
pub const FULL_MASK: u32 = 0xffff_ffff;

/// Each lane in `mask` reads the value of `src_lane` (modulo `width`)
/// within its own width-segment.
pub fn shfl_sync<T: Copy>(mask: u32, vals: &[T], src_lane: u32, width: u32) -> Vec<T> {
    lanes::shuffle_idx(mask as u64, vals, src_lane, width, WARP_WIDTH)
}

/// Each lane in `mask` reads the value of the lane `delta` positions below
/// it; lanes whose source would cross below their segment keep their own
/// value.
pub fn shfl_up_sync<T: Copy>(mask: u32, vals: &[T], delta: u32, width: u32) -> Vec<T> {
    lanes::shuffle_up(mask as u64, vals, delta, width, WARP_WIDTH)
}

/// Each lane in `mask` exchanges with lane `own_id XOR lane_mask`; a partner
/// outside the lane's segment resolves to the lane's own value.
pub fn shfl_xor_sync<T: Copy>(mask: u32, vals: &[T], lane_mask: u32, width: u32) -> Vec<T> {
    lanes::shuffle_xor(mask as u64, vals, lane_mask, width, WARP_WIDTH)
}
