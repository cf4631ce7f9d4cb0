//! AMD shuffle surface: 3-argument unsuffixed forms over a 64-lane
//! wavefront. There is no participation-mask parameter; every lane of the
//! wavefront takes part, divergent or not.

use super::lanes;

pub const BACKEND_NAME: &str = "amd";

/// Lanes per hardware wavefront.
pub const WARP_WIDTH: u32 = 64;

/// Mask literal callers write at `_sync` call sites. The compat adapter
/// discards it; the `native-shfl-sync` forms read its low 32 bits and treat
/// the upper lanes as always participating.
pub const FULL_MASK: u32 = 0xffff_ffff;

const ALL_LANES: u64 = !0;

/// Each lane reads the value of `src_lane` (modulo `width`) within its own
/// width-segment.
pub fn shfl<T: Copy>(vals: &[T], src_lane: u32, width: u32) -> Vec<T> {
    lanes::shuffle_idx(ALL_LANES, vals, src_lane, width, WARP_WIDTH)
}

/// Each lane reads the value of the lane `delta` positions below it; lanes
/// whose source would cross below their segment keep their own value.
pub fn shfl_up<T: Copy>(vals: &[T], delta: u32, width: u32) -> Vec<T> {
    lanes::shuffle_up(ALL_LANES, vals, delta, width, WARP_WIDTH)
}

/// Each lane exchanges with lane `own_id XOR lane_mask`; a partner outside
/// the lane's segment resolves to the lane's own value.
pub fn shfl_xor<T: Copy>(vals: &[T], lane_mask: u32, width: u32) -> Vec<T> {
    lanes::shuffle_xor(ALL_LANES, vals, lane_mask, width, WARP_WIDTH)
}

// `_sync` forms shipped by newer toolchains. Compiled only when the build
// declares the toolchain provides them (`native-shfl-sync`); otherwise the
// compat adapter supplies these names instead. The 32-bit mask covers the
// low half of the wavefront; upper lanes always participate.

#[cfg(feature = "native-shfl-sync")]
fn widen_mask(mask: u32) -> u64 {
    (mask as u64) | (!0u64 << 32)
}

#[cfg(feature = "native-shfl-sync")]
pub fn shfl_sync<T: Copy>(mask: u32, vals: &[T], src_lane: u32, width: u32) -> Vec<T> {
    lanes::shuffle_idx(widen_mask(mask), vals, src_lane, width, WARP_WIDTH)
}

#[cfg(feature = "native-shfl-sync")]
pub fn shfl_up_sync<T: Copy>(mask: u32, vals: &[T], delta: u32, width: u32) -> Vec<T> {
    lanes::shuffle_up(widen_mask(mask), vals, delta, width, WARP_WIDTH)
}

#[cfg(feature = "native-shfl-sync")]
pub fn shfl_xor_sync<T: Copy>(mask: u32, vals: &[T], lane_mask: u32, width: u32) -> Vec<T> {
    lanes::shuffle_xor(widen_mask(mask), vals, lane_mask, width, WARP_WIDTH)
}
