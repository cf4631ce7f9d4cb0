//! Warp-level collectives written once against the `_sync` shuffle surface.
//!
//! These compile unmodified on either backend. On `cuda` the full mask is
//! honored; on the `amd` fallback the adapter discards it and the whole
//! wavefront participates, which is what these full-width collectives want
//! anyway.

use crate::shfl::{shfl_sync, shfl_up_sync, shfl_xor_sync, FULL_MASK};

fn trace_collective(name: &str, width: u32) {
    if crate::config::warp_runtime_flags().trace_collectives && !crate::warp_is_silent() {
        eprintln!("[WARP] collective {} width={}", name, width);
    }
}

/// Butterfly reduction: after `log2(width)` exchange rounds every lane of a
/// segment holds the sum of the segment.
pub fn warp_reduce_sum(vals: &[f32], width: u32) -> Vec<f32> {
    trace_collective("reduce_sum", width);

    let mut acc = vals.to_vec();
    let mut offset = width / 2;
    while offset > 0 {
        let other = shfl_xor_sync(FULL_MASK, &acc, offset, width);
        for (a, o) in acc.iter_mut().zip(other.iter()) {
            *a += *o;
        }
        offset /= 2;
    }
    acc
}

/// Butterfly reduction: every lane of a segment ends up with the segment
/// maximum.
pub fn warp_reduce_max(vals: &[f32], width: u32) -> Vec<f32> {
    trace_collective("reduce_max", width);

    let mut acc = vals.to_vec();
    let mut offset = width / 2;
    while offset > 0 {
        let other = shfl_xor_sync(FULL_MASK, &acc, offset, width);
        for (a, o) in acc.iter_mut().zip(other.iter()) {
            *a = a.max(*o);
        }
        offset /= 2;
    }
    acc
}

/// Every lane of a segment receives the value held by `src_lane` of that
/// segment.
pub fn warp_broadcast(vals: &[f32], src_lane: u32, width: u32) -> Vec<f32> {
    trace_collective("broadcast", width);

    shfl_sync(FULL_MASK, vals, src_lane, width)
}

/// Hillis-Steele inclusive prefix sum within each width-segment.
pub fn warp_inclusive_scan(vals: &[f32], width: u32) -> Vec<f32> {
    trace_collective("inclusive_scan", width);

    let mut acc = vals.to_vec();
    let mut offset = 1;
    while offset < width {
        let below = shfl_up_sync(FULL_MASK, &acc, offset, width);
        for (i, a) in acc.iter_mut().enumerate() {
            // shfl_up hands back the lane's own value near the segment base,
            // so only lanes with a real source accumulate.
            if (i as u32) & (width - 1) >= offset {
                *a += below[i];
            }
        }
        offset *= 2;
    }
    acc
}
