// Index math shared by the per-vendor shuffle surfaces, simulated on CPU
// lane slices. A warp is split into independent segments of `width` lanes;
// no exchange crosses a segment boundary.

pub(crate) fn check_width(width: u32, warp_width: u32) {
    assert!(
        width.is_power_of_two(),
        "shuffle width must be a power of two, got {}",
        width
    );
    assert!(
        width <= warp_width,
        "shuffle width must be at most {}, got {}",
        warp_width,
        width
    );
}

pub(crate) fn check_lanes<T>(vals: &[T], warp_width: u32) {
    assert!(
        vals.len() as u32 <= warp_width,
        "at most {} lanes per warp, got {}",
        warp_width,
        vals.len()
    );
}

#[inline]
pub(crate) fn segment_base(lane: u32, width: u32) -> u32 {
    lane & !(width - 1)
}

#[inline]
fn in_mask(mask: u64, lane: u32) -> bool {
    (mask >> lane) & 1 == 1
}

// A read from a lane outside the mask is undefined on hardware; the
// simulation resolves it to the reader's own value.
fn read_src<T: Copy>(mask: u64, vals: &[T], own: usize, src: u32) -> T {
    let s = src as usize;
    if s < vals.len() && in_mask(mask, src) {
        vals[s]
    } else {
        vals[own]
    }
}

/// Indexed shuffle: each lane in the mask reads `src_lane % width` within
/// its own segment. Lanes outside the mask keep their own value.
pub(crate) fn shuffle_idx<T: Copy>(
    mask: u64,
    vals: &[T],
    src_lane: u32,
    width: u32,
    warp_width: u32,
) -> Vec<T> {
    check_width(width, warp_width);
    check_lanes(vals, warp_width);

    (0..vals.len())
        .map(|i| {
            let lane = i as u32;
            if !in_mask(mask, lane) {
                return vals[i];
            }
            let src = segment_base(lane, width) + (src_lane & (width - 1));
            read_src(mask, vals, i, src)
        })
        .collect()
}

/// Up shuffle: each lane reads the lane `delta` positions below it. A source
/// below the segment base resolves to the lane's own value.
pub(crate) fn shuffle_up<T: Copy>(
    mask: u64,
    vals: &[T],
    delta: u32,
    width: u32,
    warp_width: u32,
) -> Vec<T> {
    check_width(width, warp_width);
    check_lanes(vals, warp_width);

    (0..vals.len())
        .map(|i| {
            let lane = i as u32;
            if !in_mask(mask, lane) {
                return vals[i];
            }
            let base = segment_base(lane, width);
            // u64 arithmetic: delta is caller-controlled and may exceed the lane id.
            if lane as u64 >= base as u64 + delta as u64 {
                read_src(mask, vals, i, lane - delta)
            } else {
                vals[i]
            }
        })
        .collect()
}

/// Butterfly shuffle: each lane exchanges with `lane ^ lane_mask`. A partner
/// outside the lane's segment resolves to the lane's own value.
pub(crate) fn shuffle_xor<T: Copy>(
    mask: u64,
    vals: &[T],
    lane_mask: u32,
    width: u32,
    warp_width: u32,
) -> Vec<T> {
    check_width(width, warp_width);
    check_lanes(vals, warp_width);

    (0..vals.len())
        .map(|i| {
            let lane = i as u32;
            if !in_mask(mask, lane) {
                return vals[i];
            }
            let partner = lane ^ lane_mask;
            if partner < warp_width && segment_base(partner, width) == segment_base(lane, width) {
                read_src(mask, vals, i, partner)
            } else {
                vals[i]
            }
        })
        .collect()
}
