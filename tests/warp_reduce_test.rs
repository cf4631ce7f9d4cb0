use rand::Rng;

use warpcompat::{
    block_of, launch_block, warp_broadcast, warp_inclusive_scan, warp_reduce_max,
    warp_reduce_sum, WARP_WIDTH,
};

fn random_lane_values() -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..WARP_WIDTH).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

// Turns block parallelism off for a scope and restores it on drop, even if
// the test panics mid-way.
struct SequentialBlockGuard;

impl SequentialBlockGuard {
    fn enable() -> Self {
        warpcompat::config::warp_runtime_flags().enable_block_parallelism = false;
        SequentialBlockGuard
    }
}

impl Drop for SequentialBlockGuard {
    fn drop(&mut self) {
        warpcompat::config::warp_runtime_flags().enable_block_parallelism = true;
    }
}

fn assert_close(a: f32, b: f32) {
    assert!(
        (a - b).abs() < 1e-4,
        "expected {} to be close to {}",
        a,
        b
    );
}

#[test]
fn reduce_sum_full_warp() {
    let vals = random_lane_values();
    let total: f32 = vals.iter().sum();
    let out = warp_reduce_sum(&vals, WARP_WIDTH);
    for v in &out {
        assert_close(*v, total);
    }
}

#[test]
fn reduce_sum_segmented() {
    let vals = random_lane_values();
    let out = warp_reduce_sum(&vals, 8);
    for (i, v) in out.iter().enumerate() {
        let base = i & !7;
        let seg_total: f32 = vals[base..base + 8].iter().sum();
        assert_close(*v, seg_total);
    }
}

#[test]
fn reduce_max_full_warp() {
    let vals = random_lane_values();
    let best = vals.iter().cloned().fold(f32::MIN, f32::max);
    let out = warp_reduce_max(&vals, WARP_WIDTH);
    // max is order-independent, exact equality holds
    assert!(out.iter().all(|v| *v == best));
}

#[test]
fn broadcast_from_lane_zero() {
    let vals = random_lane_values();
    let out = warp_broadcast(&vals, 0, WARP_WIDTH);
    assert!(out.iter().all(|v| *v == vals[0]));
}

#[test]
fn inclusive_scan_matches_serial_prefix() {
    let vals = random_lane_values();
    let out = warp_inclusive_scan(&vals, WARP_WIDTH);
    let mut acc = 0.0f32;
    for (v, o) in vals.iter().zip(out.iter()) {
        acc += *v;
        assert_close(*o, acc);
    }
}

#[test]
fn inclusive_scan_segmented() {
    let vals = random_lane_values();
    let out = warp_inclusive_scan(&vals, 4);
    for (i, o) in out.iter().enumerate() {
        let base = i & !3;
        let prefix: f32 = vals[base..=i].iter().sum();
        assert_close(*o, prefix);
    }
}

#[test]
fn block_wide_reduce_over_rayon_launcher() {
    let mut warps = block_of(4, WARP_WIDTH);
    for warp in warps.iter_mut() {
        let vals: Vec<f32> = warp.lanes.iter().map(|l| l.tid as f32).collect();
        warp.load(&vals);
    }

    launch_block(&mut warps, |warp| {
        let sums = warp_reduce_sum(&warp.values(), warp.width());
        warp.load(&sums);
    });

    for (w, warp) in warps.iter().enumerate() {
        let base = w * WARP_WIDTH as usize;
        let expected: f32 = (base..base + WARP_WIDTH as usize).map(|t| t as f32).sum();
        for lane in &warp.lanes {
            assert_close(lane.value, expected);
        }
    }
}

#[test]
fn block_launch_sequential_fallback_matches() {
    let mut parallel = block_of(2, WARP_WIDTH);
    let mut sequential = parallel.clone();
    for warps in [&mut parallel, &mut sequential] {
        for warp in warps.iter_mut() {
            let vals: Vec<f32> = warp.lanes.iter().map(|l| l.tid as f32 + 1.0).collect();
            warp.load(&vals);
        }
    }

    launch_block(&mut parallel, |warp| {
        let m = warp_reduce_max(&warp.values(), warp.width());
        warp.load(&m);
    });

    {
        let _sequential_mode = SequentialBlockGuard::enable();
        launch_block(&mut sequential, |warp| {
            let m = warp_reduce_max(&warp.values(), warp.width());
            warp.load(&m);
        });
    }

    for (p, s) in parallel.iter().zip(sequential.iter()) {
        assert_eq!(p.values(), s.values());
    }
}
