// Block launcher for the simulated warp model: runs a warp-level kernel
// over every warp of a block, in parallel when the runtime flags allow it.

use rayon::prelude::*;

use super::warp::VWarp;

/// Build a block of `num_warps` warps of `width` lanes each, with
/// consecutive global thread ids.
pub fn block_of(num_warps: usize, width: u32) -> Vec<VWarp> {
    (0..num_warps)
        .map(|w| VWarp::new(width, w * width as usize))
        .collect()
}

/// Run `kernel` once per warp of the block. Warps are independent, so they
/// run on the rayon pool unless `enable_block_parallelism` is off.
pub fn launch_block<F>(warps: &mut [VWarp], kernel: F)
where
    F: Fn(&mut VWarp) + Sync,
{
    let parallel = crate::config::warp_runtime_flags().enable_block_parallelism;

    if parallel {
        warps.par_iter_mut().for_each(|w| kernel(w));
    } else {
        for w in warps.iter_mut() {
            kernel(w);
        }
    }
}
