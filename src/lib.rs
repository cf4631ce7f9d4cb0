pub mod backend;
pub mod config;
pub mod reduce;
pub mod shfl;
pub mod vwarp;

use std::sync::atomic::{AtomicBool, Ordering};

pub use crate::backend::{vendor_probe, ProbeError, VendorProbe};
pub use crate::reduce::*;
pub use crate::shfl::{shfl_sync, shfl_up_sync, shfl_xor_sync, BACKEND_NAME, FULL_MASK, WARP_WIDTH};
pub use crate::vwarp::{block_of, launch_block, LaneMask, VLane, VWarp};

pub static WARP_SILENT_MODE: AtomicBool = AtomicBool::new(false);

pub fn warp_set_silent_mode(v: bool) {
    WARP_SILENT_MODE.store(v, Ordering::Relaxed);
}

pub fn warp_is_silent() -> bool {
    WARP_SILENT_MODE.load(Ordering::Relaxed)
}

/// Global debug flag controlled by WARPCOMPAT_DEBUG.
/// When true, verbose backend traces are enabled.
pub fn warp_debug_enabled() -> bool {
    let raw = std::env::var("WARPCOMPAT_DEBUG").unwrap_or_else(|_| "0".to_string());
    raw == "1" || raw.to_lowercase() == "true"
}

/// Name of the shuffle backend selected at build time.
pub fn active_backend() -> &'static str {
    shfl::BACKEND_NAME
}

#[ctor::ctor]
fn init_warpcompat_entrypoint() {
    if !warp_is_silent() && warp_debug_enabled() {
        println!(
            "[WARP] Shuffle backend: {} | warp width {}",
            shfl::BACKEND_NAME,
            shfl::WARP_WIDTH
        );
        match backend::vendor_probe() {
            Ok(p) => eprintln!("[WARP] Vendor driver present: {}", p.library),
            Err(e) => eprintln!("[WARP] Vendor driver probe: {}", e),
        }
    }
}
