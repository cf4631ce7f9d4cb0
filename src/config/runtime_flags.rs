use std::sync::{Mutex, MutexGuard, OnceLock};

#[derive(Debug, Clone)]
pub struct RuntimeFlags {
    /// Run block launches over the rayon pool. On by default; tests that
    /// need deterministic sequential execution turn it off.
    pub enable_block_parallelism: bool,
    /// Trace every warp collective to stderr (noisy; debug only).
    pub trace_collectives: bool,
}

impl Default for RuntimeFlags {
    fn default() -> Self {
        Self {
            enable_block_parallelism: true,
            trace_collectives: false,
        }
    }
}

static WARP_RUNTIME_FLAGS: OnceLock<Mutex<RuntimeFlags>> = OnceLock::new();

/// Global flags guarding the simulated execution paths.
pub fn warp_runtime_flags() -> MutexGuard<'static, RuntimeFlags> {
    WARP_RUNTIME_FLAGS
        .get_or_init(|| Mutex::new(RuntimeFlags::default()))
        .lock()
        .unwrap()
}
