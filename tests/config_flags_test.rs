use warpcompat::config::{warp_runtime_flags, RuntimeFlags};

#[test]
fn default_flags() {
    let defaults = RuntimeFlags::default();
    assert!(defaults.enable_block_parallelism);
    assert!(!defaults.trace_collectives);
}

#[test]
fn global_flags_are_shared_and_writable() {
    {
        let mut flags = warp_runtime_flags();
        flags.trace_collectives = true;
    }
    assert!(warp_runtime_flags().trace_collectives);
    {
        let mut flags = warp_runtime_flags();
        flags.trace_collectives = false;
    }
    assert!(!warp_runtime_flags().trace_collectives);
}
