pub mod runtime_flags;

pub use runtime_flags::{warp_runtime_flags, RuntimeFlags};
