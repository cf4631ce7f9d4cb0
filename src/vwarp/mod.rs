pub mod block;
pub mod warp;

pub use block::{block_of, launch_block};
pub use warp::{LaneMask, VLane, VWarp};
