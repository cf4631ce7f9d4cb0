//! Warp-shuffle operation surface, one vendor backend selected per build.
//!
//! Call sites are written once against the `_sync`-suffixed calling
//! convention (mask, values, selector, width). Which implementation those
//! names resolve to is decided entirely at build time:
//!
//! - feature `cuda` (default): the vendor-native `_sync` forms, mask honored.
//! - feature `amd`: the vendor ships only 3-argument unsuffixed forms; the
//!   compat adapter supplies the `_sync` names and discards the mask.
//! - feature `amd` + `native-shfl-sync`: the toolchain already provides
//!   `_sync` forms of its own, so the adapter is compiled out.
//!
//! There is no runtime branching: exactly one surface exists per build.

#[cfg(all(feature = "cuda", feature = "amd"))]
compile_error!("features `cuda` and `amd` are mutually exclusive: select one shuffle backend");

#[cfg(not(any(feature = "cuda", feature = "amd")))]
compile_error!("no shuffle backend selected: enable feature `cuda` or `amd`");

pub(crate) mod lanes;

#[cfg(feature = "cuda")]
pub mod cuda;

#[cfg(feature = "amd")]
pub mod amd;

#[cfg(all(feature = "amd", not(feature = "native-shfl-sync")))]
pub mod compat;

#[cfg(feature = "cuda")]
pub use cuda::{shfl_sync, shfl_up_sync, shfl_xor_sync, BACKEND_NAME, FULL_MASK, WARP_WIDTH};

#[cfg(feature = "amd")]
pub use amd::{BACKEND_NAME, FULL_MASK, WARP_WIDTH};

#[cfg(all(feature = "amd", feature = "native-shfl-sync"))]
pub use amd::{shfl_sync, shfl_up_sync, shfl_xor_sync};

#[cfg(all(feature = "amd", not(feature = "native-shfl-sync")))]
pub use compat::{shfl_sync, shfl_up_sync, shfl_xor_sync};
