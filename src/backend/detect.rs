//! Runtime probe for the vendor driver library matching the backend that
//! was selected at build time. Purely informative: the shuffle surface is
//! chosen by build configuration, never by this probe. Nothing in the
//! crate requires the driver to be present.

use libloading::Library;
use once_cell::sync::Lazy;

use super::ProbeError;

/// Result of a successful driver probe.
#[derive(Debug, Clone)]
pub struct VendorProbe {
    pub vendor: &'static str,
    pub library: &'static str,
}

#[cfg(feature = "cuda")]
const DRIVER_CANDIDATES: &[&str] = &["libcuda.so", "libcuda.so.1", "nvcuda.dll"];

#[cfg(all(feature = "amd", not(feature = "cuda")))]
const DRIVER_CANDIDATES: &[&str] = &["libamdhip64.so", "libamdhip64.so.6", "amdhip64.dll"];

static PROBE: Lazy<Result<VendorProbe, ProbeError>> = Lazy::new(probe_driver);

fn probe_driver() -> Result<VendorProbe, ProbeError> {
    for &name in DRIVER_CANDIDATES {
        // Only checks that the library loads; no symbols are resolved.
        if unsafe { Library::new(name) }.is_ok() {
            return Ok(VendorProbe {
                vendor: crate::shfl::BACKEND_NAME,
                library: name,
            });
        }
    }
    Err(ProbeError::DriverNotFound)
}

/// Probe once, then answer from cache.
pub fn vendor_probe() -> Result<VendorProbe, ProbeError> {
    PROBE.clone()
}
