pub mod detect;
pub mod error;

pub use detect::{vendor_probe, VendorProbe};
pub use error::ProbeError;
