use std::fmt;

#[derive(Debug, Clone)]
pub enum ProbeError {
    DriverNotFound,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::DriverNotFound => write!(f, "vendor driver library not found"),
        }
    }
}

impl std::error::Error for ProbeError {}
