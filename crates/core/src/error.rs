//! Configuration errors for the generator and assembler.

/// Errors for invalid curve or snowflake configuration.
/// Reported to the caller before any geometry is generated; the previous
/// segment list is never touched on the error path.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than the minimum number of polygon faces
    InvalidFaceCount(u32),
    /// Non-positive snowflake radius
    InvalidRadius(f64),
    /// Non-positive base edge length
    InvalidLength(f64),
    /// Recursion depth above the configured maximum
    DepthTooDeep { depth: u32, max: u32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidFaceCount(n) => {
                write!(f, "Face count {} is below the minimum of 3", n)
            }
            ConfigError::InvalidRadius(r) => write!(f, "Radius {} must be positive", r),
            ConfigError::InvalidLength(l) => write!(f, "Edge length {} must be positive", l),
            ConfigError::DepthTooDeep { depth, max } => {
                write!(f, "Depth {} exceeds the maximum of {}", depth, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
