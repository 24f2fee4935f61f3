// Errors returned by every generation entry point.
// A call either produces a finished grid or one of these, never a partial grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    #[error("invalid grid dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // Random-walk cave carve hit its step ceiling before the floor target.
    #[error("walk gave up after {steps} steps with {opened}/{required} cells opened")]
    GenerationTimeout {
        steps: u64,
        opened: usize,
        required: usize,
    },

    #[error("generation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, GenError>;

// Shared check for the 0..=100 knobs (fill percent, floor percent, roughness, windyness)
pub(crate) fn check_percent(name: &'static str, value: u32) -> Result<()> {
    if value > 100 {
        return Err(GenError::InvalidParameter {
            name,
            reason: format!("{value} is outside 0..=100"),
        });
    }
    Ok(())
}
