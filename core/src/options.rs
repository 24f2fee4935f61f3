use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{GenError, Result};

// Attempted walk steps allowed per grid cell before a cave walk gives up
pub const DEFAULT_WALK_STEPS_PER_CELL: u64 = 1_000;

// Cooperative cancellation flag, shared between the caller and a running generation.
// Checked once per walk step and once per tunnel row.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(GenError::Cancelled)
        } else {
            Ok(())
        }
    }
}

// Per-call knobs that are not algorithm parameters
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    // Ceiling on attempted cave-walk steps; None means DEFAULT_WALK_STEPS_PER_CELL * cells
    pub max_walk_steps: Option<u64>,
    pub cancel: CancelToken,
}

impl GenOptions {
    pub fn with_max_walk_steps(mut self, steps: u64) -> Self {
        self.max_walk_steps = Some(steps);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn walk_step_limit(&self, cells: usize) -> u64 {
        self.max_walk_steps
            .unwrap_or_else(|| (cells as u64).saturating_mul(DEFAULT_WALK_STEPS_PER_CELL))
    }
}
