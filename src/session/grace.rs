use std::thread;
use std::time::Duration;

/// Grace units per pause. Long enough for the operator to read the message.
pub const LOADING_UNITS: u32 = 1;
pub const FAREWELL_UNITS: u32 = 1;
pub const INTERRUPT_UNITS: u32 = 1;
pub const RECOVERY_UNITS: u32 = 2;
pub const STUB_UNITS: u32 = 3;
pub const UNEXPECTED_UNITS: u32 = 3;

/// Pause before the screen is redrawn or the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceDelay {
    unit: Duration,
}

impl GraceDelay {
    /// No pauses at all.
    pub const NONE: GraceDelay = GraceDelay {
        unit: Duration::ZERO,
    };

    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    pub fn duration(&self, units: u32) -> Duration {
        self.unit.saturating_mul(units)
    }

    pub fn pause(&self, units: u32) {
        let total = self.duration(units);
        if !total.is_zero() {
            thread::sleep(total);
        }
    }
}
