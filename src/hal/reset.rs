//! PHY Reset HAL
//!
//! Drives the board-level PHY reset line through a fixed
//! assert / hold / release / settle sequence.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::driver::config::ResetTiming;
use crate::error::{ResetError, ResetResult};
use crate::internal::constants::PHY_RESET_BUSY_WAIT_MAX_MS;

// =============================================================================
// Reset Line
// =============================================================================

/// Outcome of requesting the PHY reset line from the platform
#[derive(Debug)]
pub enum ResetLine<P> {
    /// The device description declares no reset line
    Absent,
    /// The line was acquired and is owned by the device
    Acquired(P),
    /// A line is declared but could not be acquired
    Unavailable,
}

impl<P> ResetLine<P> {
    /// Whether a line is declared (acquired or not)
    pub const fn is_declared(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Give back the pin, if one was acquired
    pub fn into_pin(self) -> Option<P> {
        match self {
            Self::Acquired(pin) => Some(pin),
            Self::Absent | Self::Unavailable => None,
        }
    }
}

/// Reset line plus its timing, read once at probe
#[derive(Debug)]
pub struct ResetSpec<P> {
    /// The reset line
    pub line: ResetLine<P>,
    /// Polarity and delays
    pub timing: ResetTiming,
}

impl<P> ResetSpec<P> {
    /// Pair a line with its timing
    pub const fn new(line: ResetLine<P>, timing: ResetTiming) -> Self {
        Self { line, timing }
    }
}

// =============================================================================
// Reset State Machine
// =============================================================================

/// Reset sequence progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// Not started
    #[default]
    Idle,
    /// Line obtained, not yet driven
    Requested,
    /// Line held in reset
    Asserted,
    /// Line released
    Deasserted,
    /// Sequence finished
    Complete,
}

/// Linear PHY reset sequencer
///
/// Runs once per probe. There are no retries: a failure leaves the state at
/// the last step reached.
#[derive(Debug, Default)]
pub struct ResetSequencer {
    state: ResetState,
}

impl ResetSequencer {
    /// Create an idle sequencer
    pub const fn new() -> Self {
        Self {
            state: ResetState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> ResetState {
        self.state
    }

    /// Run the reset sequence.
    ///
    /// Without a declared line this completes immediately. A post delay
    /// above 1 s is rejected before the line is touched.
    pub fn run<P, D>(&mut self, spec: &mut ResetSpec<P>, delay: &mut D) -> ResetResult<ResetState>
    where
        P: OutputPin,
        D: DelayNs,
    {
        self.state = ResetState::Idle;
        let timing = spec.timing;

        if !spec.line.is_declared() {
            self.state = ResetState::Complete;
            return Ok(self.state);
        }
        if !timing.post_delay_valid() {
            return Err(ResetError::InvalidPostDelay);
        }
        let ResetLine::Acquired(pin) = &mut spec.line else {
            return Err(ResetError::AcquireFailed);
        };
        self.state = ResetState::Requested;

        drive(pin, timing.active_high)?;
        self.state = ResetState::Asserted;
        wait_ms(delay, timing.effective_assert_ms());

        drive(pin, !timing.active_high)?;
        self.state = ResetState::Deasserted;
        if timing.post_delay_ms != 0 {
            wait_ms(delay, timing.post_delay_ms);
        }

        self.state = ResetState::Complete;
        Ok(self.state)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> ResetResult<()> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| ResetError::AcquireFailed)
}

/// Short waits spin in microseconds, longer ones sleep in milliseconds
fn wait_ms<D: DelayNs>(delay: &mut D, ms: u32) {
    if ms > PHY_RESET_BUSY_WAIT_MAX_MS {
        delay.delay_ms(ms);
    } else {
        delay.delay_us(ms * 1000);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
