use embedded_time::duration::Microseconds;

use super::ContinuousServo;
use crate::config::{NEUTRAL_WIDTH, SIGNAL_PERIOD};
use crate::hal::PulseEmitter;

/// Builds a [`ContinuousServo`].
///
/// Defaults to a non-inverted servo using [`NEUTRAL_WIDTH`] and [`SIGNAL_PERIOD`].
pub struct Builder {
    inverted: bool,
    neutral: Microseconds<u32>,
    period: Microseconds<u32>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            inverted: false,
            neutral: Microseconds(NEUTRAL_WIDTH),
            period: Microseconds(SIGNAL_PERIOD),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Trim the pulse width that stops the servo, for servos whose stop point
    /// is off [`NEUTRAL_WIDTH`]. Commands stay offsets from this width.
    pub fn neutral(mut self, neutral: Microseconds<u32>) -> Self {
        self.neutral = neutral;
        self
    }

    /// Trim the signal period, for servos that don't accept [`SIGNAL_PERIOD`].
    pub fn period(mut self, period: Microseconds<u32>) -> Self {
        self.period = period;
        self
    }

    pub fn build<E>(self, emitter: E, channel: E::Channel) -> ContinuousServo<E>
    where
        E: PulseEmitter,
    {
        ContinuousServo {
            emitter,
            channel,
            is_inverted: self.inverted,
            is_enabled: false,
            neutral: self.neutral,
            period: self.period,
        }
    }
}
