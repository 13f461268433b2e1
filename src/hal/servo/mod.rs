mod builder;
pub use builder::Builder;

use embedded_time::duration::Microseconds;
use log::{debug, trace, warn};
use num_traits::{Float, NumCast};

use super::{Actuator, InputKind, OutputDevice, PulseEmitter};
use crate::config::COMMAND_MAX;

/// A continuous rotation servo driven by the pulse width of a PWM signal.
///
/// Commands are a speed in `[-COMMAND_MAX, COMMAND_MAX]` where 0 stops the
/// servo. A command maps to a pulse width by adding it to the neutral width,
/// so the default configuration spans 500us to 2500us.
///
/// Commands are not clamped. Keeping them in range is up to the caller.
///
/// The servo starts disabled and ignores commands until it is enabled.
/// Disabling it always emits a neutral pulse, stopping the servo.
pub struct ContinuousServo<E: PulseEmitter> {
    emitter: E,
    channel: E::Channel,
    is_inverted: bool,
    is_enabled: bool,
    neutral: Microseconds<u32>,
    period: Microseconds<u32>,
}

impl<E> ContinuousServo<E>
where
    E: PulseEmitter,
{
    /// Create a disabled servo on `channel`.
    /// An `inverted` servo turns in reverse for positive commands, e.g. when mounted upside down.
    pub fn new(emitter: E, channel: E::Channel, inverted: bool) -> Self {
        Builder::new().inverted(inverted).build(emitter, channel)
    }

    pub fn channel(&self) -> E::Channel {
        self.channel
    }

    pub fn is_inverted(&self) -> bool {
        self.is_inverted
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Move at `command` speed.
    ///
    /// Does nothing while the servo is disabled.
    pub fn drive(&mut self, command: i32) {
        if !self.is_enabled {
            return;
        }

        self.emit(command);
    }

    /// Enable or disable the servo.
    ///
    /// Disabling emits one neutral pulse even if the servo was already disabled.
    /// Enabling emits nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled != self.is_enabled {
            debug!("servo {:?} enabled: {}", self.channel, enabled);
        }
        self.is_enabled = enabled;

        if !enabled {
            self.emit(0);
        }
    }

    /// Calculate the pulse width for a `command`.
    ///
    /// Out of range commands are passed through, except that a width below 0us
    /// or above `u32::MAX` us can't be represented and saturates at that bound.
    /// With the default neutral width a non-inverted servo emits a 0us pulse for
    /// any command below -1500.
    pub fn pulse_width(&self, command: i32) -> Microseconds<u32> {
        let command = <i64 as From<i32>>::from(command);
        let command = if self.is_inverted { -command } else { command };

        let width = command + <i64 as From<u32>>::from(self.neutral.0);
        let max = <i64 as From<u32>>::from(u32::MAX);

        Microseconds(width.clamp(0, max) as u32)
    }

    /// Release the emitter.
    pub fn free(self) -> E {
        self.emitter
    }

    fn emit(&mut self, command: i32) {
        if !(-COMMAND_MAX..=COMMAND_MAX).contains(&command) {
            warn!(
                "servo {:?} command {} outside of +-{}",
                self.channel, command, COMMAND_MAX
            );
        }

        let width = self.pulse_width(command);
        trace!("servo {:?} pulse {}us", self.channel, width.0);
        self.emitter.emit(self.channel, width, self.period);
    }
}

impl<E> OutputDevice for ContinuousServo<E>
where
    E: PulseEmitter,
{
    type Command = i32;

    fn input_kind(&self) -> InputKind {
        InputKind::Speed
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        ContinuousServo::set_enabled(self, enabled)
    }

    fn drive(&mut self, command: i32) {
        ContinuousServo::drive(self, command)
    }
}

impl<E, T> Actuator<T> for ContinuousServo<E>
where
    E: PulseEmitter,
    T: Float,
{
    fn output(&mut self, output: T) {
        let scale = <T as NumCast>::from(COMMAND_MAX).unwrap_or_else(T::one);
        match <i32 as NumCast>::from((output * scale).round()) {
            Some(command) => self.drive(command),
            None => {
                warn!("servo {:?} output is not a finite speed", self.channel);
                self.drive(0)
            }
        }
    }
}
