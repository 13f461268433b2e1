use num_traits::Float;

pub mod pwm;
pub use pwm::{PulseEmitter, PwmPinEmitter, PwmTimer};

pub mod servo;
pub use servo::{Builder, ContinuousServo};

/// The kind of input an output device expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Commands are a signed speed, 0 meaning stop.
    Speed,
    /// Commands are an absolute angle.
    Position,
}

/// Common contract of every output device in a joint.
///
/// Devices start disabled. Disabling a device must leave its output in a safe
/// state, for a speed device this means actively commanding a stop.
pub trait OutputDevice {
    type Command;

    fn input_kind(&self) -> InputKind;

    fn is_enabled(&self) -> bool;

    /// Enable or disable the device.
    fn set_enabled(&mut self, enabled: bool);

    /// Drive the device with a command. Ignored while disabled.
    fn drive(&mut self, command: Self::Command);
}

impl<T> OutputDevice for &mut T
where
    T: OutputDevice + ?Sized,
{
    type Command = T::Command;

    fn input_kind(&self) -> InputKind {
        (**self).input_kind()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }

    fn drive(&mut self, command: Self::Command) {
        (**self).drive(command)
    }
}

pub trait Actuator<T: Float> {
    /// Output a percentage in [-1, 1].
    fn output(&mut self, output: T);
}
