//! Build time signal configuration shared by every servo.

/// Pulse width (in microseconds) that holds a continuous servo stopped.
pub const NEUTRAL_WIDTH: u32 = 1500;

/// Repetition period (in microseconds) of the servo signal, a 50hz RC frame.
pub const SIGNAL_PERIOD: u32 = 20_000;

/// Nominal bound of a movement command, full speed in either direction.
///
/// The command span (2 * 1000) equals the pulse span (500 ~ 2500us) so a
/// command maps onto a pulse width by a plain offset.
pub const COMMAND_MAX: i32 = 1000;
