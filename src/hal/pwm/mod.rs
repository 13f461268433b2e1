use core::cell::RefCell;
use core::fmt::Debug;

use embedded_time::duration::Microseconds;
use num_traits::NumCast;

mod error;
pub use error::Error;

mod pin;
pub use pin::PwmPinEmitter;

mod timer;
pub use timer::PwmTimer;

/// A source of PWM pulses.
pub trait PulseEmitter {
    /// Identifies an output line of this emitter.
    type Channel: Copy + Debug;

    /// Emit pulses of `width` repeating every `period` on `channel`.
    ///
    /// Failures are the emitter's concern and are not reported to the caller.
    fn emit(&mut self, channel: Self::Channel, width: Microseconds<u32>, period: Microseconds<u32>);
}

impl<T> PulseEmitter for &mut T
where
    T: PulseEmitter + ?Sized,
{
    type Channel = T::Channel;

    fn emit(&mut self, channel: Self::Channel, width: Microseconds<u32>, period: Microseconds<u32>) {
        (**self).emit(channel, width, period)
    }
}

/// Lets several servos share one emitter, e.g. the channels of a single timer.
impl<T> PulseEmitter for &RefCell<T>
where
    T: PulseEmitter + ?Sized,
{
    type Channel = T::Channel;

    fn emit(&mut self, channel: Self::Channel, width: Microseconds<u32>, period: Microseconds<u32>) {
        self.borrow_mut().emit(channel, width, period)
    }
}

/// Convert a pulse `width` within `period` to a duty cycle out of `max_duty`.
///
/// Integer duty types round down.
/// ```
/// use embedded_servo::hal::pwm::duty_cycle;
/// use embedded_time::duration::Microseconds;
///
/// let duty: u16 = duty_cycle(Microseconds(1500), Microseconds(20_000), 1000).unwrap();
/// assert_eq!(duty, 75);
/// ```
pub fn duty_cycle<D>(
    width: Microseconds<u32>,
    period: Microseconds<u32>,
    max_duty: D,
) -> Result<D, Error>
where
    D: NumCast,
{
    if period.0 == 0 {
        return Err(Error::ZeroPeriod);
    }
    if width.0 > period.0 {
        return Err(Error::PulseExceedsPeriod {
            width: width.0,
            period: period.0,
        });
    }

    // Integer duties use integer math, f64 loses precision above 2^53
    if truncates::<D>() {
        let max = max_duty.to_u64().ok_or(Error::Duty)?;
        let duty = <u128 as From<u32>>::from(width.0) * <u128 as From<u64>>::from(max)
            / <u128 as From<u32>>::from(period.0);

        // width <= period so duty <= max
        return <D as NumCast>::from(duty as u64).ok_or(Error::Duty);
    }

    let max = max_duty.to_f64().ok_or(Error::Duty)?;
    let duty = <f64 as From<u32>>::from(width.0) * max / <f64 as From<u32>>::from(period.0);
    <D as NumCast>::from(duty).ok_or(Error::Duty)
}

/// Returns `true` if `D` is an integer type.
fn truncates<D: NumCast>() -> bool {
    <D as NumCast>::from(0.5f64).and_then(|half| half.to_f64()) == Some(0.0)
}
