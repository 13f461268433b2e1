use core::fmt::Debug;

use embedded_hal::Pwm;
use embedded_time::duration::Microseconds;
use log::{debug, warn};
use num_traits::NumCast;

use super::{duty_cycle, PulseEmitter};

/// A [`PulseEmitter`] for a multi-channel PWM timer.
///
/// The timer period is reprogrammed whenever a pulse asks for a different one.
pub struct PwmTimer<P> {
    pwm: P,
}

impl<P> PwmTimer<P>
where
    P: Pwm,
{
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    pub fn free(self) -> P {
        self.pwm
    }
}

impl<P> PulseEmitter for PwmTimer<P>
where
    P: Pwm,
    P::Channel: Copy + Debug,
    P::Time: PartialEq + From<Microseconds<u32>>,
    P::Duty: NumCast,
{
    type Channel = P::Channel;

    fn emit(&mut self, channel: Self::Channel, width: Microseconds<u32>, period: Microseconds<u32>) {
        if self.pwm.get_period() != <P::Time as From<_>>::from(period) {
            debug!("setting pwm period to {}us", period.0);
            self.pwm.set_period(period);
        }

        match duty_cycle(width, period, self.pwm.get_max_duty()) {
            Ok(duty) => {
                self.pwm.set_duty(channel, duty);
                self.pwm.enable(channel);
            }
            Err(error) => warn!(
                "dropping {}us pulse on channel {:?}: {:?}",
                width.0, channel, error
            ),
        }
    }
}
