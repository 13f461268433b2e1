use embedded_hal::PwmPin;
use embedded_time::duration::Microseconds;
use log::{trace, warn};
use num_traits::NumCast;

use super::{duty_cycle, PulseEmitter};

/// A [`PulseEmitter`] for a single PWM pin.
///
/// The pin's timer fixes the signal period so the requested period is only
/// checked against the one given at construction.
pub struct PwmPinEmitter<P> {
    pin: P,
    period: Microseconds<u32>,
    is_enabled: bool,
}

impl<P> PwmPinEmitter<P>
where
    P: PwmPin,
{
    /// Create an emitter for a `pin` whose timer runs at `period`.
    pub fn new(pin: P, period: Microseconds<u32>) -> Self {
        Self {
            pin,
            period,
            is_enabled: false,
        }
    }

    pub fn free(self) -> P {
        self.pin
    }
}

impl<P> PulseEmitter for PwmPinEmitter<P>
where
    P: PwmPin,
    P::Duty: NumCast,
{
    type Channel = ();

    fn emit(&mut self, _channel: (), width: Microseconds<u32>, period: Microseconds<u32>) {
        if period != self.period {
            trace!(
                "requested period {}us, pin runs at {}us",
                period.0,
                self.period.0
            );
        }

        match duty_cycle(width, self.period, self.pin.get_max_duty()) {
            Ok(duty) => {
                self.pin.set_duty(duty);
                if !self.is_enabled {
                    self.pin.enable();
                    self.is_enabled = true;
                }
            }
            Err(error) => warn!("dropping {}us pulse: {:?}", width.0, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::PwmPin;
    use embedded_time::duration::Microseconds;

    use super::PwmPinEmitter;
    use crate::hal::PulseEmitter;

    #[derive(Default)]
    struct Pin {
        duty: u16,
        enables: u8,
    }

    impl PwmPin for Pin {
        type Duty = u16;

        fn disable(&mut self) {}

        fn enable(&mut self) {
            self.enables += 1;
        }

        fn get_duty(&self) -> u16 {
            self.duty
        }

        fn get_max_duty(&self) -> u16 {
            20_000
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
    }

    #[test]
    fn sets_duty_and_enables_once() {
        let mut emitter = PwmPinEmitter::new(Pin::default(), Microseconds(20_000));
        emitter.emit((), Microseconds(1500), Microseconds(20_000));
        emitter.emit((), Microseconds(2100), Microseconds(20_000));

        let pin = emitter.free();
        assert_eq!(pin.duty, 2100);
        assert_eq!(pin.enables, 1);
    }

    #[test]
    fn duty_uses_pin_period() {
        let mut emitter = PwmPinEmitter::new(Pin::default(), Microseconds(10_000));
        emitter.emit((), Microseconds(1500), Microseconds(20_000));
        assert_eq!(emitter.free().duty, 3000);
    }

    #[test]
    fn drops_invalid_pulse() {
        let mut emitter = PwmPinEmitter::new(Pin::default(), Microseconds(20_000));
        emitter.emit((), Microseconds(1500), Microseconds(20_000));
        emitter.emit((), Microseconds(30_000), Microseconds(20_000));

        let pin = emitter.free();
        assert_eq!(pin.duty, 1500);
    }
}
