/// An error converting a pulse width into a duty cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The signal period is zero.
    ZeroPeriod,
    /// The pulse is longer than the signal period.
    PulseExceedsPeriod { width: u32, period: u32 },
    /// The duty cycle can't be represented by the hardware duty type.
    Duty,
}
