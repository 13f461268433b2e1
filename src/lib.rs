//! # embedded-servo
//! A `#![no_std]` library for driving continuous rotation servos from a joint controller.
//!
//! [`ContinuousServo`] turns a speed command in `[-1000, 1000]` into the pulse width
//! of an RC servo signal and hands it to a [`PulseEmitter`].
//!
//! [`hal`] contains the device contracts and emitters for `embedded-hal` PWM peripherals
//! ([`PwmTimer`](hal::PwmTimer) and [`PwmPinEmitter`](hal::PwmPinEmitter)).
//!
//! [`config`] contains the signal constants shared by every servo.
//!
//! # Examples
//! ```
//! use embedded_servo::{ContinuousServo, PulseEmitter};
//! use embedded_time::duration::Microseconds;
//!
//! struct ExampleEmitter;
//!
//! impl PulseEmitter for ExampleEmitter {
//!     type Channel = u8;
//!
//!     fn emit(&mut self, channel: u8, width: Microseconds<u32>, period: Microseconds<u32>) {
//!         dbg!(channel, width.0, period.0);
//!     }
//! }
//!
//! // Servos start disabled
//! let mut servo = ContinuousServo::new(ExampleEmitter, 9, false);
//! servo.set_enabled(true);
//!
//! // Full speed forward is a 2500us pulse
//! assert_eq!(servo.pulse_width(1000).0, 2500);
//! servo.drive(1000);
//!
//! // Disabling stops the servo with a 1500us pulse
//! servo.set_enabled(false);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;

pub mod hal;
pub use hal::{Actuator, Builder, ContinuousServo, InputKind, OutputDevice, PulseEmitter};
