//! # hcsr04_blocking
//!
//! This crate provides a blocking driver for the HC-SR04 ultrasonic
//! distance sensor, built on the `embedded-hal` pin and delay traits.
//!
//! Each measurement cycle drives the trigger line low/high/low, busy-polls
//! the echo line for the rising and falling edges of the echo pulse, and
//! converts the pulse width to a distance using the speed of sound. Unlike
//! the bare polling loops found in most wiring guides, both echo waits are
//! bounded by a configurable deadline: a disconnected or stuck echo line
//! yields a [`Error::Timeout`] instead of spinning forever, and a reading
//! outside the sensor's 2cm..400cm envelope yields [`Error::OutOfRange`]
//! instead of a nonsensical distance.
//!
//! The echo waits are deliberately busy-polled (no sleeping, no yielding):
//! echo widths are sub-millisecond, so sampling latency converts directly
//! into distance error. See [`Hcsr04::measure`] for the blocking behavior.
//!
//! # Example
//!
//! ```rust, ignore
//! #![no_std]
//! #![no_main]
//!
//! use defmt::*;
//! use embassy_executor::Spawner;
//! use embassy_rp::gpio::{Input, Level, Output, Pull};
//! use embassy_time::{Delay, Duration, Instant, Timer};
//! use hcsr04_blocking::{Config, Hcsr04, Now};
//! use {defmt_rtt as _, panic_probe as _};
//!
//! #[embassy_executor::main]
//! async fn main(_spawner: Spawner) {
//!     let p = embassy_rp::init(Default::default());
//!     info!("Running!");
//!
//!     let trigger = Output::new(p.PIN_13, Level::Low);
//!     let echo = Input::new(p.PIN_28, Pull::None);
//!
//!     // Clock that returns monotonic microseconds
//!     struct EmbassyClock;
//!
//!     impl Now for EmbassyClock {
//!         fn now_micros(&self) -> u64 {
//!             Instant::now().as_micros()
//!         }
//!     }
//!
//!     let mut sensor = Hcsr04::new(trigger, echo, Config::default(), EmbassyClock, Delay);
//!
//!     loop {
//!         match sensor.measure() {
//!             Ok(m) => info!("Distance: {} cm", m.cm_rounded()),
//!             Err(e) => info!("Measurement error: {:?}", e),
//!         }
//!         Timer::after(Duration::from_secs(1)).await;
//!     }
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod config;
mod error;
mod measurement;
mod sensor;

pub use config::{speed_of_sound_cm_per_s, Config, TemperatureUnit};
pub use error::{Error, Phase};
pub use measurement::{elapsed, Measurement};
pub use sensor::{Hcsr04, Now};

#[cfg(test)]
mod test_support {
    use core::sync::atomic::{AtomicU32, Ordering};
    use defmt_rtt as _;

    // timestamp provider
    static COUNT: AtomicU32 = AtomicU32::new(0);
    defmt::timestamp!("{=u32:us}", COUNT.fetch_add(1, Ordering::Relaxed));

    // Implement the critical_section functions
    use critical_section::RawRestoreState;

    struct CriticalSection;

    unsafe impl critical_section::Impl for CriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            // Implement critical section acquire
        }

        unsafe fn release(_state: RawRestoreState) {
            // Implement critical section release
        }
    }
    critical_section::set_impl!(CriticalSection);
}
