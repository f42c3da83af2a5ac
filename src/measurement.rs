//! Interval timing and time-to-distance conversion.

use libm::round;

use crate::config::Config;
use crate::error::Error;

/// Microseconds between two monotonic timestamps.
///
/// `end` must not precede `start`; the clock is monotonic and the caller
/// orders the arguments, so a violation is a programmer error and panics
/// rather than being reported as a runtime condition.
pub fn elapsed(start_us: u64, end_us: u64) -> u64 {
    debug_assert!(end_us >= start_us, "timestamps out of order");
    end_us - start_us
}

/// One completed measurement cycle.
///
/// A value of this type is only ever constructed from an echo pulse whose
/// rising and falling edges were both observed within their timeout windows
/// and whose converted distance lies inside the configured envelope.
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub struct Measurement {
    round_trip_us: u64,
    distance_cm: f64,
}

impl Measurement {
    /// Convert an echo pulse width to a distance, rejecting values outside
    /// the sensor's measurement envelope.
    pub(crate) fn from_round_trip(round_trip_us: u64, config: &Config) -> Result<Self, Error> {
        let duration_s = round_trip_us as f64 / 1_000_000.0;
        let distance_cm = duration_s * config.speed_of_sound_cm_per_s / 2.0;
        if distance_cm < config.min_distance_cm || distance_cm > config.max_distance_cm {
            return Err(Error::OutOfRange(distance_cm));
        }
        Ok(Self {
            round_trip_us,
            distance_cm,
        })
    }

    /// Width of the echo pulse, i.e. the out-and-back travel time of the
    /// ping, in microseconds.
    pub fn round_trip_us(&self) -> u64 {
        self.round_trip_us
    }

    /// Distance in centimeters, full precision.
    pub fn cm(&self) -> f64 {
        self.distance_cm
    }

    /// Distance in centimeters rounded to two decimals, for display.
    pub fn cm_rounded(&self) -> f64 {
        round(self.distance_cm * 100.0) / 100.0
    }

    /// Distance in inches, full precision.
    pub fn inches(&self) -> f64 {
        self.distance_cm / 2.54
    }
}
