//! Measurement parameters and speed-of-sound helpers.

use libm::sqrt;

/// The temperature unit accepted by [`speed_of_sound_cm_per_s`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// Timing and conversion parameters for one sensor.
///
/// The defaults match the HC-SR04 datasheet values and the common wiring
/// guides for this sensor class: a 10us trigger pulse, a 2cm..400cm
/// measurement envelope and a speed of sound of 34300 cm/s (air at roughly
/// 20 degrees Celsius). The settle delay defaults to 500ms, long enough to
/// guarantee any residual echo from a previous cycle has fully decayed; it
/// can be shortened to a few microseconds when measurements run on a known
/// quiet cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Time the trigger line is held low before the pulse, in microseconds.
    pub settle_delay_us: u32,
    /// Width of the trigger pulse, in microseconds.
    pub trigger_pulse_us: u32,
    /// Maximum wait for the echo line to assert, in microseconds.
    pub echo_start_timeout_us: u64,
    /// Maximum wait for the echo line to deassert again, in microseconds.
    pub echo_end_timeout_us: u64,
    /// Speed of sound used for the conversion, in centimeters per second.
    pub speed_of_sound_cm_per_s: f64,
    /// Lower bound of the sensor's measurement envelope, in centimeters.
    pub min_distance_cm: f64,
    /// Upper bound of the sensor's measurement envelope, in centimeters.
    pub max_distance_cm: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_us: 500_000,
            trigger_pulse_us: 10,
            // 400cm of range is ~23.3ms of echo width; 25ms leaves headroom
            // without stalling the caller noticeably on a missing echo.
            echo_start_timeout_us: 25_000,
            echo_end_timeout_us: 25_000,
            speed_of_sound_cm_per_s: 34_300.0,
            min_distance_cm: 2.0,
            max_distance_cm: 400.0,
        }
    }
}

/// Calculate the speed of sound in centimeters per second, adjusted for the
/// ambient temperature.
///
/// Useful for filling in [`Config::speed_of_sound_cm_per_s`] when the
/// environment temperature is known; if unknown, the default average
/// estimate must be used.
pub fn speed_of_sound_cm_per_s(temperature: f64, unit: TemperatureUnit) -> f64 {
    let celsius = match unit {
        TemperatureUnit::Celsius => temperature,
        TemperatureUnit::Fahrenheit => (temperature - 32.0) * 5.0 / 9.0,
    };
    331.5 * sqrt(1.0 + (celsius / 273.15)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::round;

    #[test]
    fn speed_of_sound_cm_per_s_temperature_adjusted_0() {
        assert_eq!(
            round(speed_of_sound_cm_per_s(0.0, TemperatureUnit::Celsius) / 100.0),
            round(331.5)
        );
    }

    #[test]
    fn speed_of_sound_cm_per_s_temperature_adjusted_20() {
        assert_eq!(
            round(speed_of_sound_cm_per_s(20.0, TemperatureUnit::Celsius) / 100.0),
            round(343.42)
        );
    }

    #[test]
    fn speed_of_sound_cm_per_s_temperature_adjusted_40() {
        assert_eq!(
            round(speed_of_sound_cm_per_s(40.0, TemperatureUnit::Celsius) / 100.0),
            round(354.94)
        );
    }

    #[test]
    fn can_use_fahrenheit() {
        assert_eq!(
            round(speed_of_sound_cm_per_s(32.0, TemperatureUnit::Fahrenheit) / 100.0),
            round(331.5)
        );
    }

    #[test]
    fn default_reproduces_common_conversion_constant() {
        // distance_cm = duration_s * 34300 / 2, i.e. the 17150 factor found
        // in most HC-SR04 wiring guides.
        let config = Config::default();
        assert_eq!(config.speed_of_sound_cm_per_s / 2.0, 17_150.0);
    }
}
