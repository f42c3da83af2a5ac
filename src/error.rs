//! Error taxonomy for a measurement cycle.

use embedded_hal::digital::ErrorKind;

/// The wait the echo line failed to complete in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Phase {
    /// Waiting for the echo line to assert after the trigger pulse.
    EchoStart,
    /// Waiting for the echo line to deassert at the end of the pulse.
    EchoEnd,
}

/// Everything that can go wrong during one measurement.
///
/// `Timeout` and `OutOfRange` are recoverable: the sample is lost but the
/// sensor is fine, so the caller should discard and retry on its next
/// cadence tick. `Pin` is a GPIO access failure underneath the driver and
/// usually ends the session.
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum Error {
    /// The echo line never reached the expected level within the timeout
    /// window for the given phase. Typically a disconnected sensor, a
    /// wiring fault or an absent echo.
    Timeout(Phase),
    /// The computed distance in centimeters fell outside the sensor's
    /// measurement envelope, indicating a trigger/echo race or multi-path
    /// reflection noise.
    OutOfRange(f64),
    /// The trigger or echo pin reported an access error.
    Pin(ErrorKind),
}
