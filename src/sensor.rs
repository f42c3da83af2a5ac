//! The trigger/echo handshake and the bounded edge waits.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, InputPin, OutputPin, PinState};

use crate::config::Config;
use crate::error::{Error, Phase};
use crate::measurement::{elapsed, Measurement};

/// Monotonic clock collaborator.
///
/// Must be unaffected by wall-clock adjustments; microsecond resolution is
/// enough for this sensor class.
pub trait Now {
    /// The time elapsed since startup in microseconds.
    fn now_micros(&self) -> u64;
}

/// The HC-SR04 ultrasonic distance sensor driver.
///
/// Owning the two pins makes the driver the session object for the sensor:
/// constructing it is the explicit initialization step, only one measurement
/// can be in flight because [`measure`](Hcsr04::measure) takes `&mut self`,
/// and [`release`](Hcsr04::release) hands the pins back exactly once so the
/// caller can deconfigure them on shutdown.
///
/// # Note
///
/// `measure` blocks the calling thread for the whole cycle: the settle
/// delay, the trigger pulse and up to two timeout windows. The echo waits
/// are busy-polled without sleeping or yielding, on purpose: echo widths
/// are sub-millisecond and any scheduling latency shows up directly as
/// distance error. Callers needing responsive shutdown should run
/// measurements on a dedicated worker and rely on the timeout bounds for
/// forward progress.
pub struct Hcsr04<TRIG, ECHO, CLOCK, DELAY> {
    trigger: TRIG,
    echo: ECHO,
    config: Config,
    clock: CLOCK,
    delay: DELAY,
}

impl<TRIG, ECHO, CLOCK, DELAY> Hcsr04<TRIG, ECHO, CLOCK, DELAY>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    CLOCK: Now,
    DELAY: DelayNs,
{
    /// Initialize a new sensor session.
    ///
    /// Requires the trigger output pin and the echo input pin, a [`Config`],
    /// a monotonic clock implementing [`Now`] and a blocking delay
    /// implementing [`DelayNs`].
    pub fn new(trigger: TRIG, echo: ECHO, config: Config, clock: CLOCK, delay: DELAY) -> Self {
        Self {
            trigger,
            echo,
            config,
            clock,
            delay,
        }
    }

    /// The parameters this sensor was configured with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// End the session, returning the pins for caller-side cleanup.
    pub fn release(self) -> (TRIG, ECHO) {
        (self.trigger, self.echo)
    }

    /// Drive the trigger line low/high/low.
    ///
    /// The line is held low for the settle delay first so a residual echo
    /// from a previous cycle cannot contaminate this one, then asserted for
    /// the configured pulse width (10us sensor minimum).
    fn emit_trigger_pulse(&mut self) -> Result<(), Error> {
        self.trigger.set_low().map_err(|e| Error::Pin(e.kind()))?;
        self.delay.delay_us(self.config.settle_delay_us);
        self.trigger.set_high().map_err(|e| Error::Pin(e.kind()))?;
        self.delay.delay_us(self.config.trigger_pulse_us);
        self.trigger.set_low().map_err(|e| Error::Pin(e.kind()))
    }

    /// Busy-poll the echo line until it reaches `target`, returning the
    /// timestamp of detection.
    ///
    /// The rising-edge and falling-edge waits are the same primitive with a
    /// different target level, so both phases share identical sampling and
    /// timeout semantics. If the deadline passes first the wait stops
    /// immediately with `Timeout(phase)`.
    fn wait_for_level(&mut self, target: PinState, timeout_us: u64, phase: Phase) -> Result<u64, Error> {
        let deadline = self.clock.now_micros().saturating_add(timeout_us);
        loop {
            let high = self.echo.is_high().map_err(|e| Error::Pin(e.kind()))?;
            if PinState::from(high) == target {
                return Ok(self.clock.now_micros());
            }
            if self.clock.now_micros() >= deadline {
                return Err(Error::Timeout(phase));
            }
        }
    }

    /// Run one full measurement cycle.
    ///
    /// Emits the trigger pulse, waits for the echo pulse's rising and
    /// falling edges (each bounded by its configured timeout), and converts
    /// the pulse width to a distance. The driver holds no state across
    /// calls; a timeout on one call has no effect on the next.
    pub fn measure(&mut self) -> Result<Measurement, Error> {
        self.emit_trigger_pulse()?;
        let start = self.wait_for_level(
            PinState::High,
            self.config.echo_start_timeout_us,
            Phase::EchoStart,
        )?;
        let end = self.wait_for_level(
            PinState::Low,
            self.config.echo_end_timeout_us,
            Phase::EchoEnd,
        )?;
        Measurement::from_round_trip(elapsed(start, end), &self.config)
    }
}
