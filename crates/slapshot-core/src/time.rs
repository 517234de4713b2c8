//! Fixed-timestep clock for the frame loop.
//!
//! Feeding raw wall-clock deltas straight into the physics update ties
//! simulation stability to the host frame rate. Here the frame delta lands
//! in an [`Accumulator`] that dispenses fixed-size steps,
//! caps the number of steps per frame, and discards (and counts) the backlog
//! it refuses to simulate.

use std::fmt;
use std::ops::Sub;
use std::time::Duration;

use bevy::prelude::Resource;

// ---------------------------------------------------------------------------
// SimTime
// ---------------------------------------------------------------------------

/// Integer-nanosecond simulation clock.
///
/// Tracks elapsed simulated time as a monotonically increasing `u64`
/// nanosecond count, immune to floating-point accumulation drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime {
    nanos: u64,
}

impl SimTime {
    /// A `SimTime` at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { nanos: 0 }
    }

    /// A `SimTime` from a raw nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// A `SimTime` from seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(secs: f64) -> Self {
        Self {
            nanos: (secs * 1_000_000_000.0) as u64,
        }
    }

    /// A `SimTime` from a [`Duration`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_duration(duration: Duration) -> Self {
        Self {
            nanos: duration.as_nanos() as u64,
        }
    }

    /// Raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Elapsed milliseconds (truncated).
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Elapsed whole seconds (truncated).
    #[must_use]
    pub const fn secs(&self) -> u64 {
        self.nanos / 1_000_000_000
    }

    /// Elapsed seconds as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Elapsed seconds as `f32`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f32(&self) -> f32 {
        self.nanos as f32 / 1_000_000_000.0
    }

    /// Convert to a standard [`Duration`].
    #[must_use]
    pub const fn to_duration(&self) -> Duration {
        Duration::from_nanos(self.nanos)
    }

    /// Advance the clock by `delta_nanos` nanoseconds.
    pub const fn advance(&mut self, delta_nanos: u64) {
        self.nanos = self.nanos.saturating_add(delta_nanos);
    }

    /// Advance the clock by a [`Duration`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn advance_duration(&mut self, duration: Duration) {
        self.advance(duration.as_nanos() as u64);
    }

    /// Reset the clock to zero.
    pub const fn reset(&mut self) {
        self.nanos = 0;
    }
}

impl Sub for SimTime {
    type Output = Duration;

    /// Difference between two clocks as a [`Duration`]. Saturates at zero if
    /// `rhs` is ahead.
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_nanos(self.nanos.saturating_sub(rhs.nanos))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.nanos / 1_000_000_000;
        let remaining_nanos = self.nanos % 1_000_000_000;
        let millis = remaining_nanos / 1_000_000;
        let micros = (remaining_nanos % 1_000_000) / 1_000;
        write!(f, "{total_secs}.{millis:03}{micros:03}s")
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Fixed-timestep accumulator implementing the "fix your timestep" pattern.
///
/// Accumulates real-world delta time and dispenses fixed-size simulation
/// steps, at most [`Accumulator::DEFAULT_MAX_STEPS`] per frame. Whatever
/// whole steps remain unconsumed at frame end can be discarded through
/// [`discard_backlog`](Self::discard_backlog) so a stall never turns into a
/// spiral of catch-up stepping.
#[derive(Debug, Clone)]
pub struct Accumulator {
    accumulated: u64,
    timestep_nanos: u64,
    timestep_secs: f64,
    max_steps: u32,
    steps_this_frame: u32,
}

impl Accumulator {
    /// Step cap applied per frame unless overridden.
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    /// Create a new accumulator with the given fixed timestep in seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(timestep_secs: f64) -> Self {
        let timestep_nanos = (timestep_secs * 1_000_000_000.0) as u64;
        Self {
            accumulated: 0,
            timestep_nanos,
            timestep_secs,
            max_steps: Self::DEFAULT_MAX_STEPS,
            steps_this_frame: 0,
        }
    }

    /// Set the maximum number of steps allowed per frame.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Feed a real-world delta into the accumulator and reset the per-frame
    /// step counter.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn accumulate(&mut self, delta: Duration) {
        self.accumulated = self.accumulated.saturating_add(delta.as_nanos() as u64);
        self.steps_this_frame = 0;
    }

    /// Returns `true` if at least one timestep worth of time is accumulated
    /// and the per-frame step cap has not been reached.
    ///
    /// Each call that returns `true` consumes one timestep from the
    /// accumulator and increments the step counter.
    pub const fn should_step(&mut self) -> bool {
        if self.steps_this_frame >= self.max_steps {
            return false;
        }
        if self.accumulated >= self.timestep_nanos {
            self.accumulated -= self.timestep_nanos;
            self.steps_this_frame += 1;
            return true;
        }
        false
    }

    /// Drop every whole step still pending and return the discarded time.
    ///
    /// Called at frame end after the step cap has cut the drain loop short.
    /// The sub-step remainder is kept so slow-but-steady frames still make
    /// progress toward their next step.
    pub const fn discard_backlog(&mut self) -> Duration {
        if self.timestep_nanos == 0 {
            return Duration::ZERO;
        }
        let whole_steps = self.accumulated / self.timestep_nanos;
        let dropped = whole_steps * self.timestep_nanos;
        self.accumulated -= dropped;
        Duration::from_nanos(dropped)
    }

    /// Interpolation alpha in `[0, 1)`: progress into the next timestep.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn alpha(&self) -> f32 {
        if self.timestep_nanos == 0 {
            return 0.0;
        }
        self.accumulated as f32 / self.timestep_nanos as f32
    }

    /// The fixed timestep in seconds.
    #[must_use]
    pub const fn timestep(&self) -> f64 {
        self.timestep_secs
    }

    /// The fixed timestep in nanoseconds.
    #[must_use]
    pub const fn timestep_nanos(&self) -> u64 {
        self.timestep_nanos
    }

    /// Steps dispensed since the last `accumulate` call.
    #[must_use]
    pub const fn steps_this_frame(&self) -> u32 {
        self.steps_this_frame
    }

    /// Reset accumulated time and step counter to zero.
    pub const fn reset(&mut self) {
        self.accumulated = 0;
        self.steps_this_frame = 0;
    }
}

// ---------------------------------------------------------------------------
// StepClock
// ---------------------------------------------------------------------------

/// Per-session frame clock: simulated time plus the fixed-step accumulator.
///
/// Owns all frame-timing state, so the driver never keeps an ambient "last
/// timestamp" of its own. Typical frame:
/// ```ignore
/// clock.tick(frame_delta);
/// while clock.should_step() {
///     world.step();
///     clock.advance();
/// }
/// let dropped = clock.finish_frame();
/// ```
#[derive(Debug, Clone, Resource)]
pub struct StepClock {
    time: SimTime,
    accumulator: Accumulator,
    total_steps: u64,
    dropped_nanos: u64,
}

impl StepClock {
    /// Default fixed timestep in seconds.
    pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0;

    /// Create a new clock with the given fixed timestep in seconds.
    pub fn new(timestep_secs: f64) -> Self {
        Self {
            time: SimTime::new(),
            accumulator: Accumulator::new(timestep_secs),
            total_steps: 0,
            dropped_nanos: 0,
        }
    }

    /// Set the maximum number of simulation steps per frame.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.accumulator = self.accumulator.with_max_steps(max_steps);
        self
    }

    /// Feed a real-world frame delta into the accumulator.
    pub const fn tick(&mut self, delta: Duration) {
        self.accumulator.accumulate(delta);
    }

    /// Returns `true` if a simulation step should be taken.
    ///
    /// Call in a loop after [`tick`](Self::tick). Each `true` result means
    /// the caller should run one fixed-step update, then call
    /// [`advance`](Self::advance).
    pub const fn should_step(&mut self) -> bool {
        self.accumulator.should_step()
    }

    /// Advance the simulation time by one timestep and count the step.
    pub const fn advance(&mut self) {
        self.time.advance(self.accumulator.timestep_nanos());
        self.total_steps += 1;
    }

    /// Close out the frame: discard and count any backlog the step cap left
    /// behind. Returns the time dropped this frame.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn finish_frame(&mut self) -> Duration {
        let dropped = self.accumulator.discard_backlog();
        self.dropped_nanos = self.dropped_nanos.saturating_add(dropped.as_nanos() as u64);
        dropped
    }

    /// Current simulation time.
    #[must_use]
    pub const fn time(&self) -> SimTime {
        self.time
    }

    /// The fixed timestep in seconds.
    #[must_use]
    pub const fn timestep(&self) -> f64 {
        self.accumulator.timestep()
    }

    /// Total fixed steps taken since construction or the last reset.
    #[must_use]
    pub const fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Total real time discarded by [`finish_frame`](Self::finish_frame).
    #[must_use]
    pub const fn dropped(&self) -> Duration {
        Duration::from_nanos(self.dropped_nanos)
    }

    /// Interpolation alpha for visual smoothing.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.accumulator.alpha()
    }

    /// Reset time, counters, and the accumulator.
    pub const fn reset(&mut self) {
        self.time.reset();
        self.accumulator.reset();
        self.total_steps = 0;
        self.dropped_nanos = 0;
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMESTEP)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- SimTime: construction ----

    #[test]
    fn simtime_new() {
        let t = SimTime::new();
        assert_eq!(t.nanos(), 0);
    }

    #[test]
    fn simtime_from_nanos() {
        let t = SimTime::from_nanos(1_500_000_000);
        assert_eq!(t.nanos(), 1_500_000_000);
    }

    #[test]
    fn simtime_from_secs() {
        let t = SimTime::from_secs(2.5);
        assert_eq!(t.nanos(), 2_500_000_000);
    }

    #[test]
    fn simtime_from_duration() {
        let t = SimTime::from_duration(Duration::from_millis(1500));
        assert_eq!(t.nanos(), 1_500_000_000);
    }

    // ---- SimTime: accessors ----

    #[test]
    fn simtime_unit_accessors() {
        let t = SimTime::from_nanos(2_123_456_789);
        assert_eq!(t.millis(), 2_123);
        assert_eq!(t.secs(), 2);
        assert!((t.secs_f64() - 2.123_456_789).abs() < 1e-9);
        assert!((t.secs_f32() - 2.123_456_7).abs() < 1e-3);
        assert_eq!(t.to_duration(), Duration::from_nanos(2_123_456_789));
    }

    // ---- SimTime: advance and reset ----

    #[test]
    fn simtime_advance() {
        let mut t = SimTime::new();
        t.advance(1_000_000);
        assert_eq!(t.nanos(), 1_000_000);
        t.advance_duration(Duration::from_millis(2));
        assert_eq!(t.nanos(), 3_000_000);
    }

    #[test]
    fn simtime_advance_saturates() {
        let mut t = SimTime::from_nanos(u64::MAX - 1);
        t.advance(100);
        assert_eq!(t.nanos(), u64::MAX);
    }

    #[test]
    fn simtime_reset() {
        let mut t = SimTime::from_secs(5.0);
        t.reset();
        assert_eq!(t.nanos(), 0);
    }

    #[test]
    fn simtime_sub_yields_duration() {
        let a = SimTime::from_secs(3.0);
        let b = SimTime::from_secs(1.0);
        assert_eq!(a - b, Duration::from_secs(2));
        // Saturates rather than underflowing.
        assert_eq!(b - a, Duration::ZERO);
    }

    #[test]
    fn simtime_display() {
        assert_eq!(SimTime::from_nanos(1_234_567_890).to_string(), "1.234567s");
        assert_eq!(SimTime::new().to_string(), "0.000000s");
    }

    // ---- Accumulator ----

    #[test]
    fn accumulator_starts_empty() {
        let mut acc = Accumulator::new(0.01);
        assert!(!acc.should_step());
        assert_eq!(acc.steps_this_frame(), 0);
    }

    #[test]
    fn accumulator_dispenses_whole_steps() {
        let mut acc = Accumulator::new(0.01);
        acc.accumulate(Duration::from_millis(25));
        assert!(acc.should_step());
        assert!(acc.should_step());
        assert!(!acc.should_step());
        assert_eq!(acc.steps_this_frame(), 2);
        // 5 ms remainder stays for next frame.
        assert!((acc.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn accumulator_caps_steps_per_frame() {
        let mut acc = Accumulator::new(0.01).with_max_steps(3);
        acc.accumulate(Duration::from_millis(100));
        let mut steps = 0;
        while acc.should_step() {
            steps += 1;
        }
        assert_eq!(steps, 3);
    }

    #[test]
    fn accumulator_counter_resets_each_accumulate() {
        let mut acc = Accumulator::new(0.01).with_max_steps(1);
        acc.accumulate(Duration::from_millis(20));
        assert!(acc.should_step());
        assert!(!acc.should_step());
        acc.accumulate(Duration::ZERO);
        // Cap applies per frame; the leftover step dispenses now.
        assert!(acc.should_step());
    }

    #[test]
    fn accumulator_default_max_steps() {
        let mut acc = Accumulator::new(0.01);
        acc.accumulate(Duration::from_secs(1));
        let mut steps = 0;
        while acc.should_step() {
            steps += 1;
        }
        assert_eq!(steps, Accumulator::DEFAULT_MAX_STEPS);
    }

    #[test]
    fn accumulator_discard_backlog_drops_whole_steps() {
        let mut acc = Accumulator::new(0.01).with_max_steps(2);
        acc.accumulate(Duration::from_millis(55));
        while acc.should_step() {}
        // 35 ms pending: three whole steps dropped, 5 ms remainder kept.
        let dropped = acc.discard_backlog();
        assert_eq!(dropped, Duration::from_millis(30));
        assert!((acc.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn accumulator_discard_backlog_noop_below_one_step() {
        let mut acc = Accumulator::new(0.01);
        acc.accumulate(Duration::from_millis(4));
        assert_eq!(acc.discard_backlog(), Duration::ZERO);
        assert!((acc.alpha() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn accumulator_reset() {
        let mut acc = Accumulator::new(0.01);
        acc.accumulate(Duration::from_millis(15));
        assert!(acc.should_step());
        acc.reset();
        assert!(!acc.should_step());
        assert!(acc.alpha() < 1e-6);
    }

    #[test]
    fn accumulator_timestep_accessors() {
        let acc = Accumulator::new(1.0 / 120.0);
        assert!((acc.timestep() - 1.0 / 120.0).abs() < f64::EPSILON);
        assert_eq!(acc.timestep_nanos(), 8_333_333);
    }

    // ---- StepClock ----

    #[test]
    fn clock_defaults() {
        let clock = StepClock::default();
        assert!((clock.timestep() - StepClock::DEFAULT_TIMESTEP).abs() < f64::EPSILON);
        assert_eq!(clock.time(), SimTime::new());
        assert_eq!(clock.total_steps(), 0);
        assert_eq!(clock.dropped(), Duration::ZERO);
    }

    #[test]
    fn clock_drain_advances_time_and_steps() {
        let mut clock = StepClock::new(0.01);
        clock.tick(Duration::from_millis(35));
        let mut steps = 0;
        while clock.should_step() {
            clock.advance();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(clock.total_steps(), 3);
        assert_eq!(clock.time(), SimTime::from_nanos(30_000_000));
        assert_eq!(clock.finish_frame(), Duration::ZERO);
    }

    #[test]
    fn clock_finish_frame_counts_dropped_time() {
        let mut clock = StepClock::new(0.01).with_max_steps(2);
        clock.tick(Duration::from_millis(100));
        while clock.should_step() {
            clock.advance();
        }
        let dropped = clock.finish_frame();
        assert_eq!(dropped, Duration::from_millis(80));
        assert_eq!(clock.dropped(), Duration::from_millis(80));
        assert_eq!(clock.total_steps(), 2);

        // Dropped time accumulates across frames.
        clock.tick(Duration::from_millis(100));
        while clock.should_step() {
            clock.advance();
        }
        clock.finish_frame();
        assert_eq!(clock.dropped(), Duration::from_millis(160));
    }

    #[test]
    fn clock_without_tick_never_steps() {
        let mut clock = StepClock::new(0.01);
        assert!(!clock.should_step());
        assert_eq!(clock.finish_frame(), Duration::ZERO);
        assert_eq!(clock.total_steps(), 0);
    }

    #[test]
    fn clock_reset_clears_everything() {
        let mut clock = StepClock::new(0.01).with_max_steps(1);
        clock.tick(Duration::from_millis(30));
        while clock.should_step() {
            clock.advance();
        }
        clock.finish_frame();
        assert!(clock.total_steps() > 0);
        assert!(clock.dropped() > Duration::ZERO);
        clock.reset();
        assert_eq!(clock.time(), SimTime::new());
        assert_eq!(clock.total_steps(), 0);
        assert_eq!(clock.dropped(), Duration::ZERO);
        assert!(!clock.should_step());
    }
}
