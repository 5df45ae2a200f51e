use std::time::{Duration, Instant};

use crate::error::OffsetError;

/// Where the tracker reads "now" from.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Largest accepted offset: a hundred years.
pub const MAX_OFFSET: Duration = Duration::from_secs(100 * 365 * 86_400);

fn check_offset(secs: f64) -> Result<(), OffsetError> {
    if secs.is_nan() || secs.is_infinite() {
        return Err(OffsetError::NotFinite);
    }
    if secs < 0.0 {
        return Err(OffsetError::Negative(secs));
    }
    Ok(())
}

fn bounded_offset(secs: f64) -> Result<Duration, OffsetError> {
    // An overflowed product or sum arrives here as +inf.
    if secs > MAX_OFFSET.as_secs_f64() {
        return Err(OffsetError::TooLarge(secs));
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Validates a single offset value given in seconds.
pub fn offset_from_secs(secs: f64) -> Result<Duration, OffsetError> {
    check_offset(secs)?;
    bounded_offset(secs)
}

/// Sums an hours offset and a seconds offset, validating both.
pub fn offset_from_parts(hours: f64, seconds: f64) -> Result<Duration, OffsetError> {
    check_offset(hours)?;
    check_offset(seconds)?;
    bounded_offset(hours * 3600.0 + seconds)
}

/// Tracks time elapsed since a start instant, which may lie before the
/// tracker was created when an offset is given.
///
/// The start is kept as an anchor instant plus an offset so that offsets
/// larger than the clock's own history never underflow.
pub struct Tracker<C: TimeSource = SystemClock> {
    clock: C,
    anchor: Instant,
    offset: Duration,
}

impl Tracker<SystemClock> {
    pub fn from_offset(offset: Duration) -> Self {
        Self::with_offset(SystemClock, offset)
    }
}

impl<C: TimeSource> Tracker<C> {
    pub fn with_clock(clock: C, offset_secs: f64) -> Result<Self, OffsetError> {
        let offset = offset_from_secs(offset_secs)?;
        Ok(Self::with_offset(clock, offset))
    }

    pub fn with_offset(clock: C, offset: Duration) -> Self {
        let anchor = clock.now();
        Self {
            clock,
            anchor,
            offset,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn elapsed_duration(&self) -> Duration {
        self.now()
            .saturating_duration_since(self.anchor)
            .saturating_add(self.offset)
    }

    /// Whole seconds since the start instant, rounded down.
    pub fn elapsed(&self) -> u64 {
        self.elapsed_duration().as_secs()
    }

    /// Rebases the start instant to now, dropping any offset.
    pub fn reset(&mut self) {
        self.anchor = self.clock.now();
        self.offset = Duration::ZERO;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    #[test]
    fn starts_at_offset() {
        let tracker = Tracker::with_clock(ManualClock::new(), 4500.0).unwrap();
        assert_eq!(tracker.elapsed(), 4500);
    }

    #[test]
    fn starts_at_offset_on_system_clock() {
        let tracker = Tracker::with_clock(SystemClock, 4500.0).unwrap();
        let elapsed = tracker.elapsed_duration();
        assert!(elapsed >= Duration::from_secs(4500));
        assert!(elapsed < Duration::from_secs(4501));
    }

    #[test]
    fn rejects_bad_offsets() {
        assert_eq!(
            Tracker::with_clock(SystemClock, -1.0).err(),
            Some(OffsetError::Negative(-1.0))
        );
        assert_eq!(
            Tracker::with_clock(SystemClock, f64::NAN).err(),
            Some(OffsetError::NotFinite)
        );
        assert_eq!(
            Tracker::with_clock(SystemClock, f64::INFINITY).err(),
            Some(OffsetError::NotFinite)
        );
        assert!(matches!(
            Tracker::with_clock(SystemClock, 1e300).err(),
            Some(OffsetError::TooLarge(_))
        ));
    }

    #[test]
    fn fractional_offset_floors() {
        let clock = ManualClock::new();
        let tracker = Tracker::with_clock(clock.clone(), 9.75).unwrap();
        assert_eq!(tracker.elapsed(), 9);
        clock.advance(Duration::from_millis(250));
        assert_eq!(tracker.elapsed(), 10);
    }

    #[test]
    fn elapsed_never_decreases() {
        let clock = ManualClock::new();
        let tracker = Tracker::with_clock(clock.clone(), 0.0).unwrap();
        let mut last = tracker.elapsed();
        for step in [0, 1, 250, 999, 1000, 60_000] {
            clock.advance(Duration::from_millis(step));
            let now = tracker.elapsed();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 62);
    }

    #[test]
    fn reset_drops_offset_and_history() {
        let clock = ManualClock::new();
        let mut tracker = Tracker::with_clock(clock.clone(), 86_400.0).unwrap();
        clock.advance(Duration::from_secs(42));
        assert_eq!(tracker.elapsed(), 86_442);

        tracker.reset();
        assert_eq!(tracker.elapsed(), 0);
        tracker.reset();
        assert_eq!(tracker.elapsed(), 0);

        clock.advance(Duration::from_secs(3));
        assert_eq!(tracker.elapsed(), 3);
    }

    #[test]
    fn offsets_compose_by_sum() {
        assert_eq!(
            offset_from_parts(1.5, 30.0).unwrap(),
            Duration::from_secs(5430)
        );
        assert_eq!(offset_from_parts(0.0, 0.0).unwrap(), Duration::ZERO);
        assert_eq!(
            offset_from_parts(-0.5, 10.0),
            Err(OffsetError::Negative(-0.5))
        );
        assert_eq!(
            offset_from_parts(2.0, -10.0),
            Err(OffsetError::Negative(-10.0))
        );
    }

    #[test]
    fn huge_hours_are_too_large() {
        assert_eq!(
            offset_from_parts(1e306, 0.0),
            Err(OffsetError::TooLarge(f64::INFINITY))
        );
        assert!(matches!(
            offset_from_parts(1e6, 0.0),
            Err(OffsetError::TooLarge(_))
        ));
    }

    #[test]
    fn sum_over_cap_is_too_large() {
        let most = MAX_OFFSET.as_secs_f64() * 0.6;
        assert!(offset_from_secs(most).is_ok());
        assert!(matches!(
            offset_from_parts(most / 3600.0, most),
            Err(OffsetError::TooLarge(_))
        ));
        assert!(matches!(
            offset_from_secs(18_446_744_073_709_549_568.0),
            Err(OffsetError::TooLarge(_))
        ));
    }

    #[test]
    fn running_past_the_cap_does_not_overflow() {
        let clock = ManualClock::new();
        let tracker = Tracker::with_offset(clock.clone(), MAX_OFFSET);
        clock.advance(Duration::from_secs(3600));
        assert_eq!(tracker.elapsed(), MAX_OFFSET.as_secs() + 3600);

        let tracker = Tracker::with_offset(clock.clone(), Duration::MAX);
        clock.advance(Duration::from_secs(3600));
        assert_eq!(tracker.elapsed(), u64::MAX);
    }
}
