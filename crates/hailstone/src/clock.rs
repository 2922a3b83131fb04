use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Deployment epoch: Monday, January 1, 2024 00:00:00 UTC.
///
/// The 41-bit timestamp field counts milliseconds from this instant, which
/// gives roughly 69 years of headroom. The epoch is part of the external
/// contract: changing it after IDs have been persisted breaks decoding of
/// the old IDs (it does not break uniqueness going forward).
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_704_067_200_000);

/// A source of milliseconds elapsed since a configured epoch.
///
/// This abstraction exists so that tests can substitute a fixed or stepping
/// clock for the system clock.
///
/// # Example
///
/// ```
/// use hailstone::Clock;
///
/// struct FixedTime;
/// impl Clock for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait Clock {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> u64;
}

/// A wall-clock time source offset from a fixed epoch.
///
/// This reads [`SystemTime`] on every call rather than a monotonic timer.
/// That is deliberate: a backwards step of the wall clock (e.g. an NTP
/// correction) must be *observed* so the generator can refuse to issue an ID
/// for it, instead of being papered over by a monotonic counter.
///
/// A host clock that reads *earlier than the configured epoch* is a
/// misconfiguration (the epoch predates any supported deployment). Such
/// readings are clamped to 0 and logged at `warn`, so the IDs minted in that
/// state all carry timestamp 0 and the log points at the broken clock.
#[derive(Clone, Debug)]
pub struct SystemClock {
    epoch: Duration,
}

impl Default for SystemClock {
    /// Constructs a system clock aligned to [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(DEFAULT_EPOCH)
    }
}

impl SystemClock {
    /// Constructs a system clock using a custom epoch as the origin (t = 0),
    /// specified as a duration since the Unix epoch.
    pub fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }

    /// Returns the configured epoch as a duration since the Unix epoch.
    pub fn epoch(&self) -> Duration {
        self.epoch
    }
}

impl Clock for SystemClock {
    fn current_millis(&self) -> u64 {
        let since_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        match since_unix.checked_sub(self.epoch) {
            Some(elapsed) => elapsed.as_millis() as u64,
            None => Self::cold_before_epoch(),
        }
    }
}

impl SystemClock {
    #[cold]
    #[inline(never)]
    fn cold_before_epoch() -> u64 {
        tracing::warn!("system time reads before the configured epoch, reporting 0");
        0
    }
}
