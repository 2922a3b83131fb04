use parking_lot::Mutex;
use tracing::{info, warn};

use crate::{Clock, Error, Result, SnowflakeId, SystemClock};

/// Mutable generator state, only ever touched under the lock.
struct State {
    /// Millisecond value used for the most recently issued ID. `None` means
    /// no ID has been issued yet.
    last_millis: Option<u64>,
    /// Sequence counter within `last_millis`.
    sequence: u64,
}

/// A lock-based Snowflake ID generator, safe for concurrent use.
///
/// One instance owns one node ID and issues strictly increasing IDs for it.
/// The whole read-clock / compare / pack step for a single [`next_id`] call
/// runs under an internal [`Mutex`], so concurrent callers observe a fully
/// serialized history of `(last_millis, sequence)` transitions. That
/// serialization is what prevents two callers from packing the same
/// `(timestamp, sequence)` pair.
///
/// A process should hold at most one generator per node ID and hand it to
/// callers explicitly (e.g. behind an `Arc`); two live generators sharing a
/// node ID can issue duplicate IDs.
///
/// Throughput is bounded at 4096 IDs per millisecond per instance. When a
/// millisecond is exhausted the calling thread spins until the clock ticks,
/// a wait bounded by the remainder of the current millisecond; this never
/// surfaces as an error. Shard across several generators with distinct node
/// IDs if more throughput is required.
///
/// [`next_id`]: SnowflakeGenerator::next_id
pub struct SnowflakeGenerator<C = SystemClock>
where
    C: Clock,
{
    node_id: u64,
    state: Mutex<State>,
    clock: C,
}

impl SnowflakeGenerator<SystemClock> {
    /// Creates a generator for `node_id` backed by the system clock and the
    /// default deployment epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` exceeds
    /// [`SnowflakeId::max_node_id`].
    ///
    /// # Example
    /// ```
    /// use hailstone::SnowflakeGenerator;
    ///
    /// let generator = SnowflakeGenerator::new(42)?;
    /// assert_eq!(generator.node_id(), 42);
    /// # Ok::<(), hailstone::Error>(())
    /// ```
    pub fn new(node_id: u64) -> Result<Self> {
        Self::with_clock(node_id, SystemClock::default())
    }
}

impl<C> SnowflakeGenerator<C>
where
    C: Clock,
{
    /// Creates a generator for `node_id` backed by a caller-supplied
    /// [`Clock`].
    ///
    /// This is the constructor tests use to substitute a mock time source;
    /// production code normally goes through [`SnowflakeGenerator::new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` exceeds
    /// [`SnowflakeId::max_node_id`].
    pub fn with_clock(node_id: u64, clock: C) -> Result<Self> {
        if node_id > SnowflakeId::max_node_id() {
            return Err(Error::NodeIdOutOfRange { node_id });
        }
        info!(node_id, "snowflake generator initialized");
        Ok(Self {
            node_id,
            state: Mutex::new(State {
                last_millis: None,
                sequence: 0,
            }),
            clock,
        })
    }

    /// Returns the node ID this generator stamps into every ID.
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    /// Generates the next ID.
    ///
    /// Successive calls return strictly increasing values. Within one
    /// millisecond the sequence field disambiguates; across milliseconds the
    /// timestamp field advances and the sequence resets to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackwards`] if the clock reports a time
    /// earlier than the timestamp of the most recently issued ID. The call
    /// fails fast without mutating generator state, so a later call succeeds
    /// as soon as the clock has caught back up.
    ///
    /// # Example
    /// ```
    /// use hailstone::SnowflakeGenerator;
    ///
    /// let generator = SnowflakeGenerator::new(0)?;
    /// let a = generator.next_id()?;
    /// let b = generator.next_id()?;
    /// assert!(a < b);
    /// # Ok::<(), hailstone::Error>(())
    /// ```
    pub fn next_id(&self) -> Result<SnowflakeId> {
        let mut state = self.state.lock();
        let mut now = self.clock.current_millis();

        match state.last_millis {
            Some(last) if now < last => {
                return Err(Self::cold_clock_behind(now, last));
            }
            Some(last) if now == last => {
                let next = (state.sequence + 1) & SnowflakeId::max_sequence();
                if next == 0 {
                    // 4096 IDs issued this millisecond: spin until the clock
                    // ticks past it, then restart the sequence.
                    now = self.spin_until_after(last);
                }
                state.sequence = next;
            }
            _ => {
                state.sequence = 0;
            }
        }

        state.last_millis = Some(now);
        Ok(SnowflakeId::from_parts(now, self.node_id, state.sequence))
    }

    /// Busy-waits until the clock reports a value strictly greater than
    /// `last`. Bounded by the remainder of the current millisecond.
    fn spin_until_after(&self, last: u64) -> u64 {
        loop {
            let now = self.clock.current_millis();
            if now > last {
                return now;
            }
            core::hint::spin_loop();
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, last: u64) -> Error {
        let backwards_ms = last - now;
        warn!(backwards_ms, "clock moved backwards, refusing to generate id");
        Error::ClockMovedBackwards { backwards_ms }
    }
}

impl<C> core::fmt::Debug for SnowflakeGenerator<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("SnowflakeGenerator")
            .field("node_id", &self.node_id)
            .finish_non_exhaustive()
    }
}
