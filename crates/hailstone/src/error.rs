/// A result type for generator operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `hailstone` can emit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The node ID supplied at construction does not fit the 10-bit field.
    ///
    /// Non-retryable: the caller must supply a node ID in `0..=1023`.
    #[error("node id {node_id} out of range 0..={max}", max = crate::SnowflakeId::max_node_id())]
    NodeIdOutOfRange {
        /// The rejected node ID.
        node_id: u64,
    },

    /// The clock reported a time earlier than the last issued timestamp.
    ///
    /// No ID is returned: silently reusing a stale timestamp could issue a
    /// duplicate or out-of-order ID. Callers may retry once the clock has
    /// caught back up, or escalate as an operational alert.
    #[error("clock moved backwards, refusing to generate an id for {backwards_ms} ms")]
    ClockMovedBackwards {
        /// How far behind the last issued timestamp the clock reading was.
        backwards_ms: u64,
    },
}
