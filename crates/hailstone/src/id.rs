use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

/// A 64-bit Snowflake identifier.
///
/// - 1 bit reserved (always 0, so the value is non-negative as `i64`)
/// - 41 bits timestamp (ms since [`DEFAULT_EPOCH`])
/// - 10 bits node ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21          12 11             0
///              +--------------+----------------+--------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
///              +--------------+----------------+--------------+---------------+
///              |<----------- MSB ---------- 64 bits ---------- LSB ---------->|
/// ```
///
/// Comparing two IDs as unsigned integers orders them first by timestamp,
/// then by node ID, then by sequence, which is what makes the packed value
/// time-sortable.
///
/// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeId {
    id: u64,
}

impl SnowflakeId {
    /// Width of the timestamp field in bits.
    pub const TIMESTAMP_BITS: u32 = 41;

    /// Width of the node ID field in bits.
    pub const NODE_ID_BITS: u32 = 10;

    /// Width of the sequence field in bits.
    pub const SEQUENCE_BITS: u32 = 12;

    /// Bitmask for extracting the 41-bit timestamp field. Occupies bits 22
    /// through 62.
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;

    /// Bitmask for extracting the 10-bit node ID field. Occupies bits 12
    /// through 21.
    pub const NODE_ID_MASK: u64 = (1 << Self::NODE_ID_BITS) - 1;

    /// Bitmask for extracting the 12-bit sequence field. Occupies bits 0
    /// through 11.
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 = Self::NODE_ID_BITS + Self::SEQUENCE_BITS;

    /// Number of bits to shift the node ID to its position (bit 12).
    pub const NODE_ID_SHIFT: u32 = Self::SEQUENCE_BITS;

    /// Packs a timestamp, node ID, and sequence into a single ID.
    ///
    /// `timestamp` is in milliseconds since the deployment epoch, not since
    /// the Unix epoch.
    pub const fn from_parts(timestamp: u64, node_id: u64, sequence: u64) -> Self {
        debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
        debug_assert!(node_id <= Self::NODE_ID_MASK, "node_id overflow");
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
        Self {
            id: ((timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT)
                | ((node_id & Self::NODE_ID_MASK) << Self::NODE_ID_SHIFT)
                | (sequence & Self::SEQUENCE_MASK),
        }
    }

    /// Extracts the timestamp, in milliseconds since the deployment epoch.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the timestamp as milliseconds since the Unix epoch, assuming
    /// the ID was generated against [`DEFAULT_EPOCH`].
    ///
    /// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
    pub const fn unix_millis(&self) -> u64 {
        self.timestamp() + crate::DEFAULT_EPOCH.as_millis() as u64
    }

    /// Extracts the node ID.
    pub const fn node_id(&self) -> u64 {
        (self.id >> Self::NODE_ID_SHIFT) & Self::NODE_ID_MASK
    }

    /// Extracts the sequence number.
    pub const fn sequence(&self) -> u64 {
        self.id & Self::SEQUENCE_MASK
    }

    /// Returns the maximum valid node ID (1023).
    pub const fn max_node_id() -> u64 {
        Self::NODE_ID_MASK
    }

    /// Returns the maximum sequence value per millisecond (4095).
    pub const fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    /// Returns the raw packed integer.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Reinterprets a raw packed integer as an ID.
    pub const fn from_raw(id: u64) -> Self {
        Self { id }
    }

    /// Returns the ID as a zero-padded 20-digit string.
    ///
    /// Useful for transports that cannot carry a full 64-bit integer
    /// losslessly (e.g. JavaScript JSON numbers) while keeping string
    /// ordering consistent with numeric ordering.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("timestamp", &self.timestamp())
            .field("node_id", &self.node_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}

impl FromStr for SnowflakeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self::from_raw)
    }
}

impl From<SnowflakeId> for u64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_fields() {
        let id = SnowflakeId::from_parts(1_000, 2, 1);
        assert_eq!(id.timestamp(), 1_000);
        assert_eq!(id.node_id(), 2);
        assert_eq!(id.sequence(), 1);
    }

    #[test]
    fn round_trips_field_extremes() {
        let id = SnowflakeId::from_parts(
            SnowflakeId::TIMESTAMP_MASK,
            SnowflakeId::max_node_id(),
            SnowflakeId::max_sequence(),
        );
        assert_eq!(id.timestamp(), SnowflakeId::TIMESTAMP_MASK);
        assert_eq!(id.node_id(), 1023);
        assert_eq!(id.sequence(), 4095);
        // All three fields at max still leave the sign bit clear.
        assert!(id.to_raw() <= i64::MAX as u64);
    }

    #[test]
    fn packs_into_expected_bit_positions() {
        let id = SnowflakeId::from_parts(1_000, 5, 3);
        assert_eq!(id.to_raw(), (1_000 << 22) | (5 << 12) | 3);
    }

    #[test]
    fn unix_millis_restores_wall_clock() {
        let id = SnowflakeId::from_parts(86_400_000, 0, 0);
        assert_eq!(
            id.unix_millis(),
            crate::DEFAULT_EPOCH.as_millis() as u64 + 86_400_000
        );
    }

    #[test]
    fn ordering_follows_field_significance() {
        let a = SnowflakeId::from_parts(1, 1023, 4095);
        let b = SnowflakeId::from_parts(2, 0, 0);
        assert!(a < b);

        let c = SnowflakeId::from_parts(2, 0, 1);
        assert!(b < c);
    }

    #[test]
    fn raw_and_string_round_trip() {
        let id = SnowflakeId::from_parts(123_456, 42, 7);
        assert_eq!(SnowflakeId::from_raw(id.to_raw()), id);
        assert_eq!(id.to_string().parse::<SnowflakeId>().unwrap(), id);
        assert_eq!(id.to_padded_string().len(), 20);
        assert_eq!(id.to_padded_string().parse::<SnowflakeId>().unwrap(), id);
    }

    #[test]
    fn serde_uses_native_integer_representation() {
        let id = SnowflakeId::from_parts(99, 8, 17);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, id.to_raw().to_string());
        let back: SnowflakeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
