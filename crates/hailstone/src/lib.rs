//! Snowflake-style 64-bit identifier generation.
//!
//! A [`SnowflakeGenerator`] packs a millisecond timestamp, a caller-assigned
//! node id, and a per-millisecond sequence counter into one `u64`. Output is
//! strictly monotonic per instance and collision-free across instances with
//! distinct node ids, with no coordination round-trip at generation time.
//!
//! ```
//! use hailstone::SnowflakeGenerator;
//!
//! let generator = SnowflakeGenerator::new(0).expect("node id in range");
//! let id = generator.next_id().expect("clock did not move backwards");
//! assert_eq!(id.node_id(), 0);
//! ```

mod clock;
mod error;
mod generator;
mod id;

pub use crate::clock::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
