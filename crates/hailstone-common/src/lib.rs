//! Shared service-layer types used alongside [`hailstone`] IDs.
//!
//! This crate carries the plain data-transfer and formatting glue that the
//! services embedding Snowflake IDs share: a uniform response envelope,
//! paginated-result shapes, domain status/type codes, the numeric error-code
//! table with its HTTP mapping, and date/JSON helpers. None of it is required
//! by the ID generator itself; the dependency points strictly this way.

mod constants;
mod datetime;
mod enums;
mod error;
mod json;
mod page;
mod response;

/// The identifier type every entity DTO carries. Re-exported so services
/// depending on this crate name one crate for both the envelope types and
/// the ID inside them.
pub use hailstone::SnowflakeId;

pub use crate::constants::*;
pub use crate::datetime::*;
pub use crate::enums::*;
pub use crate::error::*;
pub use crate::json::*;
pub use crate::page::*;
pub use crate::response::*;
