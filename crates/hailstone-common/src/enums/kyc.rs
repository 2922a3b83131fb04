use serde::{Deserialize, Serialize};

use crate::{BusinessError, ErrorCode};

/// KYC verification tier. Higher tiers unlock larger daily withdraw limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KycLevel {
    /// Only email/phone registered.
    L0,
    /// Name + ID card.
    L1,
    /// Face recognition + address proof.
    L2,
    /// Video verification + asset proof.
    L3,
}

impl KycLevel {
    /// The numeric tier stored in the database.
    pub const fn level(&self) -> u32 {
        match self {
            Self::L0 => 0,
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
        }
    }

    /// A short tier name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::L0 => "Unverified",
            Self::L1 => "Basic",
            Self::L2 => "Advanced",
            Self::L3 => "Professional",
        }
    }

    /// Daily withdraw limit in whole units of the quote currency. `None`
    /// means unlimited.
    pub const fn daily_withdraw_limit(&self) -> Option<u64> {
        match self {
            Self::L0 => Some(0),
            Self::L1 => Some(10_000),
            Self::L2 => Some(100_000),
            Self::L3 => None,
        }
    }

    /// What the tier requires of the user.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::L0 => "Only email/phone registered",
            Self::L1 => "Name + ID card",
            Self::L2 => "Face recognition + Address proof",
            Self::L3 => "Video verification + Asset proof",
        }
    }

    /// Resolves a numeric tier back to its level.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamInvalid`] business error for unknown tiers.
    ///
    /// [`ParamInvalid`]: crate::ErrorCode::ParamInvalid
    pub fn from_level(level: u32) -> Result<Self, BusinessError> {
        match level {
            0 => Ok(Self::L0),
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            _ => Err(BusinessError::with_message(
                ErrorCode::ParamInvalid,
                format!("invalid KYC level: {level}"),
            )),
        }
    }
}
