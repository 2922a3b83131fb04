use super::coded_enum;

coded_enum! {
    /// Lifecycle state of a user account.
    UserStatus {
        Active = (1, "Active"),
        Disabled = (2, "Disabled"),
        Locked = (3, "Locked"),
        Pending = (4, "Pending"),
        Deleted = (9, "Deleted"),
    }
}

impl UserStatus {
    /// Whether the account may authenticate and transact.
    pub const fn is_usable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(UserStatus::Active.code(), 1);
        assert_eq!(UserStatus::Deleted.code(), 9);
        assert_eq!(UserStatus::from_code(3).unwrap(), UserStatus::Locked);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = UserStatus::from_code(5).unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::ParamInvalid.code());
        assert!(err.message().contains("UserStatus"));
    }

    #[test]
    fn only_active_accounts_are_usable() {
        assert!(UserStatus::Active.is_usable());
        assert!(!UserStatus::Locked.is_usable());
        assert!(!UserStatus::Pending.is_usable());
    }

    #[test]
    fn serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
    }
}
