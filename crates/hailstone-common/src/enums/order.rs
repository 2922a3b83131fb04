use super::coded_enum;

coded_enum! {
    /// Matching state of an order.
    OrderStatus {
        Pending = (1, "Pending"),
        PartialFilled = (2, "Partial Filled"),
        Filled = (3, "Filled"),
        Cancelled = (4, "Cancelled"),
        Rejected = (5, "Rejected"),
        Expired = (6, "Expired"),
    }
}

impl OrderStatus {
    /// Whether the order can no longer change state.
    pub const fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Filled | Self::Cancelled | Self::Rejected | Self::Expired
        )
    }
}

coded_enum! {
    /// Execution style of an order.
    OrderType {
        Market = (1, "Market Order"),
        Limit = (2, "Limit Order"),
        StopLoss = (3, "Stop Loss"),
        TakeProfit = (4, "Take Profit"),
        StopLossLimit = (5, "Stop Loss Limit"),
        TakeProfitLimit = (6, "Take Profit Limit"),
        TrailingStop = (7, "Trailing Stop"),
        Iceberg = (8, "Iceberg Order"),
        Twap = (9, "TWAP Order"),
        Vwap = (10, "VWAP Order"),
        PostOnly = (11, "Post Only"),
    }
}
