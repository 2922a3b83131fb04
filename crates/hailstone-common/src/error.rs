use serde_json::Value;
use tracing::warn;

use crate::ApiResponse;

/// Defines [`ErrorCode`] together with its numeric code and default message.
macro_rules! error_codes {
    ($($(#[$meta:meta])* $name:ident = ($code:literal, $message:literal),)*) => {
        /// The service-wide error-code table.
        ///
        /// Codes below 1000 mirror HTTP status codes; the 1000-9999 bands
        /// group business failures by domain (user, auth, KYC, asset,
        /// trading, risk, system).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($(#[$meta])* $name,)*
        }

        impl ErrorCode {
            /// The numeric code carried in response envelopes.
            pub const fn code(&self) -> u32 {
                match self {
                    $(Self::$name => $code,)*
                }
            }

            /// The default human-readable message.
            pub const fn message(&self) -> &'static str {
                match self {
                    $(Self::$name => $message,)*
                }
            }

            /// Looks an error code up by its numeric value.
            pub fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    };
}

error_codes! {
    // Common (HTTP mirror + 1000-1999)
    Success = (200, "Success"),
    BadRequest = (400, "Bad Request"),
    Unauthorized = (401, "Unauthorized"),
    Forbidden = (403, "Forbidden"),
    NotFound = (404, "Not Found"),
    MethodNotAllowed = (405, "Method Not Allowed"),
    RequestTimeout = (408, "Request Timeout"),
    TooManyRequests = (429, "Too Many Requests"),
    InternalServerError = (500, "Internal Server Error"),

    ParamInvalid = (1001, "Invalid Parameter"),
    ParamMissing = (1002, "Missing Required Parameter"),
    ParamTypeError = (1003, "Parameter Type Error"),
    ValidationError = (1004, "Validation Error"),

    // User (2000-2999)
    UserNotFound = (2001, "User Not Found"),
    UserAlreadyExists = (2002, "User Already Exists"),
    UserDisabled = (2003, "User Account Disabled"),
    UserLocked = (2004, "User Account Locked"),
    PasswordError = (2005, "Incorrect Password"),
    PasswordTooWeak = (2006, "Password Too Weak"),
    EmailAlreadyExists = (2007, "Email Already Exists"),
    PhoneAlreadyExists = (2008, "Phone Already Exists"),

    // Auth (3000-3999)
    TokenInvalid = (3001, "Invalid Token"),
    TokenExpired = (3002, "Token Expired"),
    TokenMissing = (3003, "Missing Token"),
    RefreshTokenInvalid = (3004, "Invalid Refresh Token"),
    MfaRequired = (3005, "MFA Required"),
    MfaCodeInvalid = (3006, "Invalid MFA Code"),
    SessionExpired = (3007, "Session Expired"),

    // KYC (4000-4999)
    KycNotVerified = (4001, "KYC Not Verified"),
    KycLevelInsufficient = (4002, "KYC Level Insufficient"),
    KycAlreadySubmitted = (4003, "KYC Already Submitted"),
    KycUnderReview = (4004, "KYC Under Review"),
    KycRejected = (4005, "KYC Rejected"),
    DocumentInvalid = (4006, "Invalid Document"),

    // Asset (5000-5999)
    AccountNotFound = (5001, "Account Not Found"),
    InsufficientBalance = (5002, "Insufficient Balance"),
    WalletNotFound = (5003, "Wallet Not Found"),
    WalletLocked = (5004, "Wallet Locked"),
    DepositFailed = (5005, "Deposit Failed"),
    WithdrawFailed = (5006, "Withdraw Failed"),
    WithdrawLimitExceeded = (5007, "Withdraw Limit Exceeded"),
    InvalidAddress = (5008, "Invalid Wallet Address"),

    // Trading (6000-6999)
    OrderNotFound = (6001, "Order Not Found"),
    OrderAlreadyCancelled = (6002, "Order Already Cancelled"),
    OrderAlreadyFilled = (6003, "Order Already Filled"),
    InvalidOrderPrice = (6004, "Invalid Order Price"),
    InvalidOrderQuantity = (6005, "Invalid Order Quantity"),
    TradingPairNotFound = (6006, "Trading Pair Not Found"),
    TradingSuspended = (6007, "Trading Suspended"),
    PriceLimitExceeded = (6008, "Price Limit Exceeded"),

    // Risk (7000-7999)
    RiskAlert = (7001, "Risk Alert Triggered"),
    SuspiciousActivity = (7002, "Suspicious Activity Detected"),
    TransactionBlocked = (7003, "Transaction Blocked by Risk Control"),
    AmlCheckFailed = (7004, "AML Check Failed"),
    DailyLimitExceeded = (7005, "Daily Limit Exceeded"),
    FraudDetected = (7006, "Fraud Detected"),

    // System (9000-9999)
    ServiceUnavailable = (9001, "Service Unavailable"),
    DatabaseError = (9002, "Database Error"),
    CacheError = (9003, "Cache Error"),
    MessageQueueError = (9004, "Message Queue Error"),
    ThirdPartyApiError = (9005, "Third Party API Error"),
}

impl ErrorCode {
    /// The HTTP status an endpoint should answer with for this code.
    ///
    /// Codes that mirror HTTP statuses map to themselves and parameter
    /// failures map to 400. Business failures are answered with 200 and the
    /// error reported inside the envelope, which is the contract the
    /// existing clients rely on.
    pub const fn http_status(&self) -> u16 {
        match self.code() {
            code @ 200..=599 => code as u16,
            1001..=1004 => 400,
            _ => 200,
        }
    }
}

/// A domain failure carrying an [`ErrorCode`], an optional custom message,
/// and optional structured context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct BusinessError {
    code: u32,
    message: String,
    data: Option<Value>,
}

impl BusinessError {
    /// A failure with the code's default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_owned(),
            data: None,
        }
    }

    /// A failure with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// A failure carrying structured context for the client.
    pub fn with_data(code: ErrorCode, data: Value) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_owned(),
            data: Some(data),
        }
    }

    /// A failure with a free-form numeric code, for codes that are not part
    /// of the shared table.
    pub fn from_parts(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Converts this failure into the response envelope, logging it the way
    /// the global handler logs handled business failures.
    pub fn to_response(&self) -> ApiResponse<Value> {
        warn!(code = self.code, message = %self.message, "business error");
        match &self.data {
            Some(data) => {
                ApiResponse::error_with_data(self.code, self.message.as_str(), data.clone())
            }
            None => ApiResponse::error_with_code(self.code, self.message.as_str()),
        }
    }
}

impl From<ErrorCode> for BusinessError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}
