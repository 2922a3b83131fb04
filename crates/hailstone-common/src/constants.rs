//! Constants shared across the services.

// HTTP headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_TOKEN: &str = "X-Access-Token";
pub const HEADER_REFRESH_TOKEN: &str = "X-Refresh-Token";
pub const HEADER_USER_ID: &str = "X-User-Id";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const BEARER_PREFIX: &str = "Bearer ";

// Cache key prefixes
pub const CACHE_PREFIX: &str = "xchg:";
pub const CACHE_USER_PREFIX: &str = "xchg:user:";
pub const CACHE_TOKEN_PREFIX: &str = "xchg:token:";
pub const CACHE_SESSION_PREFIX: &str = "xchg:session:";
pub const CACHE_KYC_PREFIX: &str = "xchg:kyc:";
pub const CACHE_WALLET_PREFIX: &str = "xchg:wallet:";
pub const CACHE_ACCOUNT_PREFIX: &str = "xchg:account:";
pub const CACHE_ORDER_PREFIX: &str = "xchg:order:";
pub const CACHE_MARKET_PREFIX: &str = "xchg:market:";

// Distributed lock key prefixes
pub const LOCK_PREFIX: &str = "lock:";
pub const LOCK_USER_PREFIX: &str = "lock:user:";
pub const LOCK_WALLET_PREFIX: &str = "lock:wallet:";
pub const LOCK_ORDER_PREFIX: &str = "lock:order:";
pub const LOCK_WITHDRAW_PREFIX: &str = "lock:withdraw:";

// Cache expiry, in seconds
pub const CACHE_EXPIRE_SHORT: u64 = 300;
pub const CACHE_EXPIRE_MEDIUM: u64 = 1_800;
pub const CACHE_EXPIRE_LONG: u64 = 3_600;
pub const CACHE_EXPIRE_DAY: u64 = 86_400;
pub const CACHE_EXPIRE_WEEK: u64 = 604_800;

// Token expiry, in seconds
pub const ACCESS_TOKEN_EXPIRE: u64 = 3_600;
pub const REFRESH_TOKEN_EXPIRE: u64 = 604_800;
pub const MFA_CODE_EXPIRE: u64 = 300;

// Pagination defaults
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

// Password policy
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 64;
pub const BCRYPT_STRENGTH: u32 = 12;

// Assets
pub const DEFAULT_CURRENCY: &str = "USDT";
pub const ASSET_DECIMAL_PLACES: u32 = 8;
pub const ASSET_FREEZE_REASON_WITHDRAW: &str = "WITHDRAW";
pub const ASSET_FREEZE_REASON_ORDER: &str = "ORDER";

// Orders
pub const ORDER_PRICE_PRECISION: u32 = 8;
pub const ORDER_QUANTITY_PRECISION: u32 = 8;

// Message topics
pub const TOPIC_USER_REGISTER: &str = "user.register";
pub const TOPIC_KYC_SUBMIT: &str = "kyc.submit";
pub const TOPIC_DEPOSIT_CONFIRMED: &str = "deposit.confirmed";
pub const TOPIC_WITHDRAW_SUBMIT: &str = "withdraw.submit";
pub const TOPIC_ORDER_CREATED: &str = "order.created";
pub const TOPIC_ORDER_MATCHED: &str = "order.matched";
pub const TOPIC_TRADE_EXECUTED: &str = "trade.executed";

// System
pub const SYSTEM_USER: &str = "SYSTEM";
pub const DEFAULT_LOCALE: &str = "en_US";
