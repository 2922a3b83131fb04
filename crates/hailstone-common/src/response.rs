use serde::{Deserialize, Serialize};

use crate::datetime;

/// Response code signalling success.
pub const CODE_OK: u32 = 200;

/// Response code signalling a generic server-side failure.
pub const CODE_INTERNAL_ERROR: u32 = 500;

/// The uniform response envelope every service endpoint returns.
///
/// `code` is 200 on success and an [`ErrorCode`] value otherwise; `data` is
/// omitted from the serialized form when absent; `timestamp` is the unix
/// millisecond at which the envelope was built.
///
/// # Example
/// ```
/// use hailstone_common::ApiResponse;
///
/// let ok = ApiResponse::ok_with(vec![1, 2, 3]);
/// assert!(ok.is_success());
///
/// let err = ApiResponse::<()>::error("boom");
/// assert!(!err.is_success());
/// ```
///
/// [`ErrorCode`]: crate::ErrorCode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    fn build(code: u32, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            timestamp: datetime::now_millis(),
        }
    }

    /// A success envelope with no payload.
    pub fn ok() -> Self {
        Self::build(CODE_OK, "Success", None)
    }

    /// A success envelope carrying `data`.
    pub fn ok_with(data: T) -> Self {
        Self::build(CODE_OK, "Success", Some(data))
    }

    /// A success envelope with a custom message.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self::build(CODE_OK, message, Some(data))
    }

    /// A failure envelope with the generic internal-error code.
    pub fn error(message: impl Into<String>) -> Self {
        Self::build(CODE_INTERNAL_ERROR, message, None)
    }

    /// A failure envelope with an explicit code.
    pub fn error_with_code(code: u32, message: impl Into<String>) -> Self {
        Self::build(code, message, None)
    }

    /// A failure envelope carrying extra context in `data`.
    pub fn error_with_data(code: u32, message: impl Into<String>, data: T) -> Self {
        Self::build(code, message, Some(data))
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::ok_with(7u32);
        assert!(response.is_success());
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "Success");
        assert_eq!(response.data, Some(7));
        assert!(response.timestamp > 0);
    }

    #[test]
    fn error_envelope_shape() {
        let response = ApiResponse::<()>::error_with_code(6001, "Order Not Found");
        assert!(!response.is_success());
        assert_eq!(response.code, 6001);
        assert_eq!(response.message, "Order Not Found");
        assert_eq!(response.data, None);
    }

    #[test]
    fn empty_data_is_omitted_from_json() {
        let json = serde_json::to_value(ApiResponse::<u32>::ok()).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["code"], 200);
        assert_eq!(json["message"], "Success");
    }

    #[test]
    fn snowflake_ids_serialize_inside_the_envelope() {
        // Uses the crate-level re-export, the path downstream services take.
        let id = crate::SnowflakeId::from_parts(1_000, 5, 0);
        let json = serde_json::to_value(ApiResponse::ok_with(id)).unwrap();
        assert_eq!(json["data"], serde_json::json!(id.to_raw()));
    }
}
