use serde::{Deserialize, Serialize};

use crate::{BusinessError, ErrorCode, constants};

/// Sort direction for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A pagination request. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: constants::DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Desc,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Checks page bounds, mirroring the constraints enforced on inbound
    /// requests: `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`.
    pub fn validate(&self) -> Result<(), BusinessError> {
        if self.page < 1 {
            return Err(BusinessError::with_message(
                ErrorCode::ParamInvalid,
                "page must be greater than 0",
            ));
        }
        if self.page_size < 1 {
            return Err(BusinessError::with_message(
                ErrorCode::ParamInvalid,
                "page size must be greater than 0",
            ));
        }
        if self.page_size > constants::MAX_PAGE_SIZE {
            return Err(BusinessError::with_message(
                ErrorCode::ParamInvalid,
                format!("page size must not exceed {}", constants::MAX_PAGE_SIZE),
            ));
        }
        Ok(())
    }

    /// Row offset for a database query.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Row limit for a database query.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// One page of results plus the bookkeeping needed to render a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub records: Vec<T>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Builds a page from a query result and its total row count.
    pub fn of(page: u32, page_size: u32, total: u64, records: Vec<T>) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(u64::from(page_size)) as u32
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
            records,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// An empty page.
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self::of(page, page_size, 0, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_service_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn offset_and_limit_follow_one_based_pages() {
        let request = PageRequest::new(3, 25);
        assert_eq!(request.offset(), 50);
        assert_eq!(request.limit(), 25);
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
    }

    #[test]
    fn oversized_page_size_is_rejected() {
        let request = PageRequest::new(1, constants::MAX_PAGE_SIZE + 1);
        let err = request.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParamInvalid.code());

        assert!(PageRequest::new(1, 0).validate().is_err());
    }

    #[test]
    fn request_deserializes_with_partial_fields() {
        let request: PageRequest = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, constants::DEFAULT_PAGE_SIZE);

        let request: PageRequest =
            serde_json::from_str(r#"{"pageSize": 50, "sortBy": "created_at", "sortOrder": "ASC"}"#)
                .unwrap();
        assert_eq!(request.page_size, 50);
        assert_eq!(request.sort_by.as_deref(), Some("created_at"));
        assert_eq!(request.sort_order, SortOrder::Asc);
    }

    #[test]
    fn page_bookkeeping_is_derived_from_totals() {
        let page = PageResponse::of(2, 10, 35, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 4);
        assert!(page.has_next);
        assert!(page.has_previous);

        let last = PageResponse::of(4, 10, 35, vec![4]);
        assert!(!last.has_next);
        assert!(last.has_previous);

        let empty = PageResponse::<u32>::empty(1, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_previous);
        assert!(empty.records.is_empty());
    }
}
