//! Envelope shapes.
//!
//! Wire field names follow the backend contract verbatim (camelCase); the
//! shapes are consumed, not owned, so optionality mirrors what the backend
//! actually guarantees rather than what would be convenient.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every 2xx response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse<T> {
    pub timestamp: Option<String>,
    pub response_status_code: Option<u16>,
    pub response_status: Option<String>,
    pub response_message: Option<String>,
    pub response_developer_message: Option<String>,
    pub body: Option<T>,
}

/// Error envelope returned on any failed call.
///
/// `validation_errors` is keyed by request field name; it is the contract
/// that lets callers render inline field feedback. Sorted keys keep display
/// order stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: Option<String>,
    pub error_code: Option<u16>,
    pub error_status: Option<String>,
    pub error_message: Option<String>,
    pub request_path: Option<String>,
    pub validation_errors: Option<BTreeMap<String, String>>,
}

/// Page descriptor carried in a success envelope's body by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    #[serde(default)]
    pub pageable: Pageable,
    #[serde(default)]
    pub sort: SortFlags,
}

impl<T> PageResponse<T> {
    /// Whether a further page exists after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.last
    }
}

/// Paging metadata echoed back by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    pub offset: u64,
    pub paged: bool,
    pub unpaged: bool,
    pub sort: SortFlags,
}

/// Sort summary flags inside a page descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortFlags {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn page_response_deserializes_from_backend_json() -> TestResult {
        let page: PageResponse<String> = serde_json::from_value(serde_json::json!({
            "content": ["a", "b"],
            "totalElements": 12,
            "totalPages": 6,
            "number": 1,
            "size": 2,
            "numberOfElements": 2,
            "first": false,
            "last": false,
            "empty": false,
            "pageable": {
                "pageNumber": 1,
                "pageSize": 2,
                "offset": 2,
                "paged": true,
                "unpaged": false,
                "sort": { "sorted": false, "unsorted": true, "empty": true }
            },
            "sort": { "sorted": false, "unsorted": true, "empty": true }
        }))?;

        assert_eq!(page.content, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.total_pages, 6);
        assert_eq!(page.pageable.page_number, 1);
        assert!(page.has_next());

        Ok(())
    }

    #[test]
    fn error_response_keeps_the_validation_error_map() -> TestResult {
        let error: ErrorResponse = serde_json::from_value(serde_json::json!({
            "errorCode": 400,
            "errorStatus": "BAD_REQUEST",
            "errorMessage": "Validation failed",
            "validationErrors": {
                "email": "must be a valid email address",
                "password": "must be at least 8 characters"
            }
        }))?;

        let validation = error.validation_errors.as_ref();

        assert_eq!(error.error_code, Some(400));
        assert_eq!(
            validation.and_then(|map| map.get("email").cloned()).as_deref(),
            Some("must be a valid email address")
        );
        assert_eq!(validation.map(BTreeMap::len), Some(2));

        Ok(())
    }

    #[test]
    fn success_envelope_tolerates_missing_optional_fields() -> TestResult {
        let response: HttpResponse<String> = serde_json::from_value(serde_json::json!({
            "responseStatusCode": 200
        }))?;

        assert_eq!(response.response_status_code, Some(200));
        assert_eq!(response.body, None);

        Ok(())
    }
}
