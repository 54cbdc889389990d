//! Response shape probes.
//!
//! The backend's success and error paths return structurally different JSON
//! with no common discriminant, so decoded payloads are probed for marker
//! fields before any field is trusted. The probes are pure and total: they
//! never panic and return `false` for null, primitive or malformed input.

use serde_json::Value;

/// Which envelope shape a decoded payload has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A success envelope (`responseStatusCode` present).
    Success,

    /// An error envelope (`errorCode` present).
    Error,

    /// Neither marker field is present.
    Unknown,
}

/// True iff `value` is an object carrying a numeric `responseStatusCode`.
#[must_use]
pub fn is_http_response(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.get("responseStatusCode").is_some_and(Value::is_number))
}

/// True iff `value` is an object carrying a numeric `errorCode`.
#[must_use]
pub fn is_error_response(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.get("errorCode").is_some_and(Value::is_number))
}

/// True iff `value` is an object carrying a `pageable` descriptor field,
/// i.e. a success body that is a paginated collection rather than a single
/// resource or bare list.
#[must_use]
pub fn is_page_response(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("pageable"))
}

/// Classify a decoded payload.
///
/// The two marker probes are not mutually exclusive by construction; a
/// malformed payload carrying both fields classifies as success. That
/// precedence (success before error) mirrors the established call-site
/// ordering and is an assumption, not a backend guarantee.
#[must_use]
pub fn classify(value: &Value) -> Classification {
    if is_http_response(value) {
        Classification::Success
    } else if is_error_response(value) {
        Classification::Error
    } else {
        Classification::Unknown
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn well_formed_success_envelope_matches_only_the_success_probe() {
        let value = json!({ "responseStatusCode": 200, "body": { "id": 1 } });

        assert!(is_http_response(&value));
        assert!(!is_error_response(&value));
        assert_eq!(classify(&value), Classification::Success);
    }

    #[test]
    fn well_formed_error_envelope_matches_only_the_error_probe() {
        let value = json!({ "errorCode": 404, "errorMessage": "Not found" });

        assert!(is_error_response(&value));
        assert!(!is_http_response(&value));
        assert_eq!(classify(&value), Classification::Error);
    }

    #[test]
    fn probes_are_false_for_non_object_input() {
        for value in [json!(null), json!(42), json!("ok"), json!([1, 2, 3])] {
            assert!(!is_http_response(&value), "success probe on {value}");
            assert!(!is_error_response(&value), "error probe on {value}");
            assert!(!is_page_response(&value), "page probe on {value}");
            assert_eq!(classify(&value), Classification::Unknown);
        }
    }

    #[test]
    fn non_numeric_marker_fields_do_not_match() {
        assert!(!is_http_response(&json!({ "responseStatusCode": "200" })));
        assert!(!is_error_response(&json!({ "errorCode": null })));
    }

    #[test]
    fn payload_with_both_markers_classifies_as_success() {
        let value = json!({ "responseStatusCode": 200, "errorCode": 500 });

        assert_eq!(classify(&value), Classification::Success);
    }

    #[test]
    fn page_probe_requires_the_pageable_field() {
        let page = json!({ "content": [], "pageable": { "pageNumber": 0 } });
        let bare = json!({ "content": [] });

        assert!(is_page_response(&page));
        assert!(!is_page_response(&bare));
    }
}
