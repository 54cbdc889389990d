//! Envelopes
//!
//! Every backend call returns one of three JSON shapes with no shared
//! discriminant field: a success envelope, an error envelope, or a success
//! envelope whose body is a page descriptor. These modules centralize the
//! defensive shape probing every call site would otherwise repeat.

pub mod classify;
pub mod outcome;
pub mod shapes;

pub use classify::{Classification, classify, is_error_response, is_http_response, is_page_response};
pub use outcome::{EnvelopeError, Outcome};
pub use shapes::{ErrorResponse, HttpResponse, PageResponse, Pageable, SortFlags};
