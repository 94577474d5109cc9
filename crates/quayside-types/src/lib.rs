//! Wire types shared by the Quayside client and its mock backend.
//!
//! - [`envelope`]: the `{code, message, data}` wrapper and its success rules
//! - [`request`]: transport-neutral request/response descriptors
//! - [`page`]: page/page-size parameters and the listing payload
//! - [`endpoints`]: endpoint paths the dashboard talks to
//! - [`records`]: resource records and request payloads

pub mod endpoints;
pub mod envelope;
pub mod page;
pub mod records;
pub mod request;

pub use envelope::{
    GENERIC_FAILURE_MESSAGE, GENERIC_TRANSPORT_MESSAGE, ResponseEnvelope,
    SESSION_INVALIDATING_CODES, SUCCESS_CODES, has_code_field, is_success_code,
};
pub use page::{DEFAULT_CURRENT, DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use records::*;
pub use request::{ApiRequest, HttpMethod, TransportResponse};
