//! Storefront HTTP Endpoints
//!
//! Thin wrappers over the server's routes, organized by area.
//! Non-2xx responses count as failures.

mod cart;
mod catalog;
mod forms;
mod newsletter;

use gloo_net::http::{RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{UiError, UiResult};

pub use cart::*;
pub use catalog::*;
pub use forms::*;
pub use newsletter::*;

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Characters left as-is in a urlencoded form value (`encodeURIComponent`'s set)
const FORM_VALUE: &AsciiSet = &PATH_SEGMENT
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Escape an opaque id for use as one path segment
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// `application/x-www-form-urlencoded` body, spaces as `+`
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode_form_component(name), encode_form_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_form_component(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_VALUE).to_string().replace("%20", "+")
}

/// Send and turn non-2xx statuses into errors
async fn send(request: RequestBuilder) -> UiResult<Response> {
    ensure_ok(request.send().await?)
}

fn ensure_ok(response: Response) -> UiResult<Response> {
    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }
    Ok(response)
}
