//! Generic Form Submission
//!
//! Posts a server-rendered form in the background, the way a browser would
//! submit it, but without navigating.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement, UrlSearchParams};

use super::{ensure_ok, send, FORM_CONTENT_TYPE};
use crate::error::{UiError, UiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// From a `method` attribute; anything but GET posts
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some(method) if method.trim().eq_ignore_ascii_case("get") => FormMethod::Get,
            _ => FormMethod::Post,
        }
    }
}

/// Join a query string onto an action URL
pub fn with_query(action: &str, query: &str) -> String {
    if query.is_empty() {
        action.to_string()
    } else if action.contains('?') {
        format!("{}&{}", action, query)
    } else {
        format!("{}?{}", action, query)
    }
}

/// Submit the form's fields to its `action` with its `method`
pub async fn submit_form(form: &HtmlFormElement) -> UiResult<()> {
    let action = form
        .get_attribute("action")
        .filter(|a| !a.trim().is_empty())
        .or_else(|| web_sys::window().and_then(|w| w.location().href().ok()))
        .ok_or_else(|| UiError::MissingElement("form action".to_string()))?;
    let method = FormMethod::from_attr(form.get_attribute("method").as_deref());
    let body = serialize_form(form)?;

    match method {
        FormMethod::Get => {
            send(Request::get(&with_query(&action, &body))).await?;
        }
        FormMethod::Post => {
            let request = Request::post(&action)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body)?;
            ensure_ok(request.send().await?)?;
        }
    }
    Ok(())
}

/// Urlencoded successful controls of a form
fn serialize_form(form: &HtmlFormElement) -> UiResult<String> {
    let data = FormData::new_with_form(form).map_err(UiError::from_js)?;
    let params = UrlSearchParams::new_with_str_sequence_sequence(&data).map_err(UiError::from_js)?;
    Ok(String::from(params.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_defaults_to_post() {
        assert_eq!(FormMethod::from_attr(None), FormMethod::Post);
        assert_eq!(FormMethod::from_attr(Some("post")), FormMethod::Post);
        assert_eq!(FormMethod::from_attr(Some("dialog")), FormMethod::Post);
        assert_eq!(FormMethod::from_attr(Some("GET")), FormMethod::Get);
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/update_cart/4", ""), "/update_cart/4");
        assert_eq!(with_query("/search", "q=tea"), "/search?q=tea");
        assert_eq!(with_query("/search?page=2", "q=tea"), "/search?page=2&q=tea");
    }
}
