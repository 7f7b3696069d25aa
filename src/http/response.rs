//! Response variants and the single-emission send contract.

use std::io::Write;

use axum::response::IntoResponse;
use serde::Serialize;

use super::headers::Headers;

const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Contract violations raised by [`Response`] construction and emission.
///
/// These signal programmer misuse rather than runtime conditions; none of
/// them are expected during normal request handling.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("invalid HTTP status code: {0}")]
    InvalidStatus(u16),
    #[error("invalid redirect status code: {0}")]
    InvalidRedirectStatus(u16),
    #[error("redirect responses cannot have a body")]
    BodyNotAllowed,
    #[error("response has already been sent")]
    AlreadySent,
    #[error("failed to serialize JSON body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Payload kind of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Html,
    Json,
    Redirect,
}

/// An outgoing HTTP response: status, normalized headers, body.
///
/// Constructed through [`Response::html`], [`Response::json`], or
/// [`Response::redirect`], each of which pins the matching `Content-Type`
/// (redirects carry `Location` and no body instead). [`Response::send`]
/// emits the message to a sink exactly once.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: String,
    kind: ResponseKind,
    sent: bool,
}

impl Response {
    /// Creates a `200 OK` HTML response around pre-rendered markup.
    pub fn html(body: impl Into<String>) -> Self {
        let mut headers = Headers::new();
        headers.add("Content-Type", "text/html; charset=UTF-8", true);
        Self {
            status: 200,
            headers,
            body: body.into(),
            kind: ResponseKind::Html,
            sent: false,
        }
    }

    /// Creates an HTML response with an explicit status code.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidStatus`] when `status` is outside
    /// `[100, 599]`.
    pub fn html_with_status(body: impl Into<String>, status: u16) -> Result<Self, ResponseError> {
        let mut response = Self::html(body);
        response.set_status(status)?;
        Ok(response)
    }

    /// Creates a `200 OK` JSON response by serializing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::Serialization`] when `value` cannot be
    /// serialized.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ResponseError> {
        let body = serde_json::to_string(value)?;
        let mut headers = Headers::new();
        headers.add("Content-Type", "application/json; charset=UTF-8", true);
        Ok(Self {
            status: 200,
            headers,
            body,
            kind: ResponseKind::Json,
            sent: false,
        })
    }

    /// Creates a JSON response with an explicit status code.
    pub fn json_with_status<T: Serialize>(value: &T, status: u16) -> Result<Self, ResponseError> {
        let mut response = Self::json(value)?;
        response.set_status(status)?;
        Ok(response)
    }

    /// Creates a `303 See Other` redirect to `location`.
    pub fn redirect(location: &str) -> Self {
        let mut headers = Headers::new();
        headers.add("Location", location, true);
        Self {
            status: 303,
            headers,
            body: String::new(),
            kind: ResponseKind::Redirect,
            sent: false,
        }
    }

    /// Creates a redirect with an explicit status code.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidRedirectStatus`] when `status` is not
    /// one of 301, 302, 303, 307, 308.
    pub fn redirect_with_status(location: &str, status: u16) -> Result<Self, ResponseError> {
        let mut response = Self::redirect(location);
        response.set_status(status)?;
        Ok(response)
    }

    /// Sets the status code.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidStatus`] outside `[100, 599]`, and
    /// [`ResponseError::InvalidRedirectStatus`] when a redirect response is
    /// given a non-redirect code.
    pub fn set_status(&mut self, status: u16) -> Result<&mut Self, ResponseError> {
        if !(100..=599).contains(&status) {
            return Err(ResponseError::InvalidStatus(status));
        }
        if self.kind == ResponseKind::Redirect && !REDIRECT_STATUSES.contains(&status) {
            return Err(ResponseError::InvalidRedirectStatus(status));
        }
        self.status = status;
        Ok(self)
    }

    /// Replaces the body.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::BodyNotAllowed`] on redirect responses; a
    /// redirect carrying a payload is a contract violation, not a no-op.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<&mut Self, ResponseError> {
        if self.kind == ResponseKind::Redirect {
            return Err(ResponseError::BodyNotAllowed);
        }
        self.body = body.into();
        Ok(self)
    }

    /// Sets a header. See [`Headers::add`] for `replace` semantics.
    pub fn add_header(&mut self, name: &str, value: impl Into<String>, replace: bool) -> &mut Self {
        self.headers.add(name, value, replace);
        self
    }

    /// Removes all headers, including the `Content-Type` pinned at
    /// construction.
    pub fn clear_headers(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Emits the status line, headers, and body to `sink`.
    ///
    /// Multi-value header slots are written as repeated header lines. The
    /// body is omitted for redirects.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::AlreadySent`] on a second invocation and
    /// [`ResponseError::Io`] when the sink fails.
    pub fn send<W: Write>(&mut self, sink: &mut W) -> Result<(), ResponseError> {
        if self.sent {
            return Err(ResponseError::AlreadySent);
        }

        write!(sink, "HTTP/1.1 {}", self.status)?;
        let reason = reason_phrase(self.status);
        if !reason.is_empty() {
            write!(sink, " {reason}")?;
        }
        sink.write_all(b"\r\n")?;

        for (name, value) in self.headers.iter_flat() {
            write!(sink, "{name}: {value}\r\n")?;
        }
        sink.write_all(b"\r\n")?;

        if self.kind != ResponseKind::Redirect {
            sink.write_all(self.body.as_bytes())?;
        }

        self.sent = true;
        Ok(())
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let mut builder = axum::http::Response::builder().status(self.status);
        for (name, value) in self.headers.iter_flat() {
            builder = builder.header(name, value);
        }

        let body = match self.kind {
            ResponseKind::Redirect => String::new(),
            _ => self.body,
        };

        match builder.body(axum::body::Body::from(body)) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "failed to convert response");
                axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Reason phrase for the status line; empty for uncommon codes.
fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_out_of_range_rejected() {
        assert!(matches!(
            Response::html_with_status("<p>hi</p>", 99),
            Err(ResponseError::InvalidStatus(99))
        ));
        assert!(matches!(
            Response::html_with_status("<p>hi</p>", 600),
            Err(ResponseError::InvalidStatus(600))
        ));
        assert!(Response::html_with_status("<p>hi</p>", 100).is_ok());
        assert!(Response::html_with_status("<p>hi</p>", 599).is_ok());
    }

    #[test]
    fn test_redirect_status_set() {
        for status in [301, 302, 303, 307, 308] {
            assert!(Response::redirect_with_status("/authors", status).is_ok());
        }
        assert!(matches!(
            Response::redirect_with_status("/authors", 200),
            Err(ResponseError::InvalidRedirectStatus(200))
        ));
        assert!(matches!(
            Response::redirect_with_status("/authors", 304),
            Err(ResponseError::InvalidRedirectStatus(304))
        ));
    }

    #[test]
    fn test_redirect_rejects_body() {
        let mut response = Response::redirect("/authors");
        assert!(matches!(
            response.set_body("nope"),
            Err(ResponseError::BodyNotAllowed)
        ));
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_html_content_type() {
        let response = Response::html("<h1>Authors</h1>");
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            &["text/html; charset=UTF-8".to_string()]
        );
        assert_eq!(response.body(), "<h1>Authors</h1>");
    }

    #[test]
    fn test_json_round_trip() {
        let books = json!([
            { "id": 1, "author_id": 2, "title": "Dune", "publication_year": 1965 },
            { "id": 2, "author_id": 2, "title": "Messiah", "publication_year": 1969 }
        ]);
        let response = Response::json(&books).unwrap();

        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            &["application/json; charset=UTF-8".to_string()]
        );
        let parsed: serde_json::Value = serde_json::from_str(response.body()).unwrap();
        assert_eq!(parsed, books);
    }

    #[test]
    fn test_send_writes_status_headers_body() {
        let mut response = Response::html_with_status("<p>gone</p>", 404).unwrap();
        response.add_header("x-request-id", "abc", true);

        let mut sink = Vec::new();
        response.send(&mut sink).unwrap();
        let wire = String::from_utf8(sink).unwrap();

        assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(wire.contains("Content-Type: text/html; charset=UTF-8\r\n"));
        assert!(wire.contains("X-Request-Id: abc\r\n"));
        assert!(wire.ends_with("\r\n\r\n<p>gone</p>"));
    }

    #[test]
    fn test_send_repeats_multi_value_headers() {
        let mut response = Response::html("ok");
        response.add_header("Set-Cookie", "a=1", false);
        response.add_header("Set-Cookie", "b=2", false);

        let mut sink = Vec::new();
        response.send(&mut sink).unwrap();
        let wire = String::from_utf8(sink).unwrap();

        assert!(wire.contains("Set-Cookie: a=1\r\n"));
        assert!(wire.contains("Set-Cookie: b=2\r\n"));
    }

    #[test]
    fn test_send_omits_redirect_body_and_carries_location() {
        let mut response = Response::redirect("/authors");
        let mut sink = Vec::new();
        response.send(&mut sink).unwrap();
        let wire = String::from_utf8(sink).unwrap();

        assert!(wire.starts_with("HTTP/1.1 303 See Other\r\n"));
        assert!(wire.contains("Location: /authors\r\n"));
        assert!(wire.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_double_send_fails() {
        let mut response = Response::html("once");
        let mut sink = Vec::new();
        response.send(&mut sink).unwrap();
        assert!(matches!(
            response.send(&mut sink),
            Err(ResponseError::AlreadySent)
        ));
    }

    #[test]
    fn test_header_replace_normalization() {
        let mut response = Response::html("ok");
        response.add_header("content-type", "text/plain", true);
        response.add_header("Content-Type", "application/xml", true);

        assert_eq!(
            response.headers().get("content-type").unwrap(),
            &["application/xml".to_string()]
        );
    }
}
