use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{Response, StatusCode};

/// Sink for a rendered page, owned by the HTTP layer
///
/// The renderer sets exactly one status and one `Content-Type` header, then
/// writes the whole body in a single call.
pub trait ResponseWriter {
    fn set_status(&mut self, status: StatusCode);
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
    fn write_body(&mut self, body: Bytes);
}

impl<B: From<Bytes>> ResponseWriter for Response<B> {
    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_body(&mut self, body: Bytes) {
        *self.body_mut() = B::from(body);
    }
}
