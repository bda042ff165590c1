//! Minimal `multipart/form-data` encoding for single-file uploads.

use crate::upload::mime_for;
use std::time::{SystemTime, UNIX_EPOCH};

/// A form with one file part.
pub(crate) struct Form<'a> {
    boundary: String,
    field: &'a str,
    filename: &'a str,
    bytes: &'a [u8],
}

impl<'a> Form<'a> {
    /// Build a form carrying `bytes` as field `field`.
    pub(crate) fn single_file(field: &'a str, filename: &'a str, bytes: &'a [u8]) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self {
            boundary: format!("----client-data-compiler-{:x}", nanos),
            field,
            filename,
            bytes,
        }
    }

    /// Value for the `Content-Type` request header.
    pub(crate) fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encoded request body.
    pub(crate) fn body(&self) -> Vec<u8> {
        // Quotes or line breaks would end the header early
        let filename: String = self
            .filename
            .chars()
            .filter(|c| !matches!(c, '"' | '\r' | '\n'))
            .collect();
        let part_type = mime_for(&filename).unwrap_or("application/octet-stream");

        let mut body = Vec::with_capacity(self.bytes.len() + 256);
        body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                self.field, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part_type).as_bytes());
        body.extend_from_slice(self.bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", self.boundary).as_bytes());
        body
    }
}
