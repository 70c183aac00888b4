// Upload transport. Sends an already assembled multipart body once; it
// never retries.

use std::io::Read;

use reqwest::blocking::Body;
use reqwest::header::CONTENT_TYPE;
use tracing::info;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// POST a serialized multipart body to `/v3/files`.
    ///
    /// `body` is streamed once, in order, with `len` as the announced
    /// content length. `content_type` must be the assembler's header value,
    /// boundary included. Returns the raw body of a 200 response.
    pub fn upload_file_body<R>(&self, body: R, len: u64, content_type: &str) -> Result<String>
    where
        R: Read + Send + 'static,
    {
        let url = self.upload_url("/v3/files");
        let mut req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .body(Body::sized(body, len));
        if let Some(timeout) = self.config.upload_timeout {
            req = req.timeout(timeout);
        }

        info!(%url, bytes = len, "uploading");
        self.execute(&url, req)
    }
}
