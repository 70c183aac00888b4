// Upload pipeline
// ---------------
// path -> `target::enumerate` -> `multipart::assemble`
//      -> (optional) `progress::wrap`
//      -> `ApiClient::upload_file_body` -> `render::render_upload`
//
// Each stage consumes the previous stage's output and keeps nothing once the
// call returns. There is no retry: a failed upload has to be started again.

use std::path::Path;

use tracing::info;

use crate::api::types::UploadResult;
use crate::api::ApiClient;
use crate::error::Result;
use crate::render;

pub mod multipart;
pub mod progress;
pub mod target;

pub use multipart::{assemble, MultipartPayload, UploadOptions};
pub use progress::{ObservedReader, ProgressObserver};
pub use target::{enumerate, UploadTarget};

/// Outcome of a successful upload: the decoded result and its rendering.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub result: UploadResult,
    pub rendered: String,
}

/// Enumerate `path` and serialize it into a request body.
pub fn prepare(path: &Path, options: &UploadOptions) -> Result<(UploadTarget, MultipartPayload)> {
    let target = enumerate(path)?;
    let payload = assemble(&target, options)?;
    Ok((target, payload))
}

/// Send `payload`, reporting progress to `observer` when one is given, and
/// decode the response.
pub fn send<O>(client: &ApiClient, payload: MultipartPayload, observer: Option<O>) -> Result<UploadOutcome>
where
    O: ProgressObserver + Send + 'static,
{
    let content_type = payload.content_type();
    let len = payload.len();
    let raw = match observer {
        Some(observer) => {
            let reader = progress::wrap(payload.into_reader(), len, observer);
            client.upload_file_body(reader, len, &content_type)?
        }
        None => client.upload_file_body(payload.into_reader(), len, &content_type)?,
    };

    let (result, rendered) = render::render_upload(&raw)?;
    info!(cid = %result.cid, id = %result.id, "upload complete");
    Ok(UploadOutcome { result, rendered })
}

/// Run the whole pipeline without progress reporting.
pub fn upload(client: &ApiClient, path: &Path, options: &UploadOptions) -> Result<UploadOutcome> {
    let (_, payload) = prepare(path, options)?;
    send(client, payload, None::<indicatif::ProgressBar>)
}
