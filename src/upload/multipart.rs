// Multipart assembly: serializes an `UploadTarget` into one
// `multipart/form-data` body held in memory.
//
// Layout of the body, in order:
// - one `file` part per enumerated file, in enumeration order
// - `group_id`, only when a group was requested
// - `name`
// - the closing boundary

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::Path;

use tracing::debug;
use uuid::Uuid;

use super::target::UploadTarget;
use crate::error::{Error, Result};

/// Sentinel accepted by `--name` meaning "no override".
pub const NAME_UNSET: &str = "nil";

/// Caller supplied form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Display name. `None`, empty or `"nil"` fall back to the root's base name.
    pub name: Option<String>,
    /// Destination group. `None` or empty omits the `group_id` field.
    pub group_id: Option<String>,
}

impl UploadOptions {
    /// The display name actually sent for `target`.
    pub fn resolve_name(&self, target: &UploadTarget) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() && name != NAME_UNSET => name.to_string(),
            _ => target.root_name().to_string(),
        }
    }

    fn group(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

/// A fully serialized multipart body and the boundary it was written with.
/// Built fresh for every request.
#[derive(Debug)]
pub struct MultipartPayload {
    body: Vec<u8>,
    boundary: String,
}

impl MultipartPayload {
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `content-type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn len(&self) -> u64 {
        self.body.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_reader(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.body)
    }
}

/// Serialize `target` with the fields from `options`.
///
/// Each file is opened only while its part is written and is closed again
/// before the next one is opened, including when a read fails halfway.
pub fn assemble(target: &UploadTarget, options: &UploadOptions) -> Result<MultipartPayload> {
    let mut writer = FormWriter::new(Uuid::new_v4().simple().to_string());

    for path in target.files() {
        let filename = target.part_name(path);
        writer.file_part("file", &filename, path)?;
    }

    if let Some(group) = options.group() {
        writer.text_part("group_id", group);
    }
    writer.text_part("name", &options.resolve_name(target));

    let payload = writer.finish();
    debug!(
        files = target.files().len(),
        bytes = payload.len(),
        "multipart body assembled"
    );
    Ok(payload)
}

struct FormWriter {
    body: Vec<u8>,
    boundary: String,
}

impl FormWriter {
    fn new(boundary: String) -> Self {
        FormWriter {
            body: Vec::new(),
            boundary,
        }
    }

    fn part_header(&mut self, disposition: &str, content_type: Option<&str>) {
        let mut header = format!(
            "--{}\r\nContent-Disposition: form-data; {}\r\n",
            self.boundary, disposition
        );
        if let Some(content_type) = content_type {
            header.push_str(&format!("Content-Type: {}\r\n", content_type));
        }
        header.push_str("\r\n");
        self.body.extend_from_slice(header.as_bytes());
    }

    fn file_part(&mut self, field: &str, filename: &str, path: &Path) -> Result<()> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let disposition = format!(
            "name=\"{}\"; filename=\"{}\"",
            escape_quotes(field),
            escape_quotes(filename)
        );
        self.part_header(&disposition, Some("application/octet-stream"));
        io::copy(&mut file, &mut self.body).map_err(|e| Error::io(path, e))?;
        self.body.extend_from_slice(b"\r\n");
        Ok(())
    }

    fn text_part(&mut self, field: &str, value: &str) {
        let disposition = format!("name=\"{}\"", escape_quotes(field));
        self.part_header(&disposition, None);
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
    }

    fn finish(mut self) -> MultipartPayload {
        // Writing into a Vec cannot fail.
        let _ = write!(self.body, "--{}--\r\n", self.boundary);
        MultipartPayload {
            body: self.body,
            boundary: self.boundary,
        }
    }
}

// Header values stay on one line: CR and LF are percent-encoded.
fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
