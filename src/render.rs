// Response rendering: decode a `{ "data": ... }` envelope and format the
// payload for the terminal with a stable 4-space indentation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::api::types::{Envelope, UploadResult};
use crate::error::{Error, Result};

/// Decode the envelope of `raw` and return its payload.
pub fn decode_data<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(raw)?;
    Ok(envelope.data)
}

/// Pretty-print `value` the way every command shows its result.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|e| Error::Input(format!("response is not valid UTF-8: {}", e)))
}

/// Decode an upload response. Returns the result together with its rendered
/// form; the caller decides whether to print it.
pub fn render_upload(raw: &str) -> Result<(UploadResult, String)> {
    let result: UploadResult = decode_data(raw)?;
    let pretty = to_pretty_json(&result)?;
    Ok((result, pretty))
}
