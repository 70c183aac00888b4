// Library root
// ------------
// The `pinata` binary is a thin shell over this crate: `main.rs` parses the
// command line and hands the result to `commands::run`.
//
// Module responsibilities:
// - `config`: the explicit configuration object and the credential files.
// - `api`: blocking HTTP requests against the Pinata API, one submodule per
//   resource (uploads, files, groups, keys, gateways, swaps).
// - `upload`: the local half of an upload (path enumeration, multipart
//   assembly, progress instrumentation).
// - `render`: response envelope decoding and JSON output formatting.
// - `ui`: prompts and progress bars.
// - `cli` / `commands`: argument parsing and command handlers.
//
// The upload pipeline never reads ambient state; everything it needs comes in
// through `Config` and `ApiClient`, which keeps it testable against a local
// server.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod ui;
pub mod upload;

pub use error::{Error, Result};
