// Error taxonomy shared by the upload pipeline and the API commands.
// Every stage returns the first error it hits unchanged; the binary turns
// it into a single fatal message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JWT not found. Please authorize first using the 'auth' command")]
    AuthMissing,
    #[error("file or folder does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to send the request to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server rejected the credentials ({status}), check your JWT")]
    Auth { status: u16 },
    #[error("server returned an error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("failed to decode the server response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Input(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Network {
            url: url.into(),
            source,
        }
    }

    /// Classify a non-200 response. The body is kept only as context for the
    /// message, it is never decoded.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Error::Auth { status },
            _ => Error::Server { status, body },
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status } | Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
