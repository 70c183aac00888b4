// Configuration for the CLI.
// ---------------------------
// The command layer builds one `Config` per invocation and hands it to the
// `ApiClient`; nothing below the command layer reads the environment or the
// home directory on its own.
//
// Credentials live in two small dot files in the user's home directory:
// - `.pinata-files-cli` holds the JWT saved by `pinata auth`.
// - `.pinata-files-cli-gateway` holds the default gateway domain.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_API_HOST: &str = "api.pinata.cloud";
pub const DEFAULT_UPLOAD_HOST: &str = "uploads.pinata.cloud";

const TOKEN_FILE: &str = ".pinata-files-cli";
const GATEWAY_FILE: &str = ".pinata-files-cli-gateway";

/// Everything a command needs to talk to the remote service.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub upload_url: String,
    pub credentials: CredentialStore,
    /// Deadline for the upload POST. `None` waits for as long as it takes.
    pub upload_timeout: Option<Duration>,
}

impl Config {
    /// Build the configuration from the environment:
    /// `PINATA_HOST`, `PINATA_UPLOAD_HOST` and `PINATA_CONFIG_DIR`.
    pub fn from_env() -> Self {
        let api_url = base_url(std::env::var("PINATA_HOST").ok(), DEFAULT_API_HOST);
        let upload_url = base_url(
            std::env::var("PINATA_UPLOAD_HOST").ok(),
            DEFAULT_UPLOAD_HOST,
        );
        let dir = std::env::var_os("PINATA_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));

        Config {
            api_url,
            upload_url,
            credentials: CredentialStore::new(dir),
            upload_timeout: None,
        }
    }

    /// Point both APIs at one base URL. Mostly useful against a local server.
    pub fn with_base_url(base: &str, credentials: CredentialStore) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Config {
            api_url: base.clone(),
            upload_url: base,
            credentials,
            upload_timeout: None,
        }
    }
}

/// Accepts either a bare host (`api.pinata.cloud`) or a full URL
/// (`http://127.0.0.1:8080`). Empty values fall back to the default host.
fn base_url(value: Option<String>, default_host: &str) -> String {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default_host.to_string());
    let url = if value.contains("://") {
        value
    } else {
        format!("https://{}", value)
    };
    url.trim_end_matches('/').to_string()
}

/// File-backed storage for the JWT and the default gateway domain.
#[derive(Clone, Debug)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CredentialStore { dir: dir.into() }
    }

    pub fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    pub fn gateway_path(&self) -> PathBuf {
        self.dir.join(GATEWAY_FILE)
    }

    /// Load the JWT. A missing or empty file means the user never ran `auth`.
    pub fn load_token(&self) -> Result<String> {
        match read_trimmed(&self.token_path())? {
            Some(token) => Ok(token),
            None => Err(Error::AuthMissing),
        }
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        write_private(&self.token_path(), token.trim())
    }

    pub fn load_gateway(&self) -> Result<String> {
        read_trimmed(&self.gateway_path())?.ok_or_else(|| {
            Error::Input(
                "no gateway set, choose one with 'pinata gateways set' first".to_string(),
            )
        })
    }

    pub fn save_gateway(&self, domain: &str) -> Result<()> {
        write_private(&self.gateway_path(), domain.trim())
    }
}

fn read_trimmed(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(data) => {
            let data = data.trim();
            Ok((!data.is_empty()).then(|| data.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn write_private(path: &Path, contents: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "credential file written");
    Ok(())
}
