// Command line definition. Parsing only; behavior lives in `commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::api::gateways::DEFAULT_SIGNED_URL_EXPIRY;
use crate::api::groups::DEFAULT_GROUP_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "pinata")]
#[command(version)]
#[command(
    about = "A CLI for uploading files to Pinata! To get started make an API key at https://app.pinata.cloud/keys, then authorize the CLI with the auth command with your JWT"
)]
pub struct Cli {
    /// Print debug diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authorize the CLI with your Pinata JWT
    #[command(visible_alias = "a")]
    Auth {
        /// Your Pinata JWT; prompted for when omitted
        jwt: Option<String>,
    },
    /// Upload a file or folder to Pinata
    #[command(visible_alias = "u")]
    Upload(UploadArgs),
    /// Interact with your files on Pinata
    #[command(visible_alias = "f", subcommand)]
    Files(FilesCommand),
    /// Interact with file groups
    #[command(visible_alias = "g", subcommand)]
    Groups(GroupsCommand),
    /// Create, list and revoke API keys
    #[command(visible_alias = "k", subcommand)]
    Keys(KeysCommand),
    /// Interact with your gateways on Pinata
    #[command(visible_alias = "gw", subcommand)]
    Gateways(GatewaysCommand),
    /// Interact and manage hot swaps on Pinata
    #[command(visible_alias = "s", subcommand)]
    Swaps(SwapsCommand),
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to the file or folder to upload
    pub path: PathBuf,
    /// Upload to a specific group by passing in the group ID
    #[arg(short, long)]
    pub group: Option<String>,
    /// Name for the upload; defaults to the file or folder name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Show upload progress
    #[arg(long, conflicts_with = "cid_only")]
    pub verbose: bool,
    /// Only print the CID of the upload
    #[arg(long)]
    pub cid_only: bool,
    /// Abort the upload after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// List most recent files
    #[command(visible_alias = "l")]
    List {
        /// Filter by name of the target file
        #[arg(short, long)]
        name: Option<String>,
        /// Filter results by CID
        #[arg(short, long)]
        cid: Option<String>,
        /// Filter results by group ID
        #[arg(short, long)]
        group: Option<String>,
        /// Filter results by file mime type
        #[arg(short, long)]
        mime: Option<String>,
        /// The number of files you would like to return
        #[arg(short, long)]
        amount: Option<String>,
        /// Paginate through file results using the page token
        #[arg(short, long)]
        token: Option<String>,
        /// Only return files whose CID is still pending
        #[arg(long)]
        cid_pending: bool,
        /// Filter results by metadata keyvalues (format: key=value)
        #[arg(long = "keyvalues", visible_alias = "kv", value_name = "KEY=VALUE")]
        keyvalues: Vec<String>,
    },
    /// Get file info by ID
    #[command(visible_alias = "g")]
    Get { id: String },
    /// Update a file by ID
    #[command(visible_alias = "u")]
    Update {
        id: String,
        /// New name of the file
        #[arg(short, long)]
        name: String,
    },
    /// Delete a file by ID
    #[command(visible_alias = "d")]
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    /// Create a new group
    #[command(visible_alias = "c")]
    Create {
        name: String,
        /// Make the group public
        #[arg(short, long)]
        public: bool,
    },
    /// List groups on your account
    #[command(visible_alias = "l")]
    List {
        /// List only public groups
        #[arg(short, long)]
        public: bool,
        /// The number of groups you would like to return
        #[arg(short, long, default_value = DEFAULT_GROUP_LIMIT)]
        amount: String,
        /// Filter groups by name
        #[arg(short, long)]
        name: Option<String>,
        /// Paginate through results using the page token
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Get group info by ID
    #[command(visible_alias = "g")]
    Get { id: String },
    /// Update a group
    #[command(visible_alias = "u")]
    Update {
        id: String,
        /// New name of the group
        #[arg(short, long, default_value = "")]
        name: String,
        /// Make the group public
        #[arg(short, long)]
        public: bool,
    },
    /// Delete a group by ID
    #[command(visible_alias = "d")]
    Delete { id: String },
    /// Add a file to a group
    #[command(visible_alias = "a")]
    Add { group_id: String, file_id: String },
    /// Remove a file from a group
    #[command(visible_alias = "r")]
    Remove { group_id: String, file_id: String },
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List API keys
    #[command(visible_alias = "l")]
    List {
        /// Filter keys by name
        #[arg(short, long)]
        name: Option<String>,
        /// Only revoked keys
        #[arg(long)]
        revoked: bool,
        /// Only keys with a limited number of uses
        #[arg(long)]
        limited_use: bool,
        /// Only keys that have used up their uses
        #[arg(long)]
        exhausted: bool,
        /// Skip this many keys
        #[arg(short, long)]
        offset: Option<String>,
    },
    /// Create an API key
    #[command(visible_alias = "c")]
    Create {
        /// Name of the key
        #[arg(short, long)]
        name: String,
        /// Give the key admin rights
        #[arg(long)]
        admin: bool,
        /// Maximum number of uses, 0 for unlimited
        #[arg(short, long, default_value_t = 0)]
        uses: u64,
        /// Endpoints the key may call, e.g. pinFileToIPFS
        #[arg(short, long, value_delimiter = ',')]
        endpoints: Vec<String>,
    },
    /// Revoke an API key
    #[command(visible_alias = "r")]
    Revoke { key: String },
}

#[derive(Subcommand, Debug)]
pub enum GatewaysCommand {
    /// Set your default gateway to be used by the CLI
    #[command(visible_alias = "s")]
    Set {
        /// Domain of the gateway; choose from your account when omitted
        domain: Option<String>,
    },
    /// Open a file in the browser
    #[command(visible_alias = "o")]
    Open { cid: String },
    /// Get a signed URL for a file by CID
    Sign {
        cid: String,
        /// Seconds the URL is valid for
        #[arg(default_value_t = DEFAULT_SIGNED_URL_EXPIRY.to_string())]
        expires: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SwapsCommand {
    /// List swaps for a CID on the given or configured gateway
    #[command(visible_alias = "l")]
    List {
        cid: String,
        /// Gateway domain; defaults to the configured gateway
        domain: Option<String>,
    },
    /// Add a swap for a CID
    #[command(visible_alias = "a")]
    Add { cid: String, swap_cid: String },
    /// Remove a swap for a CID
    #[command(visible_alias = "d")]
    Delete { cid: String },
}
