// Wire types for the Pinata v3 API. Responses wrap their payload in a
// `{ "data": ... }` envelope unless noted otherwise.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

/// Result of a successful `POST /v3/files`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub id: String,
    pub name: String,
    pub cid: String,
    pub size: u64,
    pub number_of_files: u64,
    pub mime_type: String,
    pub user_id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub id: String,
    pub name: Option<String>,
    pub cid: String,
    pub size: u64,
    pub number_of_files: u64,
    pub mime_type: String,
    #[serde(default)]
    pub group_id: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileList {
    pub files: Vec<FileItem>,
    #[serde(default)]
    pub next_page_token: String,
}

#[derive(Serialize, Debug)]
pub struct FileUpdateBody<'a> {
    pub name: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub is_public: bool,
    pub name: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupList {
    pub groups: Vec<Group>,
    #[serde(default)]
    pub next_page_token: String,
}

#[derive(Serialize, Debug)]
pub struct GroupBody<'a> {
    pub name: &'a str,
    pub is_public: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GatewayList {
    pub rows: Vec<Gateway>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Gateway {
    pub domain: String,
}

#[derive(Serialize, Debug)]
pub struct SignedUrlBody {
    pub url: String,
    pub expires: u64,
    pub date: i64,
    pub method: &'static str,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    pub mapped_cid: String,
    pub created_at: String,
}

#[derive(Serialize, Debug)]
pub struct SwapBody<'a> {
    pub swap_cid: &'a str,
}

/// `GET /v3/pinata/keys` answers without an envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeyList {
    pub keys: Vec<ApiKey>,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key: String,
    pub revoked: bool,
    #[serde(default)]
    pub max_uses: Option<u64>,
    #[serde(default)]
    pub uses: Option<u64>,
    #[serde(default)]
    pub scopes: Value,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `POST /v3/pinata/keys` answers without an envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedKey {
    #[serde(rename = "JWT")]
    pub jwt: String,
    pub pinata_api_key: String,
    pub pinata_api_secret: String,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyBody {
    pub key_name: String,
    pub permissions: Permissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u64>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Endpoints>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub data: DataEndpoints,
    pub pinning: PinningEndpoints,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataEndpoints {
    pub pin_list: bool,
    pub user_pinned_data_total: bool,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct PinningEndpoints {
    #[serde(rename = "hashMetadata")]
    pub hash_metadata: bool,
    #[serde(rename = "hashPinPolicy")]
    pub hash_pin_policy: bool,
    #[serde(rename = "pinByHash")]
    pub pin_by_hash: bool,
    #[serde(rename = "pinFileToIPFS")]
    pub pin_file_to_ipfs: bool,
    #[serde(rename = "pinJSONToIPFS")]
    pub pin_json_to_ipfs: bool,
    #[serde(rename = "pinJobs")]
    pub pin_jobs: bool,
    #[serde(rename = "unpin")]
    pub unpin: bool,
    #[serde(rename = "userPinPolicy")]
    pub user_pin_policy: bool,
}
