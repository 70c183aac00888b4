// API key management. Unlike the file endpoints these answer without a
// `data` envelope, so the whole body is decoded.

use super::types::{CreateKeyBody, CreatedKey, Endpoints, KeyList, Permissions};
use super::{push_flag, push_param, ApiClient};
use crate::error::{Error, Result};

/// Endpoint names accepted by `keys create --endpoints`.
pub const ENDPOINT_NAMES: [&str; 10] = [
    "pinList",
    "userPinnedDataTotal",
    "hashMetadata",
    "hashPinPolicy",
    "pinByHash",
    "pinFileToIPFS",
    "pinJSONToIPFS",
    "pinJobs",
    "unpin",
    "userPinPolicy",
];

#[derive(Debug, Default, Clone)]
pub struct KeyQuery {
    pub name: Option<String>,
    pub revoked: bool,
    pub limited_use: bool,
    pub exhausted: bool,
    pub offset: Option<String>,
}

impl KeyQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "name", self.name.as_deref());
        push_flag(&mut query, "revoked", self.revoked);
        push_flag(&mut query, "limitedUse", self.limited_use);
        push_flag(&mut query, "exhausted", self.exhausted);
        push_param(&mut query, "offset", self.offset.as_deref());
        query
    }
}

/// Build the body for `POST /v3/pinata/keys`.
///
/// Endpoint scopes only apply to non-admin keys; `uses == 0` means unlimited.
pub fn key_request<S: AsRef<str>>(
    name: &str,
    admin: bool,
    uses: u64,
    endpoints: &[S],
) -> Result<CreateKeyBody> {
    let mut body = CreateKeyBody {
        key_name: name.to_string(),
        permissions: Permissions {
            admin,
            endpoints: None,
        },
        max_uses: (uses > 0).then_some(uses),
    };

    if admin || endpoints.is_empty() {
        return Ok(body);
    }

    let mut scopes = Endpoints::default();
    for endpoint in endpoints {
        let flag = match endpoint.as_ref() {
            "pinList" => &mut scopes.data.pin_list,
            "userPinnedDataTotal" => &mut scopes.data.user_pinned_data_total,
            "hashMetadata" => &mut scopes.pinning.hash_metadata,
            "hashPinPolicy" => &mut scopes.pinning.hash_pin_policy,
            "pinByHash" => &mut scopes.pinning.pin_by_hash,
            "pinFileToIPFS" => &mut scopes.pinning.pin_file_to_ipfs,
            "pinJSONToIPFS" => &mut scopes.pinning.pin_json_to_ipfs,
            "pinJobs" => &mut scopes.pinning.pin_jobs,
            "unpin" => &mut scopes.pinning.unpin,
            "userPinPolicy" => &mut scopes.pinning.user_pin_policy,
            other => {
                return Err(Error::Input(format!(
                    "unknown endpoint '{}', expected one of: {}",
                    other,
                    ENDPOINT_NAMES.join(", ")
                )))
            }
        };
        *flag = true;
    }
    body.permissions.endpoints = Some(scopes);
    Ok(body)
}

impl ApiClient {
    pub fn list_keys(&self, filter: &KeyQuery) -> Result<KeyList> {
        let url = self.api_url("/v3/pinata/keys");
        let req = self.client.get(&url).query(&filter.to_query());
        self.execute_json(&url, req)
    }

    pub fn create_key(&self, body: &CreateKeyBody) -> Result<CreatedKey> {
        let url = self.api_url("/v3/pinata/keys");
        let req = self.client.post(&url).json(body);
        self.execute_json(&url, req)
    }

    pub fn revoke_key(&self, key: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/pinata/keys/{}", key));
        let req = self.client.put(&url);
        self.execute(&url, req).map(|_| ())
    }
}
