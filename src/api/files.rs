// File listing and metadata requests under `/v3/files`.

use std::collections::BTreeMap;

use super::types::{FileItem, FileList, FileUpdateBody};
use super::{push_flag, push_param, ApiClient};
use crate::error::Result;

/// Filters for `GET /v3/files`. Empty fields are not sent.
#[derive(Debug, Default, Clone)]
pub struct FileQuery {
    pub name: Option<String>,
    pub cid: Option<String>,
    pub group: Option<String>,
    pub mime_type: Option<String>,
    pub limit: Option<String>,
    pub page_token: Option<String>,
    pub cid_pending: bool,
    pub keyvalues: BTreeMap<String, String>,
}

impl FileQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "name", self.name.as_deref());
        push_param(&mut query, "cid", self.cid.as_deref());
        push_param(&mut query, "group", self.group.as_deref());
        push_param(&mut query, "mimeType", self.mime_type.as_deref());
        push_param(&mut query, "limit", self.limit.as_deref());
        push_param(&mut query, "pageToken", self.page_token.as_deref());
        push_flag(&mut query, "cidPending", self.cid_pending);
        for (key, value) in &self.keyvalues {
            query.push((format!("keyvalues[{}]", key), value.clone()));
        }
        query
    }
}

/// Parse `key=value` pairs as given to `--keyvalues`. Entries without `=` are
/// ignored.
pub fn parse_keyvalues<S: AsRef<str>>(pairs: &[S]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .filter_map(|kv| kv.as_ref().split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl ApiClient {
    pub fn list_files(&self, filter: &FileQuery) -> Result<FileList> {
        let url = self.api_url("/v3/files");
        let req = self.client.get(&url).query(&filter.to_query());
        self.execute_data(&url, req)
    }

    pub fn get_file(&self, id: &str) -> Result<FileItem> {
        let url = self.api_url(&format!("/v3/files/{}", id));
        let req = self.client.get(&url);
        self.execute_data(&url, req)
    }

    pub fn update_file(&self, id: &str, name: &str) -> Result<FileItem> {
        let url = self.api_url(&format!("/v3/files/{}", id));
        let req = self.client.put(&url).json(&FileUpdateBody { name });
        self.execute_data(&url, req)
    }

    pub fn delete_file(&self, id: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/files/{}", id));
        let req = self.client.delete(&url);
        self.execute(&url, req).map(|_| ())
    }
}
