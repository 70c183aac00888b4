// Group management: groups themselves and the files they contain.

use super::types::{Group, GroupBody, GroupList};
use super::{push_flag, push_param, ApiClient};
use crate::error::Result;

pub const DEFAULT_GROUP_LIMIT: &str = "10";

/// Filters for `GET /v3/files/groups`.
#[derive(Debug, Clone)]
pub struct GroupQuery {
    pub limit: Option<String>,
    pub public_only: bool,
    pub name: Option<String>,
    pub page_token: Option<String>,
}

impl Default for GroupQuery {
    fn default() -> Self {
        GroupQuery {
            limit: Some(DEFAULT_GROUP_LIMIT.to_string()),
            public_only: false,
            name: None,
            page_token: None,
        }
    }
}

impl GroupQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "limit", self.limit.as_deref());
        push_flag(&mut query, "isPublic", self.public_only);
        push_param(&mut query, "name", self.name.as_deref());
        push_param(&mut query, "pageToken", self.page_token.as_deref());
        query
    }
}

impl ApiClient {
    pub fn create_group(&self, name: &str, is_public: bool) -> Result<Group> {
        let url = self.api_url("/v3/files/groups");
        let req = self.client.post(&url).json(&GroupBody { name, is_public });
        self.execute_data(&url, req)
    }

    pub fn list_groups(&self, filter: &GroupQuery) -> Result<GroupList> {
        let url = self.api_url("/v3/files/groups");
        let req = self.client.get(&url).query(&filter.to_query());
        self.execute_data(&url, req)
    }

    pub fn get_group(&self, id: &str) -> Result<Group> {
        let url = self.api_url(&format!("/v3/files/groups/{}", id));
        let req = self.client.get(&url);
        self.execute_data(&url, req)
    }

    pub fn update_group(&self, id: &str, name: &str, is_public: bool) -> Result<Group> {
        let url = self.api_url(&format!("/v3/files/groups/{}", id));
        let req = self.client.put(&url).json(&GroupBody { name, is_public });
        self.execute_data(&url, req)
    }

    pub fn delete_group(&self, id: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/files/groups/{}", id));
        let req = self.client.delete(&url);
        self.execute(&url, req).map(|_| ())
    }

    pub fn add_file_to_group(&self, group_id: &str, file_id: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/files/groups/{}/ids/{}", group_id, file_id));
        let req = self.client.put(&url);
        self.execute(&url, req).map(|_| ())
    }

    pub fn remove_file_from_group(&self, group_id: &str, file_id: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/files/groups/{}/ids/{}", group_id, file_id));
        let req = self.client.delete(&url);
        self.execute(&url, req).map(|_| ())
    }
}
