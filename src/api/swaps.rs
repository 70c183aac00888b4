// Hot swaps: serve one CID in place of another through a gateway.

use super::types::{Swap, SwapBody};
use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Swap history of `cid` as seen through `domain`.
    pub fn swap_history(&self, cid: &str, domain: &str) -> Result<Vec<Swap>> {
        let url = self.api_url(&format!("/v3/files/swap/{}", cid));
        let req = self.client.get(&url).query(&[("domain", domain)]);
        self.execute_data(&url, req)
    }

    /// Serve `swap_cid` whenever `cid` is requested through a gateway.
    pub fn add_swap(&self, cid: &str, swap_cid: &str) -> Result<Swap> {
        let url = self.api_url(&format!("/v3/files/swap/{}", cid));
        let req = self.client.put(&url).json(&SwapBody { swap_cid });
        self.execute_data(&url, req)
    }

    pub fn remove_swap(&self, cid: &str) -> Result<()> {
        let url = self.api_url(&format!("/v3/files/swap/{}", cid));
        let req = self.client.delete(&url);
        self.execute(&url, req).map(|_| ())
    }
}
