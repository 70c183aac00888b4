// Dedicated gateways: listing the account's domains and signing
// private file URLs against one of them.

use chrono::Utc;

use super::types::{GatewayList, SignedUrlBody};
use super::ApiClient;
use crate::error::Result;

/// Suffix Pinata appends to a gateway's subdomain.
pub const GATEWAY_SUFFIX: &str = ".mypinata.cloud";

/// Default lifetime of a signed URL, in seconds.
pub const DEFAULT_SIGNED_URL_EXPIRY: u64 = 30;

impl ApiClient {
    /// Full domains (`<name>.mypinata.cloud`) of the account's gateways.
    pub fn list_gateway_domains(&self) -> Result<Vec<String>> {
        let url = self.api_url("/v3/ipfs/gateways");
        let req = self.client.get(&url);
        let gateways: GatewayList = self.execute_data(&url, req)?;
        Ok(gateways
            .rows
            .into_iter()
            .map(|g| format!("{}{}", g.domain, GATEWAY_SUFFIX))
            .collect())
    }

    /// Ask the API to sign a GET URL for `cid` on `gateway`, valid for
    /// `expires` seconds from now.
    pub fn sign_url(&self, gateway: &str, cid: &str, expires: u64) -> Result<String> {
        let url = self.api_url("/v3/files/sign");
        let body = signed_url_body(gateway, cid, expires, Utc::now().timestamp());
        let req = self.client.post(&url).json(&body);
        self.execute_data(&url, req)
    }
}

fn signed_url_body(gateway: &str, cid: &str, expires: u64, date: i64) -> SignedUrlBody {
    SignedUrlBody {
        url: format!("https://{}/files/{}", gateway.trim_end_matches('/'), cid),
        expires,
        date,
        method: "GET",
    }
}
