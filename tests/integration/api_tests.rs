use std::collections::BTreeMap;

use pinata::api::files::FileQuery;
use pinata::api::groups::GroupQuery;
use pinata::api::keys::key_request;
use pinata::api;
use pinata::Error;
use serde_json::json;
use test_log::test;

use super::test_utilities::*;

const FILE: &str = r#"{"id":"f-1","name":"cat.png","cid":"bafy-cat","size":2048,
    "number_of_files":1,"mime_type":"image/png","group_id":null,
    "created_at":"2024-08-28T14:29:50.201Z"}"#;

#[test]
fn test_list_files_sends_only_set_filters() {
    let server = TestServer::respond(
        200,
        &format!(r#"{{"data":{{"files":[{}],"next_page_token":"next"}}}}"#, FILE),
    );
    let (_creds, client) = test_client(&server.url);

    let mut keyvalues = BTreeMap::new();
    keyvalues.insert("team".to_string(), "web".to_string());
    let filter = FileQuery {
        name: Some("cat".into()),
        limit: Some("5".into()),
        keyvalues,
        ..FileQuery::default()
    };
    let list = client.list_files(&filter).unwrap();
    let request = server.request();

    assert_eq!(request.method, "GET");
    assert_eq!(
        request.path,
        "/v3/files?name=cat&limit=5&keyvalues%5Bteam%5D=web"
    );
    assert_eq!(request.header("authorization"), Some("Bearer test-jwt"));
    assert_eq!(list.files.len(), 1);
    assert_eq!(list.files[0].cid, "bafy-cat");
    assert_eq!(list.next_page_token, "next");
}

#[test]
fn test_update_file_puts_new_name() {
    let server = TestServer::respond(200, &format!(r#"{{"data":{}}}"#, FILE));
    let (_creds, client) = test_client(&server.url);

    let file = client.update_file("f-1", "cat.png").unwrap();
    let request = server.request();

    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/v3/files/f-1");
    assert_eq!(request.json(), json!({"name": "cat.png"}));
    assert_eq!(file.id, "f-1");
}

#[test]
fn test_delete_missing_group_is_server_error() {
    let server = TestServer::respond(404, r#"{"error":"not found"}"#);
    let (_creds, client) = test_client(&server.url);

    let err = client.delete_group("g-404").unwrap_err();
    let request = server.request();

    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/v3/files/groups/g-404");
    assert!(matches!(err, Error::Server { status: 404, .. }), "got {:?}", err);
}

#[test]
fn test_create_group_posts_body() {
    let server = TestServer::respond(
        200,
        r#"{"data":{"id":"g-1","is_public":true,"name":"pics","created_at":"2024-01-01"}}"#,
    );
    let (_creds, client) = test_client(&server.url);

    let group = client.create_group("pics", true).unwrap();
    let request = server.request();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v3/files/groups");
    assert_eq!(request.json(), json!({"name": "pics", "is_public": true}));
    assert!(group.is_public);
}

#[test]
fn test_list_groups_defaults_to_ten() {
    let server = TestServer::respond(200, r#"{"data":{"groups":[],"next_page_token":""}}"#);
    let (_creds, client) = test_client(&server.url);

    let groups = client.list_groups(&GroupQuery::default()).unwrap();
    let request = server.request();

    assert_eq!(request.path, "/v3/files/groups?limit=10");
    assert!(groups.groups.is_empty());
}

#[test]
fn test_create_key_decodes_unwrapped_body() {
    let server = TestServer::respond(
        200,
        r#"{"JWT":"eyJ","pinata_api_key":"k","pinata_api_secret":"s"}"#,
    );
    let (_creds, client) = test_client(&server.url);

    let body = key_request("ci", false, 0, &["pinFileToIPFS"]).unwrap();
    let created = client.create_key(&body).unwrap();
    let request = server.request();

    assert_eq!(request.path, "/v3/pinata/keys");
    let sent = request.json();
    assert_eq!(sent["keyName"], "ci");
    assert!(sent.get("maxUses").is_none());
    assert_eq!(sent["permissions"]["endpoints"]["pinning"]["pinFileToIPFS"], true);
    assert_eq!(created.jwt, "eyJ");
}

#[test]
fn test_sign_url_targets_configured_gateway() {
    let server = TestServer::respond(
        200,
        r#"{"data":"https://test-gw.mypinata.cloud/files/bafy?X-Algorithm=v1&X-Signature=abc"}"#,
    );
    let (_creds, client) = test_client(&server.url);

    let gateway = client.config().credentials.load_gateway().unwrap();
    let url = client.sign_url(&gateway, "bafy", 30).unwrap();
    let request = server.request();

    let sent = request.json();
    assert_eq!(sent["url"], "https://test-gw.mypinata.cloud/files/bafy");
    assert_eq!(sent["expires"], 30);
    assert_eq!(sent["method"], "GET");
    assert!(sent["date"].as_i64().unwrap() > 0);
    assert!(url.ends_with("X-Signature=abc"));
}

#[test]
fn test_gateway_domains_get_suffix() {
    let server = TestServer::respond(
        200,
        r#"{"data":{"rows":[{"domain":"alpha","id":"1"},{"domain":"beta","id":"2"}]}}"#,
    );
    let (_creds, client) = test_client(&server.url);

    let domains = client.list_gateway_domains().unwrap();
    server.request();
    assert_eq!(domains, ["alpha.mypinata.cloud", "beta.mypinata.cloud"]);
}

#[test]
fn test_swap_history_passes_domain() {
    let server = TestServer::respond(
        200,
        r#"{"data":[{"mapped_cid":"bafy-new","created_at":"2024-09-01"}]}"#,
    );
    let (_creds, client) = test_client(&server.url);

    let swaps = client.swap_history("bafy-old", "test-gw.mypinata.cloud").unwrap();
    let request = server.request();

    assert_eq!(
        request.path,
        "/v3/files/swap/bafy-old?domain=test-gw.mypinata.cloud"
    );
    assert_eq!(swaps[0].mapped_cid, "bafy-new");
}

#[test]
fn test_authentication_check_rejects_bad_token() {
    let server = TestServer::respond(401, "");
    let (_creds, config) = test_config(&server.url);

    let err = api::test_authentication(&config, "bad").unwrap_err();
    let request = server.request();

    assert_eq!(request.path, "/data/testAuthentication");
    assert_eq!(request.header("authorization"), Some("Bearer bad"));
    assert!(matches!(err, Error::Auth { status: 401 }));
}

#[test]
fn test_authentication_check_accepts_good_token() {
    let server = TestServer::respond(200, r#"{"message":"Congratulations!"}"#);
    let (_creds, config) = test_config(&server.url);

    api::test_authentication(&config, TEST_JWT).unwrap();
    server.request();
}
