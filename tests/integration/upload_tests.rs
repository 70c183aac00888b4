use std::sync::{Arc, Mutex};
use std::time::Duration;

use pinata::config::{Config, CredentialStore};
use pinata::upload::{self, ProgressObserver, UploadOptions};
use pinata::{api::ApiClient, Error};
use test_log::test;

use super::test_utilities::*;

#[derive(Default)]
struct Recorded {
    steps: Vec<u64>,
    finished: usize,
}

#[derive(Clone, Default)]
struct SharedRecorder(Arc<Mutex<Recorded>>);

impl ProgressObserver for SharedRecorder {
    fn advance(&mut self, bytes: u64) {
        self.0.lock().unwrap().steps.push(bytes);
    }

    fn finish(&mut self) {
        self.0.lock().unwrap().finished += 1;
    }
}

#[test]
fn test_single_file_upload_uses_base_name() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"0123456789");

    let server = TestServer::respond(200, UPLOAD_OK);
    let (_creds, client) = test_client(&server.url);
    let outcome = upload::upload(&client, &file, &UploadOptions::default()).unwrap();
    let request = server.request();

    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v3/files");
    assert_eq!(request.header("authorization"), Some("Bearer test-jwt"));
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data; boundary="));

    let parts = parse_form(&request.body, &request.boundary());
    assert_eq!(fields(&parts, "name"), vec![b"a.txt".as_slice()]);
    let files: Vec<_> = parts.iter().filter(|(name, _, _)| name == "file").collect();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].1.as_deref(), Some("a.txt"));
    assert_eq!(files[0].2, b"0123456789");
    assert!(fields(&parts, "group_id").is_empty());

    assert_eq!(outcome.result.name, "a.txt");
    assert_eq!(outcome.result.size, 10);
    assert!(outcome.rendered.contains("\"cid\": \"bafkreih5"));
}

#[test]
fn test_directory_upload_preserves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write_file(&docs.join("x.txt"), b"x contents");
    write_file(&docs.join("sub/y.txt"), b"y contents");

    let server = TestServer::respond(200, UPLOAD_OK);
    let (_creds, client) = test_client(&server.url);
    upload::upload(&client, &docs, &UploadOptions::default()).unwrap();
    let request = server.request();

    let parts = parse_form(&request.body, &request.boundary());
    let files: Vec<_> = parts
        .iter()
        .filter(|(name, _, _)| name == "file")
        .map(|(_, filename, data)| (filename.clone().unwrap(), data.clone()))
        .collect();
    assert_eq!(
        files,
        vec![
            ("docs/sub/y.txt".to_string(), b"y contents".to_vec()),
            ("docs/x.txt".to_string(), b"x contents".to_vec()),
        ]
    );
    assert_eq!(fields(&parts, "name"), vec![b"docs".as_slice()]);
}

#[test]
fn test_group_and_name_override_are_sent_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let server = TestServer::respond(200, UPLOAD_OK);
    let (_creds, client) = test_client(&server.url);
    let options = UploadOptions {
        name: Some("Renamed".to_string()),
        group_id: Some("group-123".to_string()),
    };
    upload::upload(&client, &file, &options).unwrap();
    let request = server.request();

    let parts = parse_form(&request.body, &request.boundary());
    assert_eq!(fields(&parts, "group_id"), vec![b"group-123".as_slice()]);
    assert_eq!(fields(&parts, "name"), vec![b"Renamed".as_slice()]);
}

#[test]
fn test_progress_reports_whole_body_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("big.bin");
    let contents: Vec<u8> = (0..200_000u32).map(|i| (i % 253) as u8).collect();
    write_file(&file, &contents);

    let server = TestServer::respond(200, UPLOAD_OK);
    let (_creds, client) = test_client(&server.url);
    let (_, payload) = upload::prepare(&file, &UploadOptions::default()).unwrap();
    let total = payload.len();

    let recorder = SharedRecorder::default();
    upload::send(&client, payload, Some(recorder.clone())).unwrap();
    let request = server.request();

    let recorded = recorder.0.lock().unwrap();
    assert_eq!(recorded.steps.iter().sum::<u64>(), total);
    assert_eq!(recorded.finished, 1);
    assert_eq!(request.body.len() as u64, total);
    let parts = parse_form(&request.body, &request.boundary());
    assert_eq!(fields(&parts, "file"), vec![contents.as_slice()]);
}

#[test]
fn test_small_upload_finishes_observer_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"0123456789");

    let server = TestServer::respond(200, UPLOAD_OK);
    let (_creds, client) = test_client(&server.url);
    let (_, payload) = upload::prepare(&file, &UploadOptions::default()).unwrap();
    let total = payload.len();

    let recorder = SharedRecorder::default();
    upload::send(&client, payload, Some(recorder.clone())).unwrap();
    server.request();

    let recorded = recorder.0.lock().unwrap();
    assert_eq!(recorded.steps.iter().sum::<u64>(), total);
    assert_eq!(recorded.finished, 1);
}

#[test]
fn test_unauthorized_response_is_auth_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let server = TestServer::respond(401, r#"{"error":"Unauthorized"}"#);
    let (_creds, client) = test_client(&server.url);
    let err = upload::upload(&client, &file, &UploadOptions::default()).unwrap_err();
    server.request();

    assert!(matches!(err, Error::Auth { status: 401 }), "got {:?}", err);
    assert_eq!(err.status(), Some(401));
}

#[test]
fn test_server_error_keeps_status() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let server = TestServer::respond(500, "internal error");
    let (_creds, client) = test_client(&server.url);
    let err = upload::upload(&client, &file, &UploadOptions::default()).unwrap_err();
    server.request();

    assert!(
        matches!(err, Error::Server { status: 500, ref body } if body == "internal error"),
        "got {:?}",
        err
    );
}

#[test]
fn test_invalid_json_with_200_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let server = TestServer::respond(200, "<html>not json</html>");
    let (_creds, client) = test_client(&server.url);
    let err = upload::upload(&client, &file, &UploadOptions::default()).unwrap_err();
    server.request();

    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
}

#[test]
fn test_missing_path_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let (_creds, client) = test_client(&closed_url());

    let err = upload::upload(&client, &dir.path().join("nope"), &UploadOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::PathNotFound(_)), "got {:?}", err);
}

#[test]
fn test_missing_token_is_auth_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_base_url(&closed_url(), CredentialStore::new(dir.path()));

    let err = ApiClient::from_config(config).err().unwrap();
    assert!(matches!(err, Error::AuthMissing));
}

#[test]
fn test_unreachable_server_is_network_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let (_creds, client) = test_client(&closed_url());
    let err = upload::upload(&client, &file, &UploadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {:?}", err);
}

#[test]
fn test_upload_timeout_aborts_stalled_request() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    write_file(&file, b"a");

    let server = TestServer::respond_after(200, UPLOAD_OK, Duration::from_secs(3));
    let (_creds, mut config) = test_config(&server.url);
    config.upload_timeout = Some(Duration::from_millis(300));
    let client = ApiClient::from_config(config).unwrap();

    let err = upload::upload(&client, &file, &UploadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {:?}", err);
}
