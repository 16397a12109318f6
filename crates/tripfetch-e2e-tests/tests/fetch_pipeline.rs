use predicates::prelude::*;
use tripfetch_e2e_tests::{TEST_FILE, fetch_params, read_sidecar, setup_data_dir};
use tripfetch_lib::cli::run_fetch;
use tripfetch_lib::error::TripFetchError;

const BODY: &[u8] = b"parquet-bytes-standing-in-for-a-month-of-trips";

#[tokio::test]
async fn test_fresh_download_writes_data_and_sidecar() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let mut server = mockito::Server::new_async().await;
    let get = server
        .mock("GET", format!("/{TEST_FILE}").as_str())
        .with_status(200)
        .with_header("etag", "\"abc123\"")
        .with_body(BODY)
        .expect(1)
        .create_async()
        .await;

    let params = fetch_params(&server.url(), data_dir.path(), false);
    let dest = run_fetch(params).await.expect("Fetch should succeed");

    get.assert_async().await;
    assert_eq!(std::fs::read(&dest).unwrap(), BODY);

    let meta = read_sidecar(&dest).expect("Sidecar should exist and parse");
    assert_eq!(meta.size, BODY.len() as u64);
    assert_eq!(meta.etag, "abc123", "ETag quotes should be stripped");
    assert!(meta.url.ends_with(TEST_FILE));
    assert!(meta.downloaded_at.ends_with('Z'));

    let tmp = data_dir.path().join(format!("{TEST_FILE}.tmp"));
    assert!(!tmp.exists(), "No temporary file should remain");
}

#[tokio::test]
async fn test_second_invocation_skips_matching_file() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let mut server = mockito::Server::new_async().await;
    let head = server
        .mock("HEAD", format!("/{TEST_FILE}").as_str())
        .with_header("content-length", &BODY.len().to_string())
        .expect(2)
        .create_async()
        .await;
    let get = server
        .mock("GET", format!("/{TEST_FILE}").as_str())
        .with_status(200)
        .with_body(BODY)
        .expect(1)
        .create_async()
        .await;

    let first = run_fetch(fetch_params(&server.url(), data_dir.path(), false))
        .await
        .expect("First fetch should succeed");
    let second = run_fetch(fetch_params(&server.url(), data_dir.path(), false))
        .await
        .expect("Second fetch should succeed");

    assert_eq!(first, second, "Both runs should report the same path");
    head.assert_async().await;
    // Exactly one body transfer across both runs.
    get.assert_async().await;
}

#[tokio::test]
async fn test_existing_file_skips_when_remote_size_unknown() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let dest = data_dir.path().join(TEST_FILE);
    std::fs::write(&dest, b"previously downloaded").unwrap();

    // Unreachable server: the probe downgrades to unknown and the local
    // copy is kept.
    let params = fetch_params("http://127.0.0.1:1", data_dir.path(), false);

    let reported = run_fetch(params).await.expect("Skip path should succeed");

    assert_eq!(reported, dest);
    assert_eq!(std::fs::read(&dest).unwrap(), b"previously downloaded");
}

#[tokio::test]
async fn test_replace_forces_redownload() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let dest = data_dir.path().join(TEST_FILE);
    std::fs::write(&dest, b"old").unwrap();

    let mut server = mockito::Server::new_async().await;
    let _head = server
        .mock("HEAD", format!("/{TEST_FILE}").as_str())
        .with_header("content-length", "3")
        .create_async()
        .await;
    let get = server
        .mock("GET", format!("/{TEST_FILE}").as_str())
        .with_status(200)
        .with_body(BODY)
        .expect(1)
        .create_async()
        .await;

    run_fetch(fetch_params(&server.url(), data_dir.path(), true))
        .await
        .expect("Replace fetch should succeed");

    get.assert_async().await;
    assert_eq!(std::fs::read(&dest).unwrap(), BODY);
    assert_eq!(read_sidecar(&dest).unwrap().size, BODY.len() as u64);
}

#[tokio::test]
async fn test_size_mismatch_triggers_redownload() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let dest = data_dir.path().join(TEST_FILE);
    std::fs::write(&dest, b"stale").unwrap();

    let mut server = mockito::Server::new_async().await;
    let _head = server
        .mock("HEAD", format!("/{TEST_FILE}").as_str())
        .with_header("content-length", &BODY.len().to_string())
        .create_async()
        .await;
    let get = server
        .mock("GET", format!("/{TEST_FILE}").as_str())
        .with_status(200)
        .with_body(BODY)
        .expect(1)
        .create_async()
        .await;

    run_fetch(fetch_params(&server.url(), data_dir.path(), false))
        .await
        .expect("Mismatch fetch should succeed");

    get.assert_async().await;
    assert_eq!(std::fs::read(&dest).unwrap(), BODY);
}

#[tokio::test]
async fn test_http_error_leaves_destination_untouched() {
    init_tracing();

    let data_dir = setup_data_dir().expect("Failed to create data dir");
    let mut server = mockito::Server::new_async().await;
    let _get = server
        .mock("GET", format!("/{TEST_FILE}").as_str())
        .with_status(404)
        .create_async()
        .await;

    let err = run_fetch(fetch_params(&server.url(), data_dir.path(), false))
        .await
        .expect_err("A 404 must fail the fetch");

    assert!(matches!(err, TripFetchError::Http(_)));
    assert!(predicate::str::contains("HTTP request error").eval(&err.to_string()));

    let dest = data_dir.path().join(TEST_FILE);
    assert!(!dest.exists(), "Destination must not be created");
    assert!(
        !data_dir.path().join(format!("{TEST_FILE}.tmp")).exists(),
        "No temporary file should remain"
    );
    assert!(
        !data_dir
            .path()
            .join(format!("{TEST_FILE}.meta.json"))
            .exists(),
        "No sidecar should be written"
    );
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("tripfetch=debug,tripfetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
