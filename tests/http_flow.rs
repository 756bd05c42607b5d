//! End-to-end tests of the HTTP shell over the intake pipeline.

use std::sync::Arc;

use axum::http::StatusCode;
use phishdrill::capture::CaptureStore;
use phishdrill::AppConfig;

mod common;

fn temp_store(dir: &tempfile::TempDir) -> Arc<CaptureStore> {
    Arc::new(CaptureStore::open(dir.path().join("capture.log")).unwrap())
}

#[tokio::test]
async fn index_redirects_to_login_form() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::spawn_server(AppConfig::default(), temp_store(&dir)).await;
    let client = common::client();

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/login");

    let res = client
        .get(format!("http://{}/login", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("PhotoShare"));
    assert!(body.contains("security-awareness training"));

    shutdown.trigger();
}

#[tokio::test]
async fn accepted_submission_redirects_and_is_captured() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);
    let (addr, shutdown) = common::spawn_server(AppConfig::default(), store.clone()).await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/login", addr))
        .form(&[
            ("username", "alice"),
            ("password", "secret1"),
            ("remember", "1"),
        ])
        .header("user-agent", "Mozilla/5.0 (lab)")
        .header("accept-language", "en-US")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/thanks");

    let res = client
        .get(format!("http://{}/thanks", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("phishing simulation"));

    let records = store.read_records().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.form.username, "alice");
    assert_eq!(record.form.password, "secret1");
    assert!(record.form.remember);
    assert_eq!(record.client_id, "127.0.0.1");
    assert_eq!(record.user_agent, "Mozilla/5.0 (lab)");
    assert_eq!(record.accept_language, "en-US");
    assert_eq!(record.method, "POST");
    assert_eq!(record.path, "/login");
    assert!(record.remote_port > 0);
    assert!(record.headers.contains_key("host"));

    shutdown.trigger();
}

#[tokio::test]
async fn invalid_submission_rerenders_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);
    let (addr, shutdown) = common::spawn_server(AppConfig::default(), store.clone()).await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/login", addr))
        .form(&[("username", "ab"), ("password", "secret1")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .text()
        .await
        .unwrap()
        .contains("Username must be between 3 and 32 characters."));

    // Nothing persisted for the failed attempt.
    assert!(store.read_records().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn over_limit_submissions_get_429() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);
    let mut config = AppConfig::default();
    config.rate_limit.max_requests = 3;
    let (addr, shutdown) = common::spawn_server(config, store.clone()).await;
    let client = common::client();

    for _ in 0..3 {
        let res = client
            .post(format!("http://{}/login", addr))
            .form(&[("username", "alice"), ("password", "secret1")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    let res = client
        .post(format!("http://{}/login", addr))
        .form(&[("username", "alice"), ("password", "secret1")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.text().await.unwrap().contains("Too many attempts"));

    assert_eq!(store.read_records().unwrap().len(), 3);

    shutdown.trigger();
}

#[tokio::test]
async fn forwarded_header_becomes_the_recorded_identity() {
    let dir = tempfile::tempdir().unwrap();
    let store = temp_store(&dir);
    let (addr, shutdown) = common::spawn_server(AppConfig::default(), store.clone()).await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/login", addr))
        .form(&[("username", "alice"), ("password", "secret1")])
        .header("x-forwarded-for", "10.0.0.5, 172.16.0.1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let records = store.read_records().unwrap();
    assert_eq!(records[0].client_id, "10.0.0.5");

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_paths_render_the_404_page() {
    let dir = tempfile::tempdir().unwrap();
    let (addr, shutdown) = common::spawn_server(AppConfig::default(), temp_store(&dir)).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/admin", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().contains("404"));

    shutdown.trigger();
}
