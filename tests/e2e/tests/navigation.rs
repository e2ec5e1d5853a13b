use e2e::{backend::Backend, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let backend = Backend::start("unused", 204).await;
    let server = TestServer::start(&backend.api_url())
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Welcome") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_public_config_reports_api_url() {
    let backend = Backend::start("unused", 204).await;
    let server = TestServer::start(&backend.api_url())
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(format!("{}/api/config", server.url()))
        .await
        .expect("Failed to fetch config")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains(&backend.api_url()), "config body: {body}");
}
