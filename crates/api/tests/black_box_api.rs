use boxfit_catalog::Catalog;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = boxfit_api::app::build_app(Catalog::builtin());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn landing_page_is_served() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(&srv.base_url).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn search_returns_matching_products_with_full_shape() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/search?q=j-31", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["codigo"], "J-315");
    assert_eq!(hits[0]["nome"], "Jacuzzi J-315");
    assert_eq!(hits[0]["comprimento"].as_f64(), Some(213.0));
    assert_eq!(hits[0]["largura"].as_f64(), Some(213.0));
    assert_eq!(hits[0]["altura"].as_f64(), Some(91.0));
    assert_eq!(hits[0]["peso"].as_f64(), Some(340.0));
}

#[tokio::test]
async fn search_matches_names_case_insensitively() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/search?q=JACUZZI", srv.base_url))
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn search_without_query_returns_empty_array() {
    let srv = TestServer::spawn().await;

    for url in [
        format!("{}/api/search", srv.base_url),
        format!("{}/api/search?q=", srv.base_url),
    ] {
        let res = reqwest::get(url).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn calculate_single_j315() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/calculate", srv.base_url))
        .json(&json!({ "selectedProducts": ["J-315"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    // 213 × 213 × 91 cm = 4,128,579 cm³ → 4.129 m³ at 3 decimals.
    assert_eq!(body["totalVolume"], "4.129");
    assert_eq!(body["totalWeight"].as_f64(), Some(340.0));

    let names: Vec<&str> = body["suitableBoxes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Caixa Grande"]);
}

#[tokio::test]
async fn calculate_empty_selection_reports_all_tiers() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/calculate", srv.base_url))
        .json(&json!({ "selectedProducts": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalVolume"], "0.000");
    assert_eq!(body["totalWeight"].as_f64(), Some(0.0));
    assert_eq!(body["suitableBoxes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn calculate_skips_unknown_codes() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/calculate", srv.base_url))
        .json(&json!({ "selectedProducts": ["NOPE", "J-315", "J-000"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalVolume"], "4.129");
    assert_eq!(body["totalWeight"].as_f64(), Some(340.0));
}

#[tokio::test]
async fn calculate_counts_duplicates_twice() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/calculate", srv.base_url))
        .json(&json!({ "selectedProducts": ["J-315", "J-315"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalWeight"].as_f64(), Some(680.0));
}

#[tokio::test]
async fn calculate_rejects_non_array_selection() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for payload in [
        json!({ "selectedProducts": "J-315" }),
        json!({ "selectedProducts": 7 }),
        json!({}),
    ] {
        let res = client
            .post(format!("{}/api/calculate", srv.base_url))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }
}

#[tokio::test]
async fn calculate_rejects_non_json_body() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/calculate", srv.base_url))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid input" }));
}
