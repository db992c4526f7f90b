use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::auth::{ApiKey, ServerState};
use server::routes;
use service::review::repository::mock::MockReviewRepository;
use service::review::ReviewService;

const API_KEY: &str = "test-api-key";

struct TestApp {
    base_url: String,
}

/// Start the real router over the in-memory repository on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState {
        reviews: Arc::new(ReviewService::new(Arc::new(MockReviewRepository::default()))),
        api_key: Arc::new(ApiKey(API_KEY.into())),
    };

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn bearer() -> String {
    format!("Bearer {}", API_KEY)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_requests_without_bearer_are_unauthorized() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // no header
    let res = c.get(format!("{}/api/reviews", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "Unauthorized.");

    // wrong key
    let res = c
        .post(format!("{}/api/reviews", app.base_url))
        .header("Authorization", "Bearer wrong-key")
        .json(&json!({"name": "A", "description": "B"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // bare key without the Bearer prefix still matches byte-for-byte
    let res = c
        .get(format!("{}/api/reviews", app.base_url))
        .header("Authorization", API_KEY)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_review_crud_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // create
    let res = c
        .post(format!("{}/api/reviews", app.base_url))
        .header("Authorization", bearer())
        .json(&json!({"name": "A", "description": "B"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let id = body["data"]["id"].as_i64().expect("id");
    assert!(id > 0);

    // view
    let res = c
        .get(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["review"]["name"], "A");
    assert_eq!(body["data"]["review"]["description"], "B");

    // partial update leaves the other field alone
    let res = c
        .put(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .json(&json!({"description": "C"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);

    let res = c
        .get(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["review"]["name"], "A");
    assert_eq!(body["data"]["review"]["description"], "C");

    // delete
    let res = c
        .delete(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);

    // gone afterwards
    let res = c
        .get(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Review not found");

    let res = c
        .delete(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_validation_maps_to_422() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // create without description
    let res = c
        .post(format!("{}/api/reviews", app.base_url))
        .header("Authorization", bearer())
        .json(&json!({"name": "A"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    // update with both fields empty, against an existing row
    let res = c
        .post(format!("{}/api/reviews", app.base_url))
        .header("Authorization", bearer())
        .json(&json!({"name": "A", "description": "B"}))
        .send()
        .await?;
    let id = res.json::<serde_json::Value>().await?["data"]["id"].as_i64().unwrap();

    let res = c
        .put(format!("{}/api/reviews/{}", app.base_url, id))
        .header("Authorization", bearer())
        .json(&json!({"name": "", "description": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Unprocessable entity");
    Ok(())
}

#[tokio::test]
async fn e2e_index_pagination_math() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for i in 0..5 {
        let res = c
            .post(format!("{}/api/reviews", app.base_url))
            .header("Authorization", bearer())
            .json(&json!({"name": format!("review {i}"), "description": "d"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c
        .get(format!("{}/api/reviews?page=2&per_page=2", app.base_url))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let data = &body["data"];
    assert_eq!(data["total"], 5);
    assert_eq!(data["page"], 2);
    assert_eq!(data["pages"], 3);
    assert_eq!(data["per_page"], 2);
    assert_eq!(data["reviews"].as_array().unwrap().len(), 2);

    // defaults: page 1, per_page 100
    let res = c
        .get(format!("{}/api/reviews", app.base_url))
        .header("Authorization", bearer())
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["per_page"], 100);
    assert_eq!(body["data"]["pages"], 1);
    assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 5);

    // zero inputs are clamped, and the clamped values are what gets echoed
    let res = c
        .get(format!("{}/api/reviews?page=0&per_page=0", app.base_url))
        .header("Authorization", bearer())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["per_page"], 1);
    assert_eq!(body["data"]["pages"], 5);
    assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 1);
    Ok(())
}
