use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};

use retailiq_ai::{
    AiError, GeminiClient, GeminiConfig, GenerativeTextClient, StrategyAdvisor, StrategyKind,
    StrategyRequestor, fallback_strategies,
};
use retailiq_products::{Category, Product};

const STRATEGIES: &str = r#"[
    {"type":"FLASH_SALE","title":"Happy hour","description":"20% off 5-7pm"},
    {"type":"DISCOUNT","title":"Donate","description":"Food bank pickup"},
    {"type":"BUNDLE","title":"Snack pack","description":"With crisps"},
    {"type":"LOYALTY","title":"Stamp card","description":"6th free"}
]"#;

/// What the stub saw: (api key header, request body).
type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Behaviour is picked by the model name in the path.
async fn generate(
    Extension(seen): Extension<Seen>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().unwrap().push((key, body));

    match call.split(':').next().unwrap_or_default() {
        "limited" => (StatusCode::TOO_MANY_REQUESTS, "quota exhausted").into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "prose" => Json(json!({
            "candidates": [{"content": {"parts": [{"text": "Try a discount!"}]}}]
        }))
        .into_response(),
        "silent" => Json(json!({ "candidates": [] })).into_response(),
        _ => Json(json!({
            "candidates": [{"content": {"parts": [{"text": STRATEGIES}]}}]
        }))
        .into_response(),
    }
}

struct StubServer {
    base_url: String,
    seen: Seen,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn() -> Self {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route("/v1beta/models/:call", post(generate))
            .layer(Extension(seen.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            seen,
            handle,
        }
    }

    fn client(&self, model: &str) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: "test-key".to_string(),
            model: model.to_string(),
            base_url: format!("{}/", self.base_url),
        })
        .unwrap()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn product() -> Product {
    Product {
        id: "7".parse().unwrap(),
        name: "Roasted Coffee Beans".to_string(),
        category: Category::Beverages,
        cost_price: 12.0,
        selling_price: 28.0,
        expiry_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        current_stock: 30,
        avg_daily_sales: 5.0,
        last_updated: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn successful_exchange_yields_model_strategies() {
    let srv = StubServer::spawn().await;
    let advisor = StrategyAdvisor::new(srv.client("ok"));

    let strategies = advisor.request(&product(), "New Inventory Entry").await;
    assert_eq!(strategies.len(), 4);
    assert_eq!(strategies[0].kind, StrategyKind::FlashSale);

    let seen = srv.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (key, body) = &seen[0];
    assert_eq!(key.as_deref(), Some("test-key"));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Roasted Coffee Beans"));
    assert!(prompt.contains("Current Situation: New Inventory Entry"));
}

#[tokio::test]
async fn error_status_is_reported_as_upstream() {
    let srv = StubServer::spawn().await;
    let err = srv.client("limited").generate_json("x").await.unwrap_err();
    match err {
        AiError::Upstream { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exhausted");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_reported_as_invalid_response() {
    let srv = StubServer::spawn().await;
    let err = srv.client("garbage").generate_json("x").await.unwrap_err();
    assert!(matches!(err, AiError::InvalidResponse(_)));
}

#[tokio::test]
async fn failed_exchanges_degrade_to_fallback() {
    let srv = StubServer::spawn().await;
    for model in ["limited", "garbage", "prose"] {
        let advisor = StrategyAdvisor::new(srv.client(model));
        assert_eq!(
            advisor.request(&product(), "Specific Inventory Review").await,
            fallback_strategies(),
            "model {model}"
        );
    }
}

#[tokio::test]
async fn empty_candidates_yield_no_strategies() {
    let srv = StubServer::spawn().await;
    assert_eq!(srv.client("silent").generate_json("x").await.unwrap(), None);

    let advisor = StrategyAdvisor::new(srv.client("silent"));
    assert!(advisor.request(&product(), "x").await.is_empty());
}

#[tokio::test]
async fn unreachable_server_degrades_to_fallback() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new(GeminiConfig {
        api_key: "k".to_string(),
        model: "ok".to_string(),
        base_url: format!("http://{addr}"),
    })
    .unwrap();
    assert!(matches!(client.generate_json("x").await, Err(AiError::Transport(_))));

    let advisor = StrategyAdvisor::new(client);
    assert_eq!(advisor.request(&product(), "x").await, fallback_strategies());
}
