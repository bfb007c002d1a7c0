//! # API Client Integration Tests
//!
//! Drives the real `ApiClient` against an axum stub of the tokenization API
//! bound to an ephemeral local port.

use admin_console::cache::{QueryClient, QueryKey};
use admin_console::core::TokenizationService;
use admin_console::services::api::{ApiClient, ApiConfig};
use admin_console::services::mutations::{execute, Mutation, MutationOutcome};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{
    BurnStockInput, CreateStockInput, MintStockInput, StockStatus, TransactionFilter,
    TransactionStatus, TransactionType, UpdateStockInput,
};
use std::sync::Arc;
use std::time::Duration;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
struct Recorded {
    method: &'static str,
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Default)]
struct Stub {
    requests: Mutex<Vec<Recorded>>,
}

impl Stub {
    fn record(&self, method: &'static str, path: String, query: Option<String>, headers: &HeaderMap, body: Option<Value>) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().push(Recorded {
            method,
            path,
            query,
            authorization,
            body,
        });
    }

    fn count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn last(&self) -> Recorded {
        self.requests.lock().last().cloned().expect("at least one request")
    }
}

const ADMIN: &str = "/api/v2/tokenization/admin";

fn stock_json(symbol: &str, status: &str) -> Value {
    json!({
        "_id": "66f1b9",
        "symbol": symbol,
        "name": "Apple Inc.",
        "tokenId": "0.0.4512",
        "totalSupply": 1000,
        "circulatingSupply": 400,
        "poolBalance": 600,
        "pricePerToken": 150.5,
        "status": status,
        "createdAt": "2024-09-22T10:00:00.000Z",
        "updatedAt": "2024-09-22T10:00:00.000Z"
    })
}

fn transaction_json(symbol: &str, tx_type: &str, amount: u64) -> Value {
    json!({
        "_id": "tx-1",
        "stockId": "66f1b9",
        "symbol": symbol,
        "type": tx_type,
        "amount": amount,
        "status": "COMPLETED",
        "hederaTxHash": "0.0.4512@1727000000.000000001",
        "createdAt": "2024-09-22T10:00:00.000Z"
    })
}

async fn stats(State(stub): State<Arc<Stub>>, headers: HeaderMap) -> Json<Value> {
    stub.record("GET", format!("{}/stats", ADMIN), None, &headers, None);
    Json(json!({
        "totalStocks": 1,
        "totalHolders": 12,
        "totalValueLocked": 60200.0,
        "totalPoolValue": 90300.0,
        "stocks": [{
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "totalSupply": 1000,
            "circulatingSupply": 400,
            "poolBalance": 600,
            "pricePerToken": 150.5,
            "status": "ACTIVE"
        }]
    }))
}

async fn transactions(State(stub): State<Arc<Stub>>, RawQuery(query): RawQuery, headers: HeaderMap) -> Json<Value> {
    stub.record("GET", format!("{}/transactions", ADMIN), query, &headers, None);
    Json(json!([
        transaction_json("AAPL", "MINT", 100),
        transaction_json("AAPL", "BURN", 20),
    ]))
}

async fn create_stock(State(stub): State<Arc<Stub>>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.record("POST", format!("{}/stocks", ADMIN), None, &headers, Some(body.clone()));
    let symbol = body["symbol"].as_str().unwrap_or_default().to_string();
    if symbol == "DUP" {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "message": "Stock DUP already exists",
                "code": "STOCK_EXISTS",
                "detail": { "symbol": "DUP" }
            })),
        );
    }
    (StatusCode::CREATED, Json(stock_json(&symbol, "ACTIVE")))
}

async fn update_stock(
    State(stub): State<Arc<Stub>>,
    Path(symbol): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    stub.record("PUT", format!("{}/stocks/{}", ADMIN, symbol), None, &headers, Some(body.clone()));
    let status = body["status"].as_str().unwrap_or("ACTIVE").to_string();
    Json(stock_json(&symbol, &status))
}

async fn mint(State(stub): State<Arc<Stub>>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    stub.record("POST", format!("{}/stocks/mint", ADMIN), None, &headers, Some(body.clone()));
    let symbol = body["symbol"].as_str().unwrap_or_default();
    let amount = body["amount"].as_u64().unwrap_or_default();
    Json(transaction_json(symbol, "MINT", amount))
}

async fn burn(State(stub): State<Arc<Stub>>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.record("POST", format!("{}/stocks/burn", ADMIN), None, &headers, Some(body));
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Insufficient pool balance" })),
    )
}

/// Start the stub server and return its recorder plus a client pointed at it.
async fn spawn_stub(session_token: Option<&str>) -> (Arc<Stub>, ApiClient) {
    let stub = Arc::new(Stub::default());
    let router = Router::new()
        .route(&format!("{}/stats", ADMIN), get(stats))
        .route(&format!("{}/transactions", ADMIN), get(transactions))
        .route(&format!("{}/stocks", ADMIN), post(create_stock))
        .route(&format!("{}/stocks/mint", ADMIN), post(mint))
        .route(&format!("{}/stocks/burn", ADMIN), post(burn))
        .route(&format!("{}/stocks/{{symbol}}", ADMIN), put(update_stock))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("http://{}/", addr).parse().unwrap(),
        session_token: session_token.map(str::to_string),
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    (stub, client)
}

fn create_input(symbol: &str) -> CreateStockInput {
    CreateStockInput {
        symbol: symbol.to_string(),
        name: "Apple Inc.".to_string(),
        initial_supply: 1000,
        price_per_token: 150.5,
        custody_verification_url: None,
    }
}

#[tokio::test]
async fn test_create_stock_posts_body_with_credential() {
    // Arrange
    let (stub, client) = spawn_stub(Some("admin-session")).await;

    // Act
    let stock = client.create_stock(create_input("AAPL")).await.unwrap();

    // Assert
    assert_eq!(stock.symbol, "AAPL");
    assert_eq!(stock.token_id, "0.0.4512");

    let request = stub.last();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/v2/tokenization/admin/stocks");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-session"));
    assert_eq!(
        request.body,
        Some(json!({
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "initialSupply": 1000,
            "pricePerToken": 150.5
        }))
    );
}

#[tokio::test]
async fn test_server_error_is_normalized() {
    let (_stub, client) = spawn_stub(None).await;

    let err = client.create_stock(create_input("DUP")).await.unwrap_err();

    assert_eq!(err.status, 409);
    assert!(!err.is_network());
    assert_eq!(err.message, "Stock DUP already exists");
    assert_eq!(err.code.as_deref(), Some("STOCK_EXISTS"));
    assert_eq!(err.details, Some(json!({ "symbol": "DUP" })));
}

#[tokio::test]
async fn test_transactions_query_omits_unset_filters() {
    let (stub, client) = spawn_stub(None).await;

    let all = client
        .get_admin_transactions(TransactionFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(stub.last().query, None);

    let filter = TransactionFilter {
        symbol: Some("AAPL".to_string()),
        tx_type: Some(TransactionType::Mint),
        status: Some(TransactionStatus::Completed),
        limit: Some(25),
    };
    client.get_admin_transactions(filter).await.unwrap();
    assert_eq!(
        stub.last().query.as_deref(),
        Some("symbol=AAPL&type=MINT&status=COMPLETED&limit=25")
    );
}

#[tokio::test]
async fn test_update_stock_encodes_symbol_in_path() {
    let (stub, client) = spawn_stub(None).await;

    let input = UpdateStockInput {
        status: Some(StockStatus::Suspended),
        ..Default::default()
    };
    let stock = client.update_stock("BRK/B".to_string(), input).await.unwrap();

    assert_eq!(stock.status, StockStatus::Suspended);
    let request = stub.last();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/v2/tokenization/admin/stocks/BRK/B");
    assert_eq!(request.body, Some(json!({ "status": "SUSPENDED" })));
}

#[tokio::test]
async fn test_burn_rejection_keeps_server_message() {
    let (_stub, client) = spawn_stub(None).await;

    let err = client
        .burn_stock(BurnStockInput {
            symbol: "AAPL".to_string(),
            amount: 5000,
            reason: Some("Sold underlying shares".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Insufficient pool balance");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop a listener so the port is known to be closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ApiConfig {
        base_url: format!("http://{}", addr).parse().unwrap(),
        session_token: None,
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = client.get_platform_stats().await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status, 0);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn test_mint_refetches_observed_queries() {
    // Arrange
    let (stub, client) = spawn_stub(None).await;
    let queries = QueryClient::new(Arc::new(client));
    let tx_key = QueryKey::AdminTransactions(TransactionFilter::default());
    queries.observe_only([QueryKey::PlatformStats, tx_key.clone()]);

    let stats = queries.platform_stats().await.unwrap();
    assert_eq!(stats.total_stocks, 1);
    queries.admin_transactions(TransactionFilter::default()).await.unwrap();

    let stats_path = "/api/v2/tokenization/admin/stats";
    let tx_path = "/api/v2/tokenization/admin/transactions";
    assert_eq!(stub.count("GET", stats_path), 1);
    assert_eq!(stub.count("GET", tx_path), 1);

    // Act
    let outcome = execute(
        &queries,
        Mutation::Mint(MintStockInput {
            symbol: "AAPL".to_string(),
            amount: 100,
            custody_verification_url: None,
            notes: Some("Quarterly purchase".to_string()),
        }),
    )
    .await
    .unwrap();

    // Assert
    match &outcome {
        MutationOutcome::Minted(tx) => assert_eq!(tx.amount, 100.0),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(stub.count("POST", "/api/v2/tokenization/admin/stocks/mint"), 1);
    assert_eq!(stub.count("GET", stats_path), 2);
    assert_eq!(stub.count("GET", tx_path), 2);

    let state = queries.transactions_state(&TransactionFilter::default());
    assert!(!state.is_stale);
    assert_eq!(state.data.map(|txs| txs.len()), Some(2));
}

#[tokio::test]
async fn test_failed_burn_does_not_refetch() {
    let (stub, client) = spawn_stub(None).await;
    let queries = QueryClient::new(Arc::new(client));
    queries.observe_only([QueryKey::PlatformStats]);
    queries.platform_stats().await.unwrap();

    let err = execute(
        &queries,
        Mutation::Burn(BurnStockInput {
            symbol: "AAPL".to_string(),
            amount: 5000,
            reason: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.message, "Insufficient pool balance");
    assert_eq!(stub.count("GET", "/api/v2/tokenization/admin/stats"), 1);
    assert!(queries.stats_state().data.is_some());
}
