use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use quotes_api::config::{BasicConfig, Config};
use quotes_api::db::{NewQuote, QuoteStorage};
use quotes_api::router::{QuotesState, quotes_router};
use serde_json::Value;
use std::collections::HashSet;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    _dir: TempDir,
    storage: QuoteStorage,
    app: Router,
}

async fn connect() -> (TempDir, QuoteStorage, Config) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let cfg = Config {
        basic: BasicConfig {
            db_path: dir.path().join("quotes.db"),
            ..BasicConfig::default()
        },
        ..Config::default()
    };
    let storage = QuoteStorage::connect(&cfg.basic)
        .await
        .expect("failed to open storage");
    (dir, storage, cfg)
}

async fn seeded_app() -> TestApp {
    let (dir, storage, cfg) = connect().await;
    storage.initialize().await.expect("failed to initialize");
    let app = quotes_router(QuotesState::new(storage.clone(), &cfg));
    TestApp {
        _dir: dir,
        storage,
        app,
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn ids(quotes: &Value) -> Vec<i64> {
    quotes
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|q| q["id"].as_i64().expect("quote without id"))
        .collect()
}

#[tokio::test]
async fn health_reports_service_name() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ClaudeQuotes API");
}

#[tokio::test]
async fn list_defaults_to_fifty_in_id_order() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/quotes").await;
    assert_eq!(status, StatusCode::OK);

    let ids = ids(&body);
    assert!(!ids.is_empty() && ids.len() <= 50);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let first = &body[0];
    for field in ["id", "text", "author", "category"] {
        assert!(!first[field].is_null(), "missing {field}");
    }
}

#[tokio::test]
async fn limit_one_returns_smallest_id() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/quotes?limit=1").await;
    assert_eq!(status, StatusCode::OK);

    let smallest = t
        .storage
        .list_all()
        .await
        .expect("list all")
        .first()
        .map(|q| q.id);
    assert_eq!(ids(&body), smallest.into_iter().collect::<Vec<_>>());
}

#[tokio::test]
async fn offset_pages_do_not_overlap() {
    let t = seeded_app().await;
    let (_, first) = get(&t.app, "/quotes?limit=20&offset=0").await;
    let (_, second) = get(&t.app, "/quotes?limit=20&offset=20").await;
    let first: HashSet<i64> = ids(&first).into_iter().collect();
    let second: HashSet<i64> = ids(&second).into_iter().collect();
    assert_eq!(first.len(), 20);
    assert_eq!(second.len(), 20);
    assert!(first.is_disjoint(&second));
}

#[tokio::test]
async fn out_of_range_params_are_rejected() {
    let t = seeded_app().await;
    for uri in [
        "/quotes?limit=200",
        "/quotes?limit=0",
        "/quotes?offset=-5",
        "/quotes?limit=abc",
    ] {
        let (status, body) = get(&t.app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error"]["code"], "INVALID_QUERY", "{uri}");
    }
}

#[tokio::test]
async fn category_filter_is_exact() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/quotes?category=perseverance").await;
    assert_eq!(status, StatusCode::OK);
    let quotes = body.as_array().expect("array");
    assert!(!quotes.is_empty());
    assert!(quotes.iter().all(|q| q["category"] == "perseverance"));

    let (_, body) = get(&t.app, "/quotes?category=persever").await;
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn get_quote_round_trips_listed_ids() {
    let t = seeded_app().await;
    let (_, listed) = get(&t.app, "/quotes?limit=5").await;
    for id in ids(&listed) {
        let (status, body) = get(&t.app, &format!("/quotes/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
    }
}

#[tokio::test]
async fn unknown_quote_is_soft_not_found() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/quotes/999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "error": "Quote not found" }));
}

#[tokio::test]
async fn non_integer_id_gets_json_error() {
    let t = seeded_app().await;
    for uri in ["/quotes/abc", "/quotes/1.5", "/quotes/99999999999999999999"] {
        let (status, body) = get(&t.app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error"]["code"], "INVALID_QUERY", "{uri}");
        assert!(body["error"]["message"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn random_quote_draws_from_store() {
    let t = seeded_app().await;
    let stored: HashSet<i64> = t
        .storage
        .list_all()
        .await
        .expect("list all")
        .into_iter()
        .map(|q| q.id)
        .collect();

    let mut seen = HashSet::new();
    for _ in 0..100 {
        let (status, body) = get(&t.app, "/quotes/random").await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_i64().expect("random quote id");
        assert!(stored.contains(&id));
        seen.insert(id);
    }
    assert!(seen.len() > 1);
}

#[tokio::test]
async fn random_quote_on_empty_store_is_soft_not_found() {
    let (_dir, storage, cfg) = connect().await;
    storage.init_schema().await.expect("schema");
    let app = quotes_router(QuotesState::new(storage, &cfg));

    let (status, body) = get(&app, "/quotes/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "error": "No quotes found" }));
}

#[tokio::test]
async fn categories_are_sorted_distinct_and_present() {
    let t = seeded_app().await;
    let (status, body) = get(&t.app, "/categories").await;
    assert_eq!(status, StatusCode::OK);

    let categories: Vec<String> = serde_json::from_value(body).expect("string array");
    let mut sorted = categories.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(categories, sorted);

    let stored: HashSet<String> = t
        .storage
        .list_all()
        .await
        .expect("list all")
        .into_iter()
        .map(|q| q.category)
        .collect();
    assert!(categories.iter().all(|c| stored.contains(c)));
    assert_eq!(categories.len(), stored.len());
}

#[tokio::test]
async fn inserted_quote_without_category_is_general() {
    let (_dir, storage, cfg) = connect().await;
    storage.init_schema().await.expect("schema");
    storage
        .seed(&[NewQuote {
            text: "Keep it simple.",
            author: "Anonymous",
            category: None,
        }])
        .await
        .expect("seed");
    let app = quotes_router(QuotesState::new(storage, &cfg));

    let (_, body) = get(&app, "/categories").await;
    assert_eq!(body, serde_json::json!(["general"]));
}

#[tokio::test]
async fn cors_allows_configured_origins_only() {
    let t = seeded_app().await;

    for (origin, allowed) in [
        ("http://localhost:3000", true),
        ("https://quotes-web.vercel.app", true),
        ("https://example.com", false),
    ] {
        let resp = t
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/categories")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        let allow = resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        assert_eq!(allow.is_some(), allowed, "{origin}");
        if allowed {
            assert_eq!(allow.and_then(|v| v.to_str().ok()), Some(origin));
        }
    }
}
