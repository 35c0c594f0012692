//! End-to-end tests for the generation endpoint contract.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use glaze_api::{create_router, ApiConfig, AppState};
use glaze_core::error::{GlazeError, Result};
use glaze_core::traits::AssetProvider;
use glaze_core::types::{GeneratedAsset, GenerationRequest};

/// Provider stub that counts invocations and can be switched into a failing
/// mode at runtime.
struct CountingProvider {
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl CountingProvider {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

/// Local newtype so the foreign `AssetProvider` trait can be implemented for
/// a shared handle without violating the orphan rule.
struct SharedProvider(Arc<CountingProvider>);

#[async_trait]
impl AssetProvider for SharedProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAsset> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        if self.0.fail.load(Ordering::SeqCst) {
            return Err(GlazeError::GenerationFailed("stub backend down".into()));
        }
        Ok(GeneratedAsset::new(
            format!(
                "https://cdn.example/{}x{}/{}.png",
                request.width,
                request.height,
                request.prompt.len()
            ),
            "png",
        ))
    }

    fn name(&self) -> &str {
        "counting-stub"
    }
}

fn test_state(capacity: usize) -> (Arc<AppState>, Arc<CountingProvider>) {
    let provider = CountingProvider::new();
    let config = ApiConfig {
        cache_capacity: capacity,
        ..ApiConfig::default()
    };
    let state = Arc::new(AppState::with_provider(
        config,
        Box::new(SharedProvider(provider.clone())),
    ));
    (state, provider)
}

async fn post_generate(state: &Arc<AppState>, body: Value) -> (StatusCode, Value) {
    let app = create_router(state.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assets/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, parsed)
}

#[tokio::test]
async fn idempotent_cache_hit() {
    let (state, provider) = test_state(100);

    let body = json!({ "prompt": "a red fox", "cacheKey": "fox_v1" });
    let (status, first) = post_generate(&state, body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["cached"], json!(false));

    let (status, second) = post_generate(&state, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["cached"], json!(true));
    assert_eq!(second["generationTime"], json!(0));
    assert_eq!(second["imageUrl"], first["imageUrl"]);
    assert_eq!(second["format"], first["format"]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn at_most_one_invocation_per_key() {
    let (state, provider) = test_state(100);

    for _ in 0..5 {
        let (status, _) =
            post_generate(&state, json!({ "prompt": "a red fox", "cacheKey": "k" })).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn capacity_bound_evicts_oldest() {
    let (state, _provider) = test_state(2);

    post_generate(&state, json!({ "prompt": "p", "cacheKey": "a" })).await;
    post_generate(&state, json!({ "prompt": "p", "cacheKey": "b" })).await;
    post_generate(&state, json!({ "prompt": "p", "cacheKey": "c" })).await;

    assert_eq!(state.cache.len(), 2);
    assert!(!state.cache.contains("a"));
    assert!(state.cache.contains("b"));
    assert!(state.cache.contains("c"));

    // Hitting "b" changes nothing: no eviction, same resident set.
    let (_, hit) = post_generate(&state, json!({ "prompt": "p", "cacheKey": "b" })).await;
    assert_eq!(hit["cached"], json!(true));
    assert_eq!(state.cache.len(), 2);
    assert!(state.cache.contains("b"));
    assert!(state.cache.contains("c"));
}

#[tokio::test]
async fn validation_rejects_empty_and_missing_prompt() {
    let (state, provider) = test_state(100);

    let (status, body) = post_generate(&state, json!({ "prompt": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Prompt"));

    let (status, body) = post_generate(&state, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Prompt"));

    assert_eq!(provider.calls(), 0);
    assert!(state.cache.is_empty());
}

#[tokio::test]
async fn validation_rejects_zero_dimensions() {
    let (state, provider) = test_state(100);

    let (status, _) =
        post_generate(&state, json!({ "prompt": "a red fox", "width": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn failure_does_not_poison_cache() {
    let (state, provider) = test_state(100);

    provider.set_failing(true);
    let (status, body) =
        post_generate(&state, json!({ "prompt": "a red fox", "cacheKey": "k" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], json!("Generation failed"));
    assert!(body["message"].as_str().unwrap().contains("stub backend down"));
    assert!(state.cache.is_empty());

    // The retry generates again instead of replaying the failure.
    provider.set_failing(false);
    let (status, body) =
        post_generate(&state, json!({ "prompt": "a red fox", "cacheKey": "k" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], json!(false));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn key_echo_and_generated_keys() {
    let (state, _provider) = test_state(100);

    let (_, body) = post_generate(&state, json!({ "prompt": "p", "cacheKey": "abc" })).await;
    assert_eq!(body["cacheKey"], json!("abc"));

    let (_, first) = post_generate(&state, json!({ "prompt": "p" })).await;
    let (_, second) = post_generate(&state, json!({ "prompt": "p" })).await;

    let k1 = first["cacheKey"].as_str().unwrap();
    let k2 = second["cacheKey"].as_str().unwrap();
    assert!(k1.starts_with("asset_"));
    assert!(!k1.is_empty() && !k2.is_empty());
    assert_ne!(k1, k2);

    // Identical prompt, but value-independent keys: both calls generated.
    assert_eq!(first["cached"], json!(false));
    assert_eq!(second["cached"], json!(false));
}

#[tokio::test]
async fn empty_cache_key_counts_as_omitted() {
    let (state, _provider) = test_state(100);

    let (_, body) = post_generate(&state, json!({ "prompt": "p", "cacheKey": "" })).await;
    let key = body["cacheKey"].as_str().unwrap();
    assert!(key.starts_with("asset_"));
}

#[tokio::test]
async fn prompt_is_echoed_truncated() {
    let (state, _provider) = test_state(100);

    let long_prompt = "fox ".repeat(100);
    let (_, body) = post_generate(&state, json!({ "prompt": long_prompt })).await;
    let echoed = body["prompt"].as_str().unwrap();
    assert!(echoed.ends_with("..."));
    assert_eq!(echoed.chars().count(), 203);
}

#[tokio::test]
async fn cache_stats_reflect_inserts() {
    let (state, _provider) = test_state(5);

    post_generate(&state, json!({ "prompt": "p", "cacheKey": "a" })).await;
    post_generate(&state, json!({ "prompt": "p", "cacheKey": "b" })).await;

    let app = create_router(state.clone());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assets/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let stats: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stats["entries"], json!(2));
    assert_eq!(stats["capacity"], json!(5));
}

#[tokio::test]
async fn non_post_method_gets_json_405() {
    let (state, _provider) = test_state(100);

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/assets/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], json!("Method not allowed"));
}
