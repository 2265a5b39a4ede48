use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use food_lens::{
    analysis::FoodAnalyzer,
    config::{Config, LogsConfig, OpenRouterConfig, ServerConfig},
    llm::{LlmClient, OpenRouterClient},
    server::{self, UploadStore, handlers::AppState},
};
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "sk-or-v1-test";
pub const VISION_MODEL: &str = "google/gemini-pro-vision";
pub const NUTRITION_MODEL: &str = "mistralai/mistral-small-24b-instruct-2501";
pub const BOUNDARY: &str = "food-lens-test-boundary";

/// Smallest byte sequence that passes the JPEG signature check, plus a JFIF tag
pub const TEST_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0xFF, 0xD9,
];

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        openrouter: OpenRouterConfig {
            base_url: base_url.to_string(),
            vision_model: VISION_MODEL.to_string(),
            nutrition_model: NUTRITION_MODEL.to_string(),
            referer: None,
            title: None,
            timeout_secs: Some(5),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            upload_dir: None,
            max_image_bytes: 1024 * 1024,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Build the router around `llm`, staging uploads in a fresh temp dir
pub async fn create_test_app(llm: Arc<dyn LlmClient>, max_image_bytes: usize) -> (Router, TempDir) {
    let upload_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config("http://unused.invalid/api/v1");

    let state = AppState {
        analyzer: Arc::new(FoodAnalyzer::from_config(llm, &config.openrouter)),
        uploads: Arc::new(UploadStore::open(upload_dir.path()).await.unwrap()),
        max_image_bytes,
    };

    (server::router(state), upload_dir)
}

/// Build the router with a real OpenRouter client aimed at a mock server
pub async fn create_test_app_for(base_url: &str) -> (Router, TempDir) {
    let config = create_test_config(base_url);
    let llm = Arc::new(OpenRouterClient::new(&config.openrouter).unwrap());
    create_test_app(llm, config.server.max_image_bytes).await
}

/// Encode an analyze form by hand; either field may be left out
pub fn multipart_body(api_key: Option<&str>, image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(api_key) = api_key {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"api_key\"\r\n\r\n{api_key}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"plate.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn analyze_request(api_key: Option<&str>, image: Option<&[u8]>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(api_key, image)))
        .unwrap()
}

/// OpenAI-style chat completion body carrying `content`
pub fn chat_response_json(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-test",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
openrouter:
  base_url: "https://openrouter.ai/api/v1"
  vision_model: "google/gemini-pro-vision"
  nutrition_model: "mistralai/mistral-small-24b-instruct-2501"
  referer: "https://example.com/food-lens"
  title: "Food Lens"
  timeout_secs: 30

server:
  host: "127.0.0.1"
  port: 3000
  upload_dir: "/tmp/food-lens-uploads"
  max_image_bytes: 2097152
  logs:
    level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
