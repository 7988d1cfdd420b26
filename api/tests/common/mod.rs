#![allow(dead_code)]

use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, response::IntoResponse};
use axum_test::TestServer;
use freshkeep_api::{
    application::http::server::http_server::{router, state},
    args::{Args, DatabaseArgs, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct TestApp {
    pub server: TestServer,
    _dir: TempDir,
}

/// Builds the real router on top of a throwaway SQLite file.
pub async fn spawn_app(gemini_base_url: String) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display());

    let args = Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec![],
        },
        database: DatabaseArgs { url: database_url },
        llm: LlmArgs {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    };

    let app_state = state(Arc::new(args)).await.unwrap();
    let server = TestServer::new(router(app_state).unwrap()).unwrap();

    TestApp { server, _dir: dir }
}

/// App whose generation service is never expected to be reached.
pub async fn spawn_app_without_llm() -> TestApp {
    spawn_app("http://127.0.0.1:9".to_string()).await
}

async fn serve_stub(stub: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    format!("http://{addr}")
}

/// Local stand-in for the Gemini endpoint answering every request with `reply`.
pub async fn spawn_gemini_stub(reply: &str) -> String {
    let reply = reply.to_string();
    let stub = Router::new().fallback(move || {
        let reply = reply.clone();
        async move {
            Json(json!({
                "candidates": [
                    { "content": { "parts": [ { "text": reply } ] } }
                ]
            }))
        }
    });

    serve_stub(stub).await
}

/// Gemini stand-in that always fails.
pub async fn spawn_failing_gemini_stub() -> String {
    let stub = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "quota exhausted").into_response()
    });

    serve_stub(stub).await
}
