//! Smoke test against a running API.
//!
//! Usage: `smoke [BASE_URL]`, or set `SMOKE_BASE_URL`.
//! Defaults to `http://localhost:8080/api`. Exits non-zero if any check fails.

use std::time::Duration;

use anyhow::{ensure, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const RECOMMENDATION_FIELDS: [&str; 8] = [
    "title",
    "description",
    "difficulty",
    "estimatedTime",
    "estimatedCost",
    "components",
    "skills",
    "steps",
];

struct Smoke {
    client: Client,
    base_url: String,
}

impl Smoke {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        ensure!(status.is_success(), "GET {path} returned {status}");
        Ok(response.json().await?)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        ensure!(status.is_success(), "POST {path} returned {status}");
        Ok(response.json().await?)
    }

    async fn check_root(&self) -> Result<()> {
        let body = self.get_json("/").await?;
        ensure!(
            body["message"] == "Hello World",
            "expected message 'Hello World', got {}",
            body["message"]
        );
        Ok(())
    }

    async fn check_create_status(&self) -> Result<String> {
        let body = self
            .post_json("/status", &json!({"client_name": "smoke-tester"}))
            .await?;
        for field in ["id", "client_name", "timestamp"] {
            ensure!(body.get(field).is_some(), "missing field {field}");
        }
        ensure!(
            body["client_name"] == "smoke-tester",
            "client_name not echoed: {}",
            body["client_name"]
        );
        body["id"]
            .as_str()
            .map(str::to_string)
            .context("id is not a string")
    }

    async fn check_list_status(&self, created_id: Option<&str>) -> Result<()> {
        let body = self.get_json("/status").await?;
        let records = body.as_array().context("expected a list")?;
        if let Some(id) = created_id {
            ensure!(
                records.iter().any(|r| r["id"] == id),
                "created record {id} not listed"
            );
        }
        Ok(())
    }

    async fn check_generate_project(&self) -> Result<()> {
        let body = self
            .post_json(
                "/generate-project",
                &json!({
                    "projectType": "iot",
                    "skillLevel": "expert",
                    "interests": "weather",
                    "budget": "",
                    "duration": ""
                }),
            )
            .await?;
        for field in RECOMMENDATION_FIELDS {
            ensure!(body.get(field).is_some(), "missing field {field}");
        }
        let steps = body["steps"].as_array().context("steps is not a list")?;
        ensure!(steps.len() == 12, "expected 12 steps, got {}", steps.len());
        Ok(())
    }
}

fn report(name: &str, outcome: &Result<impl Sized>) -> bool {
    match outcome {
        Ok(_) => {
            println!("PASS  {name}");
            true
        }
        Err(e) => {
            println!("FAIL  {name}: {e:#}");
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SMOKE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let smoke = Smoke {
        client: Client::builder().timeout(Duration::from_secs(10)).build()?,
        base_url: base_url.trim_end_matches('/').to_string(),
    };

    println!("Smoke testing {}", smoke.base_url);

    let mut results = Vec::new();
    results.push(report("GET /", &smoke.check_root().await));

    let created = smoke.check_create_status().await;
    results.push(report("POST /status", &created));
    let created_id = created.ok();

    results.push(report(
        "GET /status",
        &smoke.check_list_status(created_id.as_deref()).await,
    ));
    results.push(report(
        "POST /generate-project",
        &smoke.check_generate_project().await,
    ));

    let passed = results.iter().filter(|ok| **ok).count();
    println!("{passed}/{} checks passed", results.len());

    if passed != results.len() {
        std::process::exit(1);
    }
    Ok(())
}
