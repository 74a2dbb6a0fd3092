use std::sync::Arc;

use helpdesk::{dispatch, Client, Store};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

/// Dispatcher running on an ephemeral port with a fresh store.
pub struct Server {
    pub client: Client,
    url: String,
    raw: reqwest::Client,
}

pub async fn spawn() -> Server {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind a listener");
    let addr = listener.local_addr().expect("failed to get local address");
    let app = dispatch::router(Arc::new(Store::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    let url = format!("http://{addr}/");
    Server {
        client: Client::new(url.clone()),
        url,
        raw: reqwest::Client::new(),
    }
}

impl Server {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn get(&self, query: &[(&str, &str)]) -> (StatusCode, String) {
        let res = self
            .raw
            .get(&self.url)
            .query(query)
            .send()
            .await
            .expect("failed to send a request");
        let status = res.status();
        (status, res.text().await.expect("failed to get a response"))
    }

    pub async fn post(&self, method: &str, body: &Value) -> (StatusCode, String) {
        self.post_raw(method, body.to_string()).await
    }

    pub async fn post_raw(
        &self,
        method: &str,
        body: impl Into<reqwest::Body>,
    ) -> (StatusCode, String) {
        let res = self
            .raw
            .post(&self.url)
            .query(&[("method", method)])
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("failed to send a request");
        let status = res.status();
        (status, res.text().await.expect("failed to get a response"))
    }
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("response is not JSON")
}
