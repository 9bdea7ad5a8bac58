//! HTTP client for a running parkscreen API.

use parkscreen_core::{
    FeatureVector, FeaturesResponse, HealthResponse, PredictRequest, PredictResponse, Prediction,
};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or undecodable response body; `reqwest` reports
    /// both through its own error type.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// Typed client for the predict/features/health endpoints.
pub struct PredictClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictClient {
    /// Create a client for the given base URL.
    ///
    /// `base_url` should be like `http://localhost:8000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the server to classify one feature vector.
    ///
    /// A 422 from the server (wrong dimensionality, non-finite value)
    /// comes back as [`ClientError::Server`] with the diagnostic body.
    pub async fn predict(&self, features: FeatureVector) -> Result<Prediction, ClientError> {
        let url = format!("{}/predict", self.base_url);

        info!(url = %url, n_features = features.len(), "requesting prediction");
        let resp = self
            .client
            .post(&url)
            .json(&PredictRequest { features })
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let body: PredictResponse = resp.json().await?;
        Ok(Prediction {
            label: body.prediction,
            confidence: body.confidence,
        })
    }

    /// Fetch the classifier's declared feature names, in training order.
    pub async fn features(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/features", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;

        let body: FeaturesResponse = resp.json().await?;
        Ok(body.features)
    }

    /// Check server liveness.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;

        Ok(resp.json().await?)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Server {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}
