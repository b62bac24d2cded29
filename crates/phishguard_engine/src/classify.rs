use std::time::Duration;

use phishguard_core::{ScanResult, Verdict};
use reqwest::Url;
use serde::Deserialize;

use crate::ScanError;

const PREDICT_PATH: &str = "predict";

#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    /// Base URL of the classification service; `/predict` is appended.
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    /// No timeout unless set; the request runs until the transport gives up.
    pub request_timeout: Option<Duration>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, url: &str) -> Result<ScanResult, ScanError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    settings: ClassifierSettings,
}

impl ReqwestClassifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScanError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ScanError::Network(err.to_string()))
    }

    fn predict_url(&self) -> Result<Url, ScanError> {
        let mut base = Url::parse(&self.settings.endpoint)
            .map_err(|err| ScanError::InvalidEndpoint(err.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(PREDICT_PATH)
            .map_err(|err| ScanError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Classifier for ReqwestClassifier {
    async fn classify(&self, url: &str) -> Result<ScanResult, ScanError> {
        let target = self.predict_url()?;
        let client = self.build_client()?;

        let response = client
            .post(target)
            .form(&[("url", url)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_prediction(&body)
    }
}

/// Wire shape of a `/predict` answer. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
struct PredictResponse {
    result: Option<String>,
    phishing_probability: Option<f64>,
    advanced_risk_factors: Option<Vec<String>>,
    error: Option<String>,
}

/// Decodes a `/predict` body, applying the missing-field defaults.
///
/// An `error` field means the service failed internally even if the status was 200.
pub fn decode_prediction(body: &[u8]) -> Result<ScanResult, ScanError> {
    let response: PredictResponse =
        serde_json::from_slice(body).map_err(|err| ScanError::Decode(err.to_string()))?;

    if let Some(message) = response.error {
        return Err(ScanError::Service(message));
    }

    Ok(ScanResult {
        label: response
            .result
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| Verdict::DEFAULT_LABEL.to_string()),
        probability: response.phishing_probability.unwrap_or(0.0).clamp(0.0, 1.0),
        risk_factors: response.advanced_risk_factors.unwrap_or_default(),
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ScanError {
    if err.is_timeout() {
        return ScanError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return ScanError::Decode(err.to_string());
    }
    ScanError::Network(err.to_string())
}
