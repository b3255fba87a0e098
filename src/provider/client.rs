//! Thin HTTP client for the generation provider's endpoints.
//!
//! - `create_prediction` posts a model + input payload to `/predictions`.
//! - `get_prediction` fetches `/predictions/{id}` for status and output.
use reqwest::Client;
use serde_json::{json, Value};
use crate::error::{AppResult, AppError};

/// Status of one provider job, relayed without interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobStatus {
    pub status: String,
    pub output_url: Option<String>,
}

#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ProviderClient {
    pub fn new(base_url: String, token: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        ProviderClient { client: Client::new(), base_url: base, token }
    }

    /// Submit a generation job to the provider.
    ///
    /// Returns the provider-assigned job id on success. The call is issued
    /// exactly once; transient failures are not retried.
    pub async fn create_prediction(&self, model: &str, input: Value) -> AppResult<String> {
        let url = format!("{}/predictions", self.base_url);
        tracing::info!("Submitting prediction to provider at URL: {}", url);
        let body = json!({ "model": model, "input": input });
        tracing::debug!("Prediction payload: {:?}", body);

        let response = self.client.post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let json: Value = response.json().await.map_err(AppError::HttpClient)?;
            let id = json.get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| AppError::MalformedResponse("submission response has no 'id'".to_string()))?;
            tracing::info!("Successfully submitted prediction {}", id);
            Ok(id.to_string())
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to submit prediction. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Provider(error_message))
        }
    }

    /// Fetch the current status of a job by provider id.
    pub async fn get_prediction(&self, id: &str) -> AppResult<JobStatus> {
        let url = format!("{}/predictions/{}", self.base_url, id);
        let response = self.client.get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let json: Value = response.json().await.map_err(AppError::HttpClient)?;
            let status = json.get("status")
                .and_then(|v| v.as_str())
                .ok_or_else(|| AppError::MalformedResponse("status response has no 'status'".to_string()))?
                .to_string();
            let output_url = json.get("output").and_then(output_url);
            Ok(JobStatus { status, output_url })
        } else {
            Err(AppError::Provider(format!("Failed to get prediction '{}': {:?}", id, response.status())))
        }
    }
}

/// The provider reports output as either a bare URL or a list of URLs.
fn output_url(output: &Value) -> Option<String> {
    match output {
        Value::String(s) => Some(s.clone()),
        Value::Array(arr) => arr.iter().find_map(|v| v.as_str().map(String::from)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_url_accepts_string_and_array_forms() {
        assert_eq!(output_url(&json!("https://cdn.example/a.png")), Some("https://cdn.example/a.png".to_string()));
        assert_eq!(output_url(&json!(["https://cdn.example/b.mp4"])), Some("https://cdn.example/b.mp4".to_string()));
        assert_eq!(output_url(&json!(null)), None);
        assert_eq!(output_url(&json!({"nested": true})), None);
    }
}
