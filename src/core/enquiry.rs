use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;

use crate::models::EnquiryPayload;

/// What the backend had to say about a delivered enquiry.
///
/// Both variants mean the request itself went through and came back as
/// valid JSON; the split follows the HTTP status class. Transport-level
/// failures (connection refused, non-JSON body) surface as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EnquiryResponse {
    Accepted { message: String },
    Rejected { message: String },
}

#[derive(Debug, Deserialize)]
struct EnquiryReply {
    message: String,
}

/// Thin client for the enquiry endpoint. One POST, no retries, no timeout.
#[derive(Debug, Clone)]
pub struct EnquiryClient {
    http: Client,
    endpoint: String,
}

impl EnquiryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver the payload and classify the backend's verdict.
    ///
    /// The body is parsed as JSON regardless of status code, so an error
    /// status with a well-formed `{message}` body still yields a
    /// [`EnquiryResponse::Rejected`] rather than an `Err`.
    pub async fn send(&self, payload: &EnquiryPayload) -> anyhow::Result<EnquiryResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach enquiry endpoint {}", self.endpoint))?;

        let status = response.status();
        let reply: EnquiryReply = response
            .json()
            .await
            .context("Enquiry response was not valid JSON")?;

        if status.is_success() {
            Ok(EnquiryResponse::Accepted {
                message: reply.message,
            })
        } else {
            Ok(EnquiryResponse::Rejected {
                message: reply.message,
            })
        }
    }
}
