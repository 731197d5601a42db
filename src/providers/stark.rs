use crate::{
    config::ClientConfig,
    error::PricingError,
    models::{PriceQuote, PriceRequest, PriceResult, RugCalculationRequest, RugCalculationResponse},
    providers::PriceFetcher,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the RugCalculation pricing endpoint
#[derive(Debug, Clone)]
pub struct StarkClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl StarkClient {
    pub fn new(config: &ClientConfig) -> Result<Self, PricingError> {
        let client = Client::builder()
            .build()
            .map_err(|e| PricingError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(client, config)
    }

    /// Use an existing `reqwest::Client` (shared connection pool)
    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, PricingError> {
        if config.endpoint.trim().is_empty() {
            return Err(PricingError::Config("Pricing endpoint cannot be empty".to_string()));
        }
        if config.timeout_seconds == 0 {
            return Err(PricingError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// Price one variant, surfacing failures as typed errors
    pub async fn request_quote(&self, request: &PriceRequest) -> Result<PriceQuote, PricingError> {
        let body = RugCalculationRequest::from(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::BadStatus { status });
        }

        let bytes = response.bytes().await?;
        let parsed: RugCalculationResponse = serde_json::from_slice(&bytes)?;

        Ok(PriceQuote::from_response(&parsed))
    }
}

#[async_trait]
impl PriceFetcher for StarkClient {
    async fn fetch_price(&self, request: PriceRequest) -> PriceResult {
        match self.request_quote(&request).await {
            Ok(quote) => {
                tracing::debug!(
                    sku = %request.sku,
                    variant = %request.variant(),
                    total = quote.total_charge,
                    "Price received"
                );
                PriceResult::Success(quote)
            }
            Err(e) => {
                tracing::error!(
                    sku = %request.sku,
                    variant = %request.variant(),
                    kind = e.kind(),
                    error = %e,
                    "Price request failed"
                );
                PriceResult::from(Err(e))
            }
        }
    }
}
