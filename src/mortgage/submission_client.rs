use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::{config::Config, models::mortgage::MortgageCalculation};

#[derive(Debug, Serialize)]
pub struct SubmissionRequest<'a> {
    pub email: &'a str,
    pub data: &'a MortgageCalculation,
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    }
    EMAIL_REGEX.is_match(email.trim())
}

/// Sends calculations and the client's email address to the configured
/// collection endpoint. Only success or failure of the request matters.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    url: Option<String>,
    client: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(config: &Config) -> SubmissionClient {
        SubmissionClient {
            url: config.mortgage_submission_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn submit(&self, email: &str, calculation: &MortgageCalculation) -> Result<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(anyhow!("'{}' is not a valid email address", email));
        }

        let url = self
            .url
            .as_ref()
            .ok_or_else(|| anyhow!("Mortgage submission URL not configured"))?;

        let payload = SubmissionRequest {
            email,
            data: calculation,
        };

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach mortgage submission endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Mortgage submission endpoint responded with error {}: {}",
                status,
                body
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::create_test_config, models::mortgage::PaymentFrequency};

    #[test]
    fn validates_email_addresses() {
        assert!(is_valid_email("client@example.com"));
        assert!(is_valid_email("  client@example.co.uk "));
        assert!(!is_valid_email("client@example"));
        assert!(!is_valid_email("client example@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn payload_shape() {
        let calculation = MortgageCalculation {
            payment: 10.0,
            total: 120.0,
            loan_amount: 110.0,
            frequency: PaymentFrequency::Monthly,
        };
        let payload = SubmissionRequest {
            email: "client@example.com",
            data: &calculation,
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["email"], "client@example.com");
        assert_eq!(json["data"]["payment"], 10.0);
        assert_eq!(json["data"]["loanAmount"], 110.0);
        assert_eq!(json["data"]["freq"], 12);
    }

    #[tokio::test]
    async fn fails_without_configured_endpoint() {
        let client = SubmissionClient::new(&create_test_config());
        let calculation = MortgageCalculation {
            payment: 10.0,
            total: 120.0,
            loan_amount: 110.0,
            frequency: PaymentFrequency::Monthly,
        };

        let result = client.submit("client@example.com", &calculation).await;
        assert!(result.is_err());

        let result = client.submit("not-an-email", &calculation).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a valid email address"));
    }
}
