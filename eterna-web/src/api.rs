//! Client for the mail backend

use crate::config::SiteConfig;
use eterna_common::ContactRequest;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

/// POST the enquiry as JSON. Any non-2xx response is an error; the body is
/// not inspected.
pub async fn send_contact(config: &SiteConfig, request: &ContactRequest) -> Result<(), ContactError> {
    let url = config.send_email_url();
    tracing::debug!("Sending contact request to {url}");

    let client = reqwest::Client::new();
    let resp = client.post(&url).json(request).send().await?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(ContactError::Status(resp.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        let err = ContactError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "server responded with 502 Bad Gateway");
    }
}
