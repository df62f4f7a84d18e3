use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use super::form::ContactFields;
use crate::config::{self, EmailJsCredentials};

/// Any reason a message did not go out. Users see one retry message for all
/// of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("delivery service rejected the message with status {status}")]
    Rejected { status: u16 },
    #[error("email delivery is not configured for this build")]
    NotConfigured,
}

#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, fields: &ContactFields) -> Result<(), DeliveryError>;
}

#[derive(Serialize, Debug, PartialEq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

/// Sends through the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsMailer {
    credentials: Option<EmailJsCredentials>,
    endpoint: &'static str,
}

impl EmailJsMailer {
    pub fn new(credentials: Option<EmailJsCredentials>) -> Self {
        Self {
            credentials,
            endpoint: config::EMAILJS_ENDPOINT,
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::emailjs_credentials())
    }

    fn request_body<'a>(
        credentials: &'a EmailJsCredentials,
        fields: &'a ContactFields,
    ) -> SendRequest<'a> {
        SendRequest {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: fields,
        }
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJsMailer {
    async fn send(&self, fields: &ContactFields) -> Result<(), DeliveryError> {
        let Some(credentials) = self.credentials.as_ref() else {
            error!("EmailJS credentials missing at build time");
            return Err(DeliveryError::NotConfigured);
        };
        let response = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .json(&Self::request_body(credentials, fields))
            .map_err(|e| DeliveryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("EmailJS request failed: {}", e);
                DeliveryError::Network(e.to_string())
            })?;
        if !response.ok() {
            error!("EmailJS answered {}", response.status());
            return Err(DeliveryError::Rejected {
                status: response.status(),
            });
        }
        info!("contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let credentials = EmailJsCredentials {
            service_id: "service_x",
            template_id: "template_y",
            public_key: "key_z",
        };
        let fields = ContactFields::new("Jane", "jane@x.com", "hi");
        let body = serde_json::to_value(EmailJsMailer::request_body(&credentials, &fields)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {"name": "Jane", "email": "jane@x.com", "message": "hi"}
            })
        );
    }

    #[test]
    fn unconfigured_mailer_fails_without_network() {
        let mailer = EmailJsMailer::new(None);
        let outcome = futures::executor::block_on(mailer.send(&ContactFields::default()));
        assert_eq!(outcome, Err(DeliveryError::NotConfigured));
    }
}
