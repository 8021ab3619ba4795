//! Outbound mail delivery.
//!
//! Mail is sent through an HTTP mail API configured by the `MAIL_*` settings
//! section. The mailer is optional infrastructure: when the section is absent
//! the application runs without outbound mail and callers skip it.

use serde::Serialize;

use crate::{config::MailSettings, error::AppError};

#[derive(Serialize)]
struct MailRequest<'a> {
    from_name: &'a str,
    from_email: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    settings: MailSettings,
}

impl Mailer {
    /// Creates a mailer from the bound mail settings.
    ///
    /// The HTTP client refuses redirects so a misbehaving mail API cannot
    /// bounce credentials to another host.
    ///
    /// # Arguments
    /// - `settings` - Mail settings section from configuration
    ///
    /// # Returns
    /// - `Ok(Mailer)` - New mailer instance
    /// - `Err(AppError::ReqwestErr)` - HTTP client construction failure
    pub fn new(settings: MailSettings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client, settings })
    }

    /// Delivers one message through the mail API.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `subject` - Message subject
    /// - `body` - Plain-text message body
    ///
    /// # Returns
    /// - `Ok(())` - The mail API accepted the message
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-success status
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError> {
        let request = MailRequest {
            from_name: &self.settings.sender_name,
            from_email: &self.settings.sender_email,
            to,
            subject,
            body,
        };

        self.client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
