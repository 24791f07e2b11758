use super::{Email, Mailer};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Serialize)]
struct Payload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: String,
}

pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

fn payload(email: &Email) -> Payload<'_> {
    Payload {
        from: &email.from,
        to: [&email.to],
        subject: &email.subject,
        html: &email.html,
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        info!(subject = email.subject, "Sending email");
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload(email))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            error!(status = status.to_string(), error_text, "Email provider rejected message");
            return Err(Error::Email(format!(
                "Email provider responded with {status}: {error_text}"
            )));
        }
        let res: SendResponse = response.json().await?;
        info!(id = res.id, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ResendMailer;
    use crate::email::Email;
    use serde_json::json;

    #[test]
    fn payload() {
        let email = Email {
            from: "Ed at Semperr <ed@semperr.com>".into(),
            to: "jane@example.com".into(),
            subject: "Report".into(),
            html: "<p>hi</p>".into(),
        };
        assert_eq!(
            json!({
                "from": "Ed at Semperr <ed@semperr.com>",
                "to": ["jane@example.com"],
                "subject": "Report",
                "html": "<p>hi</p>",
            }),
            serde_json::to_value(super::payload(&email)).unwrap(),
        );
    }

    #[test]
    fn endpoint() {
        assert_eq!(
            "https://api.resend.com/emails",
            ResendMailer::new("https://api.resend.com/", "re_test").endpoint(),
        );
        assert_eq!(
            "http://localhost:3000/emails",
            ResendMailer::new("http://localhost:3000", "re_test").endpoint(),
        );
    }
}
