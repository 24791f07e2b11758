use crate::email::{Email, Mailer};
use crate::lead::store::LeadStore;
use crate::lead::{Lead, NewLead, LIST_NAME};
use crate::report::{template, ReportMetrics};
use crate::Result;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{error, info};

/// Persists a lead and emails its audit report. Steps run in order and a failed
/// step is not rolled back: a saved lead stays saved if the email fails.
pub struct AuditService {
    store: Arc<dyn LeadStore>,
    mailer: Arc<dyn Mailer>,
    from: String,
}

impl AuditService {
    pub fn new(
        store: Arc<dyn LeadStore>,
        mailer: Arc<dyn Mailer>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            store,
            mailer,
            from: from.into(),
        }
    }

    pub async fn submit(&self, lead: NewLead) -> Result<Lead> {
        let lead = Lead::new(lead, OffsetDateTime::now_utc());

        if let Err(e) = self.save(&lead).await {
            error!(key = lead.key, error = %e, "Failed to save lead");
            return Err(e);
        }
        info!(key = lead.key, "Saved lead");

        let metrics = ReportMetrics::new(lead.hours_per_week, lead.monthly_savings);
        let email = Email {
            from: self.from.clone(),
            to: lead.email.clone(),
            subject: template::SUBJECT.into(),
            html: template::render(&lead, &metrics),
        };

        if let Err(e) = self.mailer.send(&email).await {
            error!(key = lead.key, error = %e, "Lead saved but report email failed");
            return Err(e);
        }
        info!(
            key = lead.key,
            hours_reclaimed = metrics.hours_reclaimed,
            "Sent audit report"
        );

        Ok(lead)
    }

    async fn save(&self, lead: &Lead) -> Result<()> {
        self.store.put(&lead.key, lead.fields()?).await?;
        self.store.append(LIST_NAME, &lead.key).await
    }
}

#[cfg(test)]
mod test {
    use super::AuditService;
    use crate::lead::store::SqliteLeadStore;
    use crate::lead::{NewLead, LIST_NAME};
    use crate::test::{mock_service, Call, CallLog, MockMailer};
    use crate::{db, Error, Result};
    use actix_web::test;
    use std::sync::Arc;

    fn new_lead() -> NewLead {
        NewLead {
            email: "jane@example.com".into(),
            team_size: 12.0,
            hours_per_week: 20.0,
            monthly_savings: 1000.0,
        }
    }

    #[test]
    async fn submit_puts_appends_then_sends() -> Result<()> {
        let log = CallLog::default();
        let lead = mock_service(&log, false, false).submit(new_lead()).await?;
        let calls = log.calls();
        assert_eq!(3, calls.len());
        match &calls[0] {
            Call::Put { key, fields } => {
                assert_eq!(&lead.key, key);
                assert!(fields.contains(&("email".into(), "jane@example.com".into())));
                assert!(fields.contains(&("source".into(), "automation-audit".into())));
            }
            other => panic!("expected put, got {other:?}"),
        }
        assert_eq!(
            Call::Append {
                list: LIST_NAME.into(),
                key: lead.key.clone(),
            },
            calls[1],
        );
        match &calls[2] {
            Call::Send(email) => {
                assert_eq!("jane@example.com", email.to);
                assert_eq!("Ed at Semperr <ed@semperr.com>", email.from);
                assert_eq!("Your Automation Audit Report - Semperr", email.subject);
                assert!(email.html.contains(">$12,000</div>"));
            }
            other => panic!("expected send, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    async fn store_failure_skips_email() {
        let log = CallLog::default();
        let res = mock_service(&log, true, false).submit(new_lead()).await;
        assert!(res.is_err());
        assert!(log.calls().iter().all(|it| !matches!(it, Call::Send(_))));
    }

    #[test]
    async fn email_failure_keeps_lead() {
        let log = CallLog::default();
        let res = mock_service(&log, false, true).submit(new_lead()).await;
        assert!(matches!(res, Err(Error::Email(_))));
        let calls = log.calls();
        assert!(matches!(calls[0], Call::Put { .. }));
        assert!(matches!(calls[1], Call::Append { .. }));
    }

    #[test]
    async fn submit_to_sqlite() -> Result<()> {
        let pool = Arc::new(db::test::pool().await);
        let store = Arc::new(SqliteLeadStore::new(&pool));
        let log = CallLog::default();
        let service = AuditService::new(
            store.clone(),
            Arc::new(MockMailer::new(&log, false)),
            "Ed at Semperr <ed@semperr.com>",
        );
        let lead = service.submit(new_lead()).await?;
        assert_eq!(vec![lead.key.clone()], store.list(LIST_NAME, 10).await?);
        let fields = store.fields(&lead.key).await?;
        assert!(fields.contains(&("teamSize".into(), "12".into())));
        assert!(fields.contains(&("monthlySavings".into(), "1000".into())));
        assert_eq!(1, log.calls().len());
        Ok(())
    }
}
