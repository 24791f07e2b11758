pub mod store;

use crate::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub const SOURCE: &str = "automation-audit";
pub const LIST_NAME: &str = "leads:automation-audit";
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Raw form payload. Every field is optional here, presence is checked by [`Submission::validate`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "number")]
    pub team_size: Option<f64>,
    #[serde(default, deserialize_with = "number")]
    pub hours_per_week: Option<f64>,
    #[serde(default, deserialize_with = "number")]
    pub monthly_savings: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub email: String,
    pub team_size: f64,
    pub hours_per_week: f64,
    pub monthly_savings: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub key: String,
    pub email: String,
    pub team_size: f64,
    pub hours_per_week: f64,
    pub monthly_savings: f64,
    pub created_at: OffsetDateTime,
    pub source: &'static str,
}

impl Submission {
    /// Anything that isn't a JSON object is treated as a submission with no fields.
    pub fn parse(body: &[u8]) -> Submission {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn validate(self) -> Result<NewLead> {
        let email = self.email.filter(|it| !it.trim().is_empty());
        let team_size = self.team_size.filter(|it| *it > 0.0);
        let hours_per_week = self.hours_per_week.filter(|it| *it > 0.0);
        match (email, team_size, hours_per_week) {
            (Some(email), Some(team_size), Some(hours_per_week)) => Ok(NewLead {
                email,
                team_size,
                hours_per_week,
                monthly_savings: self.monthly_savings.unwrap_or(0.0),
            }),
            _ => Err(Error::InvalidInput(MISSING_FIELDS.into())),
        }
    }
}

impl Lead {
    pub fn new(lead: NewLead, created_at: OffsetDateTime) -> Lead {
        Lead {
            key: key(created_at),
            email: lead.email,
            team_size: lead.team_size,
            hours_per_week: lead.hours_per_week,
            monthly_savings: lead.monthly_savings,
            created_at,
            source: SOURCE,
        }
    }

    pub fn fields(&self) -> Result<Vec<(String, String)>> {
        Ok(vec![
            ("email".into(), self.email.clone()),
            ("teamSize".into(), self.team_size.to_string()),
            ("hoursPerWeek".into(), self.hours_per_week.to_string()),
            ("monthlySavings".into(), self.monthly_savings.to_string()),
            ("createdAt".into(), self.created_at.format(&Rfc3339)?),
            ("source".into(), self.source.into()),
        ])
    }
}

pub fn key(created_at: OffsetDateTime) -> String {
    format!("lead:{}", created_at.unix_timestamp_nanos() / 1_000_000)
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(it) => Some(it),
        _ => None,
    })
}

// Numeric strings are accepted, anything else non-numeric is treated as absent
fn number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<f64>, D::Error> {
    let number = match Value::deserialize(deserializer)? {
        Value::Number(it) => it.as_f64(),
        Value::String(it) => it.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|it| it.is_finite()))
}
