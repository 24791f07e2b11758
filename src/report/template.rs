use super::{
    format::{plain, thousands},
    ReportMetrics, WEEKS_PER_MONTH,
};
use crate::lead::Lead;

pub const SUBJECT: &str = "Your Automation Audit Report - Semperr";
pub const CONTACT_URL: &str = "https://semperr.com/contact-us";

struct Opportunity {
    title: &'static str,
    description: &'static str,
}

const OPPORTUNITIES: [Opportunity; 4] = [
    Opportunity {
        title: "Data Entry & Processing",
        description: "Automate repetitive data entry between systems, reducing errors and freeing up 40-60% of manual processing time.",
    },
    Opportunity {
        title: "Report Generation",
        description: "Automated reporting dashboards that pull real-time data, eliminating hours of manual compilation.",
    },
    Opportunity {
        title: "Email & Communication Workflows",
        description: "Smart routing, auto-responses, and AI-assisted drafting to handle routine communications.",
    },
    Opportunity {
        title: "Document Processing",
        description: "AI-powered extraction, categorization, and filing of documents across your organization.",
    },
];

const CARD_STYLE: &str = "padding: 20px; background-color: #f8f9fa; border-radius: 8px; text-align: center;";
const H2_STYLE: &str = "color: #0a0a0a; margin: 0 0 20px; font-size: 20px; font-weight: 600;";

/// Renders the audit report email for a lead.
pub fn render(lead: &Lead, metrics: &ReportMetrics) -> String {
    let monthly_savings = thousands(metrics.monthly_savings);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin: 0; padding: 0; background-color: #f5f5f5; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f5f5f5; padding: 40px 20px;">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);">
          <tr>
            <td style="background: linear-gradient(135deg, #0a0a0a 0%, #1a1a1a 100%); padding: 40px; text-align: center;">
              <h1 style="color: #ffffff; margin: 0; font-size: 28px; font-weight: 700;">Your Automation Audit</h1>
              <p style="color: #888888; margin: 10px 0 0; font-size: 16px;">Prepared by Semperr</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
              <h2 style="{H2_STYLE}">Executive Summary</h2>
              <p style="color: #444444; line-height: 1.6; margin: 0 0 20px;">
                Based on your input of <strong>{team_size} team members</strong> spending <strong>{hours_per_week} hours per week</strong> on repetitive administrative tasks, we've identified significant automation opportunities for your organization.
              </p>
            </td>
          </tr>
{savings_cards}
{time_cards}
          <tr>
            <td style="padding: 0 40px 40px;">
              <h2 style="{H2_STYLE}">Our Methodology</h2>
              <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f8f9fa; border-radius: 8px; padding: 20px;">
                <tr>
                  <td style="padding: 20px;">
                    <p style="color: #444444; line-height: 1.8; margin: 0;">
                      <strong>Hourly Cost Baseline:</strong> ${hourly_rate}/hour (industry average for administrative work)<br><br>
                      <strong>Efficiency Target:</strong> {efficiency}% reduction in manual task time<br><br>
                      <strong>Calculation:</strong> {hours_per_week} hours x ${hourly_rate} x {weeks} weeks x {efficiency}% = ${monthly_savings}/month
                    </p>
                  </td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <td style="padding: 0 40px 40px;">
              <h2 style="{H2_STYLE}">Top Automation Opportunities</h2>
{opportunities}
            </td>
          </tr>
          <tr>
            <td style="padding: 0 40px 40px;">
              <table width="100%" cellpadding="0" cellspacing="0" style="background: linear-gradient(135deg, #0a0a0a 0%, #1a1a1a 100%); border-radius: 8px;">
                <tr>
                  <td style="padding: 30px; text-align: center;">
                    <h3 style="color: #ffffff; margin: 0 0 10px; font-size: 18px;">Ready to capture these savings?</h3>
                    <p style="color: #888888; margin: 0 0 20px; font-size: 14px;">Let's discuss your specific automation opportunities.</p>
                    <a href="{CONTACT_URL}" style="display: inline-block; background-color: #ffffff; color: #0a0a0a; padding: 14px 28px; border-radius: 6px; text-decoration: none; font-weight: 600; font-size: 14px;">Schedule a Free Consultation</a>
                  </td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <td style="padding: 30px 40px; background-color: #f8f9fa; text-align: center;">
              <p style="color: #888888; margin: 0; font-size: 12px;">
                Semperr | The Team That Scales with You<br>
                Malibu, Los Angeles | hello@semperr.com | (760) 791-5525
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#,
        team_size = plain(lead.team_size),
        hours_per_week = plain(lead.hours_per_week),
        savings_cards = card_row(
            (&format!("${monthly_savings}"), "Monthly Savings"),
            (&format!("${}", thousands(metrics.annual_savings)), "Annual Savings"),
        ),
        time_cards = card_row(
            (&thousands(metrics.hours_reclaimed as f64), "Hours Reclaimed/Year"),
            (&metrics.fte_saved(), "FTE Equivalent Saved"),
        ),
        hourly_rate = metrics.hourly_rate,
        efficiency = metrics.efficiency_gain_percent(),
        weeks = WEEKS_PER_MONTH,
        opportunities = opportunities(),
    )
}

fn card_row(left: (&str, &str), right: (&str, &str)) -> String {
    format!(
        r#"          <tr>
            <td style="padding: 0 40px 40px;">
              <table width="100%" cellpadding="0" cellspacing="0">
                <tr>
{left}
                  <td width="10"></td>
{right}
                </tr>
              </table>
            </td>
          </tr>"#,
        left = card(left.0, left.1),
        right = card(right.0, right.1),
    )
}

fn card(value: &str, label: &str) -> String {
    format!(
        r#"                  <td width="50%" style="{CARD_STYLE}">
                    <div style="font-size: 32px; font-weight: 700; color: #0a0a0a;">{value}</div>
                    <div style="font-size: 14px; color: #666666; margin-top: 5px;">{label}</div>
                  </td>"#
    )
}

fn opportunities() -> String {
    OPPORTUNITIES
        .iter()
        .enumerate()
        .map(|(i, it)| {
            let margin = if i + 1 < OPPORTUNITIES.len() {
                " margin-bottom: 20px;"
            } else {
                ""
            };
            format!(
                r#"              <div style="border-left: 3px solid #0a0a0a; padding-left: 20px;{margin}">
                <h3 style="color: #0a0a0a; margin: 0 0 8px; font-size: 16px;">{n}. {title}</h3>
                <p style="color: #666666; margin: 0; font-size: 14px; line-height: 1.6;">{description}</p>
              </div>"#,
                n = i + 1,
                title = it.title,
                description = it.description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
