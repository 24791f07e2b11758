pub mod format;
pub mod template;

pub const HOURLY_RATE: i64 = 35;
pub const EFFICIENCY_GAIN: f64 = 0.30;
pub const WEEKS_PER_MONTH: i64 = 4;
const WEEKS_PER_YEAR: f64 = 52.0;
/// One full-time employee, 40 hours a week over 52 weeks
const FTE_HOURS_PER_YEAR: i64 = 2080;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetrics {
    pub hourly_rate: i64,
    pub efficiency_gain: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub hours_reclaimed: i64,
    fte_saved_tenths: i64,
}

impl ReportMetrics {
    pub fn new(hours_per_week: f64, monthly_savings: f64) -> ReportMetrics {
        let hours_reclaimed = (hours_per_week * EFFICIENCY_GAIN * WEEKS_PER_YEAR).round() as i64;
        // Integer math keeps x.x5 ties rounding up
        let fte_saved_tenths = hours_reclaimed
            .saturating_mul(10)
            .saturating_add(FTE_HOURS_PER_YEAR / 2)
            / FTE_HOURS_PER_YEAR;
        ReportMetrics {
            hourly_rate: HOURLY_RATE,
            efficiency_gain: EFFICIENCY_GAIN,
            monthly_savings,
            annual_savings: monthly_savings * 12.0,
            hours_reclaimed,
            fte_saved_tenths,
        }
    }

    /// FTE saved, always with exactly one decimal
    pub fn fte_saved(&self) -> String {
        format!("{}.{}", self.fte_saved_tenths / 10, self.fte_saved_tenths % 10)
    }

    pub fn efficiency_gain_percent(&self) -> i64 {
        (self.efficiency_gain * 100.0).round() as i64
    }
}
