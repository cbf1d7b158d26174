//! The 36-month rolling history carried by summary tradelines.

use rust_decimal::Decimal;
use serde::Serialize;

/// Number of months in the history window.
pub const HISTORY_MONTHS: u32 = 36;

/// Month abbreviations, January first.
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Which per-month amount a history row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMetric {
    Balance,
    ScheduledPayment,
    ActualPayment,
    CreditLimit,
    AmountPastDue,
}

impl HistoryMetric {
    /// All metrics in matrix row order.
    pub const ALL: [HistoryMetric; 5] = [
        HistoryMetric::Balance,
        HistoryMetric::ScheduledPayment,
        HistoryMetric::ActualPayment,
        HistoryMetric::CreditLimit,
        HistoryMetric::AmountPastDue,
    ];

    /// Row label in the spreadsheet matrix.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryMetric::Balance => "Balance",
            HistoryMetric::ScheduledPayment => "Scheduled Payment",
            HistoryMetric::ActualPayment => "Actual Payment",
            HistoryMetric::CreditLimit => "Credit Limit",
            HistoryMetric::AmountPastDue => "Amount Past Due",
        }
    }

    /// Recognize a line that is nothing but a metric heading.
    pub fn from_heading(line: &str) -> Option<Self> {
        let line = line.trim().trim_end_matches(':');
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(line))
    }
}

/// One calendar month of history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub year: i32,
    /// 1..=36, 36 being the most recent month.
    pub month_id: u32,
    pub month_name: &'static str,
    pub balance: Option<Decimal>,
    pub scheduled_payment: Option<Decimal>,
    pub actual_payment: Option<Decimal>,
    pub credit_limit: Option<Decimal>,
    pub amount_past_due: Option<Decimal>,
}

impl HistoryPoint {
    fn empty(anchor_year: i32, month_id: u32) -> Self {
        let months_ago = HISTORY_MONTHS - month_id;
        let year = anchor_year - (months_ago / 12) as i32;
        let month_index = 11 - (months_ago % 12) as usize;
        Self {
            year,
            month_id,
            month_name: MONTHS[month_index],
            balance: None,
            scheduled_payment: None,
            actual_payment: None,
            credit_limit: None,
            amount_past_due: None,
        }
    }

    /// The amount stored for a metric.
    pub fn metric(&self, metric: HistoryMetric) -> Option<Decimal> {
        match metric {
            HistoryMetric::Balance => self.balance,
            HistoryMetric::ScheduledPayment => self.scheduled_payment,
            HistoryMetric::ActualPayment => self.actual_payment,
            HistoryMetric::CreditLimit => self.credit_limit,
            HistoryMetric::AmountPastDue => self.amount_past_due,
        }
    }

    fn metric_mut(&mut self, metric: HistoryMetric) -> &mut Option<Decimal> {
        match metric {
            HistoryMetric::Balance => &mut self.balance,
            HistoryMetric::ScheduledPayment => &mut self.scheduled_payment,
            HistoryMetric::ActualPayment => &mut self.actual_payment,
            HistoryMetric::CreditLimit => &mut self.credit_limit,
            HistoryMetric::AmountPastDue => &mut self.amount_past_due,
        }
    }
}

/// Exactly 36 months ending in December of the anchor year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyHistory {
    anchor_year: i32,
    /// Ordered by month_id descending (36 first).
    points: Vec<HistoryPoint>,
}

impl MonthlyHistory {
    /// Build an empty window anchored at `anchor_year`.
    pub fn new(anchor_year: i32) -> Self {
        let points = (1..=HISTORY_MONTHS)
            .rev()
            .map(|month_id| HistoryPoint::empty(anchor_year, month_id))
            .collect();
        Self {
            anchor_year,
            points,
        }
    }

    pub fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    /// Look up a month by ordinal.
    pub fn get(&self, month_id: u32) -> Option<&HistoryPoint> {
        self.index(month_id).map(|i| &self.points[i])
    }

    /// Points sorted by descending year, then descending ordinal.
    pub fn most_recent_first(&self) -> Vec<&HistoryPoint> {
        let mut sorted: Vec<&HistoryPoint> = self.points.iter().collect();
        sorted.sort_by(|a, b| b.year.cmp(&a.year).then(b.month_id.cmp(&a.month_id)));
        sorted
    }

    /// Whether any month carries a value for the metric.
    pub fn has_metric(&self, metric: HistoryMetric) -> bool {
        self.points.iter().any(|p| p.metric(metric).is_some())
    }

    /// Store a value. Ordinals outside the window are ignored.
    pub(crate) fn set(&mut self, month_id: u32, metric: HistoryMetric, value: Decimal) -> bool {
        match self.index(month_id) {
            Some(i) => {
                *self.points[i].metric_mut(metric) = Some(value);
                true
            }
            None => false,
        }
    }

    fn index(&self, month_id: u32) -> Option<usize> {
        if (1..=HISTORY_MONTHS).contains(&month_id) {
            Some((HISTORY_MONTHS - month_id) as usize)
        } else {
            None
        }
    }
}
