//! Detailed layout: one labelled value per account attribute.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::line::CleanLine;
use super::rules::patterns::{CITY_STATE_LITERALS, PHONE_PREFIXES, PO_BOX_LITERALS};
use super::rules::{
    AmountField, BeforeMarker, ContactLiteral, CountField, CurrencyAfterMarker, DateField,
    LineRule, MarkerPair, TextField,
};
use super::scan::{scan, Extraction};
use super::Extractor;
use crate::models::detailed::DetailedRecord;

/// Markers of the detailed layout. A marker's value ends where the next one
/// begins.
pub const DETAILED_MARKERS: &[&str] = &[
    "Account Name",
    "Account Number",
    "Account Type",
    "Responsibility",
    "Loan Type",
    "Terms",
    "Account Status",
    "Payment Status",
    "Dispute Status",
    "Creditor Classification",
    "Reported Balance",
    "Credit Limit",
    "High Balance",
    "Original Amount",
    "Monthly Payment",
    "Recent Payment",
    "Amount Past Due",
    "Available Credit",
    "Charge Off Amount",
    "Deferred Payment Amount",
    "Date Opened",
    "Date Reported",
    "Date of Last Payment",
    "Date of Last Activity",
    "Date Closed",
    "Date of First Delinquency",
    "Balance Updated",
    "Months Reviewed",
    "30 Days Late",
    "60 Days Late",
    "90 Days Late",
    REMARKS,
];

/// Trailing free-text marker. Everything after it belongs to the remarks.
pub const REMARKS: &str = "Remarks";

type BoxedRule = Box<dyn LineRule<DetailedRecord>>;

fn text(marker: &'static str, slot: fn(&mut DetailedRecord) -> &mut String) -> TextField<DetailedRecord> {
    TextField::new(marker, DETAILED_MARKERS, slot)
}

fn amount(
    marker: &'static str,
    slot: fn(&mut DetailedRecord) -> &mut Option<Decimal>,
) -> AmountField<DetailedRecord> {
    AmountField::new(marker, DETAILED_MARKERS, slot)
}

fn date(
    marker: &'static str,
    slot: fn(&mut DetailedRecord) -> &mut Option<NaiveDate>,
) -> DateField<DetailedRecord> {
    DateField::new(marker, DETAILED_MARKERS, slot)
}

fn count(marker: &'static str, slot: fn(&mut DetailedRecord) -> &mut Option<u32>) -> CountField<DetailedRecord> {
    CountField::new(marker, DETAILED_MARKERS, slot)
}

/// Extractor for the detailed tradeline layout.
#[derive(Default)]
pub struct DetailedExtractor;

impl DetailedExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules(&self) -> Vec<BoxedRule> {
        let mut rules: Vec<BoxedRule> = vec![
            // Creditor
            Box::new(text("Account Name", |r| &mut r.account_name).to_next_marker()),
            Box::new(ContactLiteral::new("Address", PO_BOX_LITERALS, |r: &mut DetailedRecord| {
                &mut r.address
            })),
            Box::new(ContactLiteral::new(
                "City/State",
                CITY_STATE_LITERALS,
                |r: &mut DetailedRecord| &mut r.city_state,
            )),
            Box::new(ContactLiteral::new("Phone", PHONE_PREFIXES, |r: &mut DetailedRecord| {
                &mut r.phone
            })),
            // Identifier and balance share a line
            Box::new(MarkerPair::new(
                text("Account Number", |r| &mut r.account_number).with_width(2),
                amount("Reported Balance", |r| &mut r.reported_balance),
            )),
            // Credit limit only counts with a `$`; Account Type is read regardless
            Box::new(CurrencyAfterMarker::new(
                "Credit Limit",
                DETAILED_MARKERS,
                |r: &mut DetailedRecord| &mut r.credit_limit,
            )),
        ];

        let texts: [(&'static str, fn(&mut DetailedRecord) -> &mut String); 8] = [
            ("Account Type", |r| &mut r.account_type),
            ("Responsibility", |r| &mut r.responsibility),
            ("Loan Type", |r| &mut r.loan_type),
            ("Terms", |r| &mut r.terms),
            ("Account Status", |r| &mut r.account_status),
            ("Payment Status", |r| &mut r.payment_status),
            ("Dispute Status", |r| &mut r.dispute_status),
            ("Creditor Classification", |r| &mut r.creditor_classification),
        ];
        rules.extend(
            texts
                .into_iter()
                .map(|(marker, slot)| -> BoxedRule { Box::new(text(marker, slot).to_next_marker()) }),
        );

        let amounts: [(&'static str, fn(&mut DetailedRecord) -> &mut Option<Decimal>); 8] = [
            ("High Balance", |r| &mut r.high_balance),
            ("Original Amount", |r| &mut r.original_amount),
            ("Monthly Payment", |r| &mut r.monthly_payment),
            ("Recent Payment", |r| &mut r.recent_payment),
            ("Amount Past Due", |r| &mut r.amount_past_due),
            ("Available Credit", |r| &mut r.available_credit),
            ("Charge Off Amount", |r| &mut r.charge_off_amount),
            ("Deferred Payment Amount", |r| &mut r.deferred_payment_amount),
        ];
        rules.extend(
            amounts
                .into_iter()
                .map(|(marker, slot)| -> BoxedRule { Box::new(amount(marker, slot)) }),
        );

        let dates: [(&'static str, fn(&mut DetailedRecord) -> &mut Option<NaiveDate>); 7] = [
            ("Date Opened", |r| &mut r.date_opened),
            ("Date Reported", |r| &mut r.date_reported),
            ("Date of Last Payment", |r| &mut r.date_of_last_payment),
            ("Date of Last Activity", |r| &mut r.date_of_last_activity),
            ("Date Closed", |r| &mut r.date_closed),
            ("Date of First Delinquency", |r| &mut r.date_of_first_delinquency),
            ("Balance Updated", |r| &mut r.balance_updated),
        ];
        rules.extend(
            dates
                .into_iter()
                .map(|(marker, slot)| -> BoxedRule { Box::new(date(marker, slot)) }),
        );

        let counts: [(&'static str, fn(&mut DetailedRecord) -> &mut Option<u32>); 4] = [
            ("Months Reviewed", |r| &mut r.months_reviewed),
            ("30 Days Late", |r| &mut r.times_30_days_late),
            ("60 Days Late", |r| &mut r.times_60_days_late),
            ("90 Days Late", |r| &mut r.times_90_days_late),
        ];
        rules.extend(
            counts
                .into_iter()
                .map(|(marker, slot)| -> BoxedRule { Box::new(count(marker, slot)) }),
        );

        let mut rules: Vec<BoxedRule> = rules
            .into_iter()
            .map(|rule| -> BoxedRule { Box::new(BeforeMarker::new(REMARKS, rule)) })
            .collect();
        rules.push(Box::new(text(REMARKS, |r| &mut r.remarks).to_end_of_line()));
        rules
    }
}

impl Extractor for DetailedExtractor {
    type Record = DetailedRecord;

    fn extract(&self, text: &str) -> Extraction<DetailedRecord> {
        let lines = CleanLine::split(text);
        info!("Extracting detailed tradeline from {} lines", lines.len());

        let mut record = DetailedRecord::default();
        let mut rules = self.rules();
        let diagnostics = scan(&lines, &mut record, &mut rules);

        debug!(
            "Detailed record for {} with {} diagnostics",
            record.account_number,
            diagnostics.len()
        );

        Extraction {
            record,
            transcript: lines,
            diagnostics,
        }
    }
}
