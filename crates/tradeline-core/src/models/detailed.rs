//! Detailed tradeline: one typed field per attribute of an account block.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::record::{Field, Record, NOT_AVAILABLE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedRecord {
    // Creditor
    pub account_name: String,
    pub address: String,
    pub city_state: String,
    pub phone: String,

    // Account
    pub account_number: String,
    pub account_type: String,
    pub responsibility: String,
    pub loan_type: String,
    pub terms: String,
    pub account_status: String,
    pub payment_status: String,
    pub dispute_status: String,
    pub creditor_classification: String,

    // Amounts
    pub reported_balance: Option<Decimal>,
    pub credit_limit: Option<Decimal>,
    pub high_balance: Option<Decimal>,
    pub original_amount: Option<Decimal>,
    pub monthly_payment: Option<Decimal>,
    pub recent_payment: Option<Decimal>,
    pub amount_past_due: Option<Decimal>,
    pub available_credit: Option<Decimal>,
    pub charge_off_amount: Option<Decimal>,
    pub deferred_payment_amount: Option<Decimal>,

    // Dates
    pub date_opened: Option<NaiveDate>,
    pub date_reported: Option<NaiveDate>,
    pub date_of_last_payment: Option<NaiveDate>,
    pub date_of_last_activity: Option<NaiveDate>,
    pub date_closed: Option<NaiveDate>,
    pub date_of_first_delinquency: Option<NaiveDate>,
    pub balance_updated: Option<NaiveDate>,

    // Payment counts
    pub months_reviewed: Option<u32>,
    pub times_30_days_late: Option<u32>,
    pub times_60_days_late: Option<u32>,
    pub times_90_days_late: Option<u32>,

    pub remarks: String,
}

impl Default for DetailedRecord {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            account_name: na(),
            address: na(),
            city_state: na(),
            phone: na(),
            account_number: na(),
            account_type: na(),
            responsibility: na(),
            loan_type: na(),
            terms: na(),
            account_status: na(),
            payment_status: na(),
            dispute_status: na(),
            creditor_classification: na(),
            reported_balance: None,
            credit_limit: None,
            high_balance: None,
            original_amount: None,
            monthly_payment: None,
            recent_payment: None,
            amount_past_due: None,
            available_credit: None,
            charge_off_amount: None,
            deferred_payment_amount: None,
            date_opened: None,
            date_reported: None,
            date_of_last_payment: None,
            date_of_last_activity: None,
            date_closed: None,
            date_of_first_delinquency: None,
            balance_updated: None,
            months_reviewed: None,
            times_30_days_late: None,
            times_60_days_late: None,
            times_90_days_late: None,
            remarks: na(),
        }
    }
}

impl Record for DetailedRecord {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::section("CREDITOR"),
            Field::text("Account Name", &self.account_name),
            Field::text("Address", &self.address),
            Field::text("City/State", &self.city_state),
            Field::text("Phone", &self.phone),
            Field::section("ACCOUNT"),
            Field::text("Account Number", &self.account_number),
            Field::text("Account Type", &self.account_type),
            Field::text("Responsibility", &self.responsibility),
            Field::text("Loan Type", &self.loan_type),
            Field::text("Terms", &self.terms),
            Field::text("Account Status", &self.account_status),
            Field::text("Payment Status", &self.payment_status),
            Field::text("Dispute Status", &self.dispute_status),
            Field::text("Creditor Classification", &self.creditor_classification),
            Field::section("AMOUNTS"),
            Field::amount("Reported Balance", self.reported_balance),
            Field::amount("Credit Limit", self.credit_limit),
            Field::amount("High Balance", self.high_balance),
            Field::amount("Original Amount", self.original_amount),
            Field::amount("Monthly Payment", self.monthly_payment),
            Field::amount("Recent Payment", self.recent_payment),
            Field::amount("Amount Past Due", self.amount_past_due),
            Field::amount("Available Credit", self.available_credit),
            Field::amount("Charge Off Amount", self.charge_off_amount),
            Field::amount("Deferred Payment Amount", self.deferred_payment_amount),
            Field::section("DATES"),
            Field::date("Date Opened", self.date_opened),
            Field::date("Date Reported", self.date_reported),
            Field::date("Date of Last Payment", self.date_of_last_payment),
            Field::date("Date of Last Activity", self.date_of_last_activity),
            Field::date("Date Closed", self.date_closed),
            Field::date("Date of First Delinquency", self.date_of_first_delinquency),
            Field::date("Balance Updated", self.balance_updated),
            Field::section("PAYMENT HISTORY"),
            Field::count("Months Reviewed", self.months_reviewed),
            Field::count("30 Days Late", self.times_30_days_late),
            Field::count("60 Days Late", self.times_60_days_late),
            Field::count("90 Days Late", self.times_90_days_late),
            Field::text("Remarks", &self.remarks),
        ]
    }
}
