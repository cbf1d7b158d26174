//! Common patterns and fixed vocabularies for tradeline extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Plain unsigned integer (payment counters)
    pub static ref COUNT: Regex = Regex::new(r"^\d+$").unwrap();

    // History cell: digits with optional thousands separators
    pub static ref HISTORY_VALUE: Regex = Regex::new(r"^\d[\d,]*$").unwrap();
}

/// Report date format, e.g. `Jan 05, 2017`.
pub const REPORT_DATE_FORMAT: &str = "%b %d, %Y";

/// Values that mean "nothing reported".
pub const PLACEHOLDERS: &[&str] = &["", "-", "--", "N/A", "NA", "NONE"];

/// Institution keywords identifying the creditor line.
pub const BANK_KEYWORDS: &[&str] = &["BANK", "FCU", "CREDIT UNION", "FINANCIAL"];

/// Postal-box markers for the creditor address line.
pub const PO_BOX_LITERALS: &[&str] = &["P.O. BOX", "PO BOX"];

/// City/state lines of the supported issuers.
pub const CITY_STATE_LITERALS: &[&str] = &[
    "WILMINGTON, DE",
    "SIOUX FALLS, SD",
    "SALT LAKE CITY, UT",
    "RICHMOND, VA",
];

/// Toll-free prefixes of the supported issuers.
pub const PHONE_PREFIXES: &[&str] = &["(800)", "(888)", "(877)", "(866)", "1-800-"];

/// Whether a value is a "no data" placeholder.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(value))
}
