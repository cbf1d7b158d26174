//! Styled spreadsheet report.
//!
//! Layout on a single sheet:
//!
//! - a key/value block, labels in column A and values in column B
//! - for records with a history, a blank row followed by a matrix with one
//!   column per month, most recent first

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use tracing::debug;

use crate::error::ReportError;
use crate::models::config::ReportConfig;
use crate::models::history::{HistoryMetric, MonthlyHistory};
use crate::models::record::{Field, FieldValue, Record, DATE_FORMAT};

pub const SHEET_NAME: &str = "Sheet1";

const MONEY_FORMAT: &str = "$#,##0.00";
const MATRIX_MONEY_FORMAT: &str = "$#,##0";
const DATE_CELL_FORMAT: &str = "yyyy-mm-dd";
const YEAR_FORMAT: &str = "0000";

/// Metric rows below `Balance`, in matrix order.
const EXTRA_METRICS: [HistoryMetric; 4] = [
    HistoryMetric::ScheduledPayment,
    HistoryMetric::ActualPayment,
    HistoryMetric::CreditLimit,
    HistoryMetric::AmountPastDue,
];

type XlsxResult<T> = std::result::Result<T, rust_xlsxwriter::XlsxError>;

struct Formats {
    header: Format,
    money: Format,
    matrix_money: Format,
    date: Format,
    year: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold().set_font_size(12),
            money: Format::new().set_num_format(MONEY_FORMAT),
            matrix_money: Format::new().set_num_format(MATRIX_MONEY_FORMAT),
            date: Format::new().set_num_format(DATE_CELL_FORMAT),
            year: Format::new().set_num_format(YEAR_FORMAT),
        }
    }
}

/// Writes records to `.xlsx` workbooks.
pub struct SpreadsheetWriter {
    config: ReportConfig,
}

impl SpreadsheetWriter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Build the workbook for a record.
    pub fn build<R: Record>(&self, record: &R) -> Result<Workbook, ReportError> {
        let formats = Formats::new();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let fields = record.fields();
        for (row, field) in fields.iter().enumerate() {
            write_field(worksheet, row as u32, field, &formats)?;
        }

        let mut month_columns = 0;
        if let Some(history) = record.history() {
            // One blank row between the blocks
            let start = fields.len() as u32 + 1;
            month_columns = write_matrix(worksheet, start, history, &formats)?;
        }

        worksheet.set_column_width(0, self.config.label_column_width)?;
        worksheet.set_column_width(1, self.config.value_column_width)?;
        for col in 2..=month_columns {
            worksheet.set_column_width(col, self.config.month_column_width)?;
        }

        Ok(workbook)
    }

    /// Build and save the workbook, replacing any existing file.
    pub fn write<R: Record>(&self, record: &R, path: &Path) -> Result<(), ReportError> {
        let mut workbook = self.build(record)?;
        workbook.save(path)?;
        debug!("Saved workbook {}", path.display());
        Ok(())
    }
}

fn is_date_label(label: &str) -> bool {
    label.to_ascii_lowercase().contains("date")
}

/// Excel serial date, or `None` outside the 1900-9999 range Excel supports.
fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year())
        .ok()
        .filter(|year| (1900..=9999).contains(year))?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

fn write_money(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    amount: Decimal,
    format: &Format,
) -> XlsxResult<()> {
    match amount.to_f64() {
        Some(number) => worksheet.write_number_with_format(row, col, number, format)?,
        None => worksheet.write_string(row, col, amount.to_string())?,
    };
    Ok(())
}

fn write_field(worksheet: &mut Worksheet, row: u32, field: &Field, formats: &Formats) -> XlsxResult<()> {
    if let FieldValue::Section = field.value {
        worksheet.write_string_with_format(row, 0, field.label, &formats.header)?;
        return Ok(());
    }

    worksheet.write_string(row, 0, field.label)?;
    if field.value.is_null() {
        return Ok(());
    }

    match &field.value {
        FieldValue::Text(text) if is_date_label(field.label) => {
            worksheet.write_string_with_format(row, 1, text, &formats.date)?;
        }
        FieldValue::Text(text) => {
            worksheet.write_string(row, 1, text)?;
        }
        FieldValue::Amount(Some(amount)) => {
            write_money(worksheet, row, 1, *amount, &formats.money)?;
        }
        FieldValue::Date(Some(date)) => match excel_date(*date) {
            Some(datetime) => {
                worksheet.write_datetime_with_format(row, 1, &datetime, &formats.date)?;
            }
            None => {
                let display = date.format(DATE_FORMAT).to_string();
                worksheet.write_string_with_format(row, 1, display, &formats.date)?;
            }
        },
        FieldValue::Count(Some(count)) => {
            worksheet.write_number(row, 1, *count)?;
        }
        _ => {}
    }
    Ok(())
}

/// Write the history matrix starting at `start`. Returns the last month column.
fn write_matrix(
    worksheet: &mut Worksheet,
    start: u32,
    history: &MonthlyHistory,
    formats: &Formats,
) -> XlsxResult<u16> {
    worksheet.write_string_with_format(start, 0, "Year", &formats.header)?;
    worksheet.write_string_with_format(start + 1, 0, "Month ID", &formats.header)?;
    worksheet.write_string_with_format(start + 2, 0, "Month", &formats.header)?;
    worksheet.write_string_with_format(start + 3, 0, HistoryMetric::Balance.label(), &formats.header)?;

    let metric_rows: Vec<(u32, HistoryMetric)> = EXTRA_METRICS
        .into_iter()
        .enumerate()
        .filter(|(_, metric)| history.has_metric(*metric))
        .map(|(i, metric)| (start + 4 + i as u32, metric))
        .collect();
    for (row, metric) in &metric_rows {
        worksheet.write_string_with_format(*row, 0, metric.label(), &formats.header)?;
    }

    let points = history.most_recent_first();
    for (i, point) in points.iter().enumerate() {
        let col = 1 + i as u16;
        worksheet.write_number_with_format(start, col, point.year, &formats.year)?;
        worksheet.write_number(start + 1, col, point.month_id)?;
        worksheet.write_string(start + 2, col, point.month_name)?;

        if let Some(balance) = point.balance {
            write_money(worksheet, start + 3, col, balance, &formats.matrix_money)?;
        }
        for (row, metric) in &metric_rows {
            if let Some(amount) = point.metric(*metric) {
                write_money(worksheet, *row, col, amount, &formats.matrix_money)?;
            }
        }
    }

    debug!("Wrote {} history columns", points.len());
    Ok(points.len() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::detailed::DetailedRecord;
    use crate::models::summary::SummaryRecord;
    use calamine::{open_workbook, Data, Range, Reader, Xlsx};
    use pretty_assertions::assert_eq;

    fn read_back<R: Record>(record: &R) -> Range<Data> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tradeline_data.xlsx");
        SpreadsheetWriter::new(&ReportConfig::default())
            .write(record, &path)
            .unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    fn cell(range: &Range<Data>, row: u32, col: u32) -> Option<&Data> {
        range.get_value((row, col)).filter(|d| !matches!(d, Data::Empty))
    }

    fn number(range: &Range<Data>, row: u32, col: u32) -> f64 {
        match cell(range, row, col) {
            Some(Data::Float(f)) => *f,
            Some(Data::Int(i)) => *i as f64,
            Some(Data::DateTime(dt)) => dt.as_f64(),
            other => panic!("expected a number at ({}, {}), got {:?}", row, col, other),
        }
    }

    fn text(range: &Range<Data>, row: u32, col: u32) -> String {
        match cell(range, row, col) {
            Some(Data::String(s)) => s.clone(),
            other => panic!("expected a string at ({}, {}), got {:?}", row, col, other),
        }
    }

    #[test]
    fn test_summary_key_value_block() {
        let mut record = SummaryRecord::new(2022);
        record.account_number = "XXXX 1234".to_string();
        record.reported_balance = Some(Decimal::from(949));
        let range = read_back(&record);

        assert_eq!(text(&range, 0, 0), "SUMMARY");
        assert_eq!(text(&range, 2, 0), "Account Number");
        assert_eq!(text(&range, 2, 1), "XXXX 1234");
        assert_eq!(number(&range, 3, 1), 949.0);
        assert_eq!(cell(&range, 5, 1), None);
        assert_eq!(text(&range, 6, 0), "ACCOUNT HISTORY");
        assert_eq!(cell(&range, 7, 0), None);
    }

    #[test]
    fn test_summary_matrix_most_recent_first() {
        let mut record = SummaryRecord::new(2022);
        record.history.set(36, HistoryMetric::Balance, Decimal::from(1234));
        record.history.set(1, HistoryMetric::Balance, Decimal::from(7));
        record.history.set(35, HistoryMetric::ActualPayment, Decimal::from(50));
        let range = read_back(&record);

        // Key/value block has 7 rows, then one blank row
        let start = 8;
        assert_eq!(text(&range, start, 0), "Year");
        assert_eq!(text(&range, start + 1, 0), "Month ID");
        assert_eq!(text(&range, start + 2, 0), "Month");
        assert_eq!(text(&range, start + 3, 0), "Balance");

        assert_eq!(number(&range, start, 1), 2022.0);
        assert_eq!(number(&range, start + 1, 1), 36.0);
        assert_eq!(text(&range, start + 2, 1), "DEC");
        assert_eq!(number(&range, start + 3, 1), 1234.0);

        assert_eq!(number(&range, start + 1, 36), 1.0);
        assert_eq!(text(&range, start + 2, 36), "JAN");
        assert_eq!(number(&range, start, 36), 2020.0);
        assert_eq!(number(&range, start + 3, 36), 7.0);
        assert_eq!(cell(&range, start + 3, 2), None);

        assert_eq!(text(&range, start + 5, 0), "Actual Payment");
        assert_eq!(number(&range, start + 5, 2), 50.0);
        assert_eq!(cell(&range, start + 4, 0), None);
        assert_eq!(cell(&range, start + 5, 1), None);
    }

    #[test]
    fn test_detailed_has_no_matrix() {
        let mut record = DetailedRecord::default();
        record.date_opened = NaiveDate::from_ymd_opt(2017, 1, 5);
        record.months_reviewed = Some(74);
        let fields = record.fields();
        let range = read_back(&record);

        let opened = fields.iter().position(|f| f.label == "Date Opened").unwrap() as u32;
        // 2017-01-05 as an Excel serial date
        assert_eq!(number(&range, opened, 1), 42740.0);

        let reviewed = fields.iter().position(|f| f.label == "Months Reviewed").unwrap() as u32;
        assert_eq!(number(&range, reviewed, 1), 74.0);

        assert_eq!(range.end().map(|(row, _)| row), Some(fields.len() as u32 - 1));
    }

    #[test]
    fn test_date_before_1900_is_written_as_text() {
        let mut record = DetailedRecord::default();
        record.date_opened = NaiveDate::from_ymd_opt(1899, 1, 5);
        let fields = record.fields();
        let range = read_back(&record);

        let opened = fields.iter().position(|f| f.label == "Date Opened").unwrap() as u32;
        assert_eq!(text(&range, opened, 1), "1899-01-05");

        let reviewed = fields.iter().position(|f| f.label == "Months Reviewed").unwrap() as u32;
        assert_eq!(cell(&range, reviewed, 1), None);
    }

    #[test]
    fn test_excel_date_range() {
        assert!(excel_date(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()).is_some());
        assert!(excel_date(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()).is_none());
        assert!(excel_date(NaiveDate::from_ymd_opt(-44, 3, 15).unwrap()).is_none());
        assert!(excel_date(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap()).is_none());
    }

    #[test]
    fn test_date_label_detection() {
        assert!(is_date_label("Date Opened"));
        assert!(is_date_label("Balance Updated (date)"));
        assert!(!is_date_label("Account Status"));
    }
}
