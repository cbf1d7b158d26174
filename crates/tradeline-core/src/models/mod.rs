//! Data models for extracted tradelines and pipeline configuration.

pub mod config;
pub mod detailed;
pub mod history;
pub mod record;
pub mod summary;

pub use config::TradelineConfig;
pub use detailed::DetailedRecord;
pub use history::{HistoryMetric, HistoryPoint, MonthlyHistory};
pub use record::{Field, FieldValue, Record, NOT_AVAILABLE};
pub use summary::SummaryRecord;
