//! Outbound ポート: サブシステムが外界を使うための trait 群

pub mod fs;
pub mod history_store;
pub mod log;
pub mod report;

pub use fs::{FileMetadata, FileSystem};
pub use history_store::HistoryStore;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use report::ReportSink;
