//! 標準アダプタ（Outbound ポートの実装）
//!
//! usecase はポートの trait 経由でのみ外界に触れる。ここにあるのは
//! 標準実装（ファイル・stderr）で、テストではモックを注入する。

pub mod file_json_log;
pub mod history_storage;
pub mod std_fs;
pub mod stderr_report;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use history_storage::{FileHistoryStorage, HISTORY_KEY};
pub use std_fs::StdFileSystem;
pub use stderr_report::{SilentReportSink, StderrReportSink};
