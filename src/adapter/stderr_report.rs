//! ユーザー向け報告の標準実装（stderr へ 1 行出力）
//!
//! 既存のロガー（tracing / log）には接続せず、stderr へそのまま流す。
//! 文言は呼び出し側が組み立て済みのものを受け取る。

use crate::ports::outbound::ReportSink;
use anyhow::Result;

/// stderr に 1 行で報告を出す Sink
pub struct StderrReportSink;

impl StderrReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for StderrReportSink {
    fn report(&mut self, message: &str) -> Result<()> {
        eprintln!("{}", message);
        Ok(())
    }
}

/// 何も出力しない Sink（テスト・組み込み用）
#[derive(Debug, Clone, Default)]
pub struct SilentReportSink;

impl ReportSink for SilentReportSink {
    fn report(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}
