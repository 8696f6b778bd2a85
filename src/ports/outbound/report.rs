//! ユーザー向け報告の Outbound ポート
//!
//! 保存・読み込みの失敗をコンソールに流すためのチャネル。構造化ログ
//! （ファイル JSONL）とは独立で、画面の結果表示を妨げずに要点だけ出す。

use anyhow::Result;

/// 1 件の報告を書き出す Sink
///
/// 実装は adapter::StderrReportSink（stderr へ 1 行）や
/// SilentReportSink（テスト・組み込み用）など。
pub trait ReportSink: Send {
    fn report(&mut self, message: &str) -> Result<()>;
}
